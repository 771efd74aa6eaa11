// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface abstraction.
//!
//! Widgets and applications draw through the [`Painter`] trait; the host
//! implements it over whatever backend it owns (a canvas, a GPU renderer, a
//! terminal). [`DisplayList`] is a painter that records operations instead,
//! which is useful for headless hosts and for asserting on output in tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Circle, Point, Rect, Vec2};

/// A fill or stroke color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    /// 8-bit sRGB with alpha.
    Rgba {
        /// Red.
        r: u8,
        /// Green.
        g: u8,
        /// Blue.
        b: u8,
        /// Alpha (255 is opaque).
        a: u8,
    },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl {
        /// Hue, in degrees.
        h: f64,
        /// Saturation, 0 to 100.
        s: f64,
        /// Lightness, 0 to 100.
        l: f64,
    },
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// CSS `grey`.
    pub const GREY: Self = Self::rgb(128, 128, 128);
    /// CSS `lightgrey`.
    pub const LIGHT_GREY: Self = Self::rgb(211, 211, 211);
    /// CSS `lightskyblue`, the toolkit highlight color.
    pub const HIGHLIGHT: Self = Self::rgb(135, 206, 250);
    /// CSS `mediumblue`, used for focus rings.
    pub const FOCUS: Self = Self::rgb(0, 0, 205);

    /// Opaque sRGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    /// HSL color.
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::Hsl { h, s, l }
    }
}

/// Horizontal text anchoring relative to the given point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the point.
    Left,
    /// Text is centred on the point.
    #[default]
    Center,
    /// Text ends at the point.
    Right,
}

/// How to draw a run of text. Text is always vertically centred on its point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    /// Horizontal anchoring.
    pub align: TextAlign,
    /// Fill color.
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            align: TextAlign::Center,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Default style at the given size.
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Same style with a different alignment.
    pub fn aligned(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    /// Same style with a different color.
    pub fn colored(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// A 2D drawing surface.
pub trait Painter {
    /// Clear the whole surface.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Draw a single line of text anchored at `at`.
    fn text(&mut self, text: &str, at: Point, style: TextStyle);

    /// Offset subsequent drawing by `offset` until the matching [`Painter::pop`].
    fn push_translate(&mut self, offset: Vec2);

    /// Undo the most recent [`Painter::push_translate`].
    fn pop(&mut self);
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// See [`Painter::clear`].
    Clear,
    /// See [`Painter::fill_rect`].
    FillRect(Rect, Color),
    /// See [`Painter::stroke_rect`].
    StrokeRect(Rect, Color, f64),
    /// See [`Painter::fill_circle`].
    FillCircle(Circle, Color),
    /// See [`Painter::text`].
    Text(String, Point, TextStyle),
    /// See [`Painter::push_translate`].
    PushTranslate(Vec2),
    /// See [`Painter::pop`].
    Pop,
}

/// A [`Painter`] that records operations in order.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<PaintOp>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, oldest first.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Drop all recorded operations.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Recorded text runs, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Text(text, ..) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeRect(rect, color, width));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(PaintOp::FillCircle(circle, color));
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.ops.push(PaintOp::Text(text.to_string(), at, style));
    }

    fn push_translate(&mut self, offset: Vec2) {
        self.ops.push(PaintOp::PushTranslate(offset));
    }

    fn pop(&mut self) {
        self.ops.push(PaintOp::Pop);
    }
}
