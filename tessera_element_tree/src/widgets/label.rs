// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Point;

use super::{TEXT_PADDING, WIDGET_FONT_SIZE};
use crate::paint::{Color, Painter, TextAlign, TextStyle};
use crate::types::Geometry;
use crate::widget::Widget;

/// Static text inside a thin grey frame.
#[derive(Clone, Debug)]
pub struct Label {
    /// Text to show.
    pub text: String,
    /// Horizontal placement within the frame.
    pub align: TextAlign,
}

impl Label {
    /// A centred label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Center,
        }
    }

    /// Same label with a different alignment.
    pub fn aligned(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    /// Where the text is anchored for the given bounds.
    pub fn anchor(&self, geometry: &Geometry) -> Point {
        let b = geometry.bounds();
        let y = b.center().y;
        match self.align {
            TextAlign::Left => Point::new(b.x0 + TEXT_PADDING, y),
            TextAlign::Center => b.center(),
            TextAlign::Right => Point::new(b.x1 - TEXT_PADDING, y),
        }
    }
}

impl Widget for Label {
    fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry) {
        painter.stroke_rect(geometry.bounds(), Color::GREY, 1.0);
        painter.text(
            &self.text,
            self.anchor(geometry),
            TextStyle::sized(WIDGET_FONT_SIZE).aligned(self.align),
        );
    }
}
