// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::paint::{Color, Painter};
use crate::types::Geometry;
use crate::widget::Widget;

/// A grouping element. Optionally fills its bounds; never handles input.
///
/// Children are whatever the tree holds under this element. They are drawn
/// after the fill, translated by the container's origin.
#[derive(Clone, Debug, Default)]
pub struct Container {
    /// Background fill, if any.
    pub fill: Option<Color>,
}

impl Container {
    /// An unfilled container.
    pub fn new() -> Self {
        Self::default()
    }

    /// A container with a background fill.
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color) }
    }
}

impl Widget for Container {
    fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry) {
        if let Some(fill) = self.fill {
            painter.fill_rect(geometry.bounds(), fill);
        }
    }
}
