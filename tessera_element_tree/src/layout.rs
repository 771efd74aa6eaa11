// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple row positioning helpers.
//!
//! These are not a layout engine: they only assign origins, left to right,
//! keeping each element's current size. Use them with
//! [`ElementTree::layout_children`](crate::ElementTree::layout_children).

use kurbo::{Point, Size};

use crate::types::Geometry;

/// Gap between elements and around the edge of the row.
pub const LAYOUT_PADDING: f64 = 10.0;

/// Place elements in a single row, ignoring the available width.
///
/// Returns the area spanned by the row, including padding on all sides.
pub fn row_layout(_available: Size, elements: &mut [Geometry]) -> Size {
    let mut x = LAYOUT_PADDING;
    let mut row_height: f64 = 0.0;
    for el in elements.iter_mut() {
        el.origin = Point::new(x, LAYOUT_PADDING);
        row_height = row_height.max(el.size.height);
        x += el.size.width + LAYOUT_PADDING;
    }
    Size::new(x, row_height + 2.0 * LAYOUT_PADDING)
}

/// Place elements left to right, starting a new row when the next element
/// would cross the available width. The first element of a row is always
/// placed, even if it is wider than the row.
///
/// Returns the area used, including padding.
pub fn row_wrap_layout(available: Size, elements: &mut [Geometry]) -> Size {
    let mut x = LAYOUT_PADDING;
    let mut y = LAYOUT_PADDING;
    let mut row_height: f64 = 0.0;
    let mut used = Size::ZERO;
    for (i, el) in elements.iter_mut().enumerate() {
        if i > 0 && x + el.size.width > available.width {
            x = LAYOUT_PADDING;
            y += row_height + LAYOUT_PADDING;
            row_height = 0.0;
        }
        el.origin = Point::new(x, y);
        row_height = row_height.max(el.size.height);
        x += el.size.width + LAYOUT_PADDING;
        used.width = used.width.max(x);
        used.height = used.height.max(y + row_height);
    }
    used.height += LAYOUT_PADDING;
    used
}
