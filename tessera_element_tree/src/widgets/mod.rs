// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in widgets.

mod button;
mod container;
mod label;
mod text_field;

pub use button::{ButtonState, PushButton};
pub use container::Container;
pub use label::Label;
pub use text_field::TextField;

/// Inset between a widget's edge and its text.
pub const TEXT_PADDING: f64 = 10.0;

/// Font size used by the built-in widgets, in points.
pub const WIDGET_FONT_SIZE: f64 = 12.0;
