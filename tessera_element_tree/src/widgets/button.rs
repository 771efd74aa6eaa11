// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use tessera_event_state::semantic::{MouseEvent, MouseKind};

use super::WIDGET_FONT_SIZE;
use crate::paint::{Color, Painter, TextStyle};
use crate::types::Geometry;
use crate::widget::{EventCx, Widget};

/// Visual state of a [`PushButton`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Pointer elsewhere.
    #[default]
    Idle,
    /// Pointer over the button.
    Hover,
    /// Pressed.
    Down,
}

/// A labelled button that raises an `"action"` when released.
#[derive(Clone, Debug)]
pub struct PushButton {
    /// Label text.
    pub text: String,
    state: ButtonState,
}

impl PushButton {
    /// Name of the action raised on release.
    pub const ACTION: &'static str = "action";

    /// A button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: ButtonState::Idle,
        }
    }

    /// Current visual state.
    pub fn state(&self) -> ButtonState {
        self.state
    }
}

impl Widget for PushButton {
    fn handle_mouse(&mut self, event: &MouseEvent, _: &Geometry, cx: &mut EventCx) -> bool {
        self.state = match event.kind {
            MouseKind::Down => ButtonState::Down,
            MouseKind::Up => {
                cx.emit(Self::ACTION);
                ButtonState::Hover
            }
            MouseKind::Enter => ButtonState::Hover,
            MouseKind::Exit => ButtonState::Idle,
            _ => return false,
        };
        true
    }

    fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry) {
        let bounds = geometry.bounds();
        let down = self.state == ButtonState::Down;
        if self.state != ButtonState::Idle {
            painter.stroke_rect(bounds, Color::HIGHLIGHT, 8.0);
        }
        painter.fill_rect(
            bounds,
            if down {
                Color::HIGHLIGHT
            } else {
                Color::LIGHT_GREY
            },
        );
        painter.stroke_rect(bounds, Color::BLACK, if down { 4.0 } else { 2.0 });
        painter.text(
            &self.text,
            bounds.center(),
            TextStyle::sized(WIDGET_FONT_SIZE),
        );
    }
}
