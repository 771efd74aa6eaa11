// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Point;
use tessera_event_state::key::{Key, NamedKey};
use tessera_event_state::semantic::{KeyboardEvent, KeyboardKind, MouseEvent, MouseKind};

use super::{TEXT_PADDING, WIDGET_FONT_SIZE};
use crate::paint::{Color, Painter, TextAlign, TextStyle};
use crate::types::Geometry;
use crate::widget::{EventCx, Widget};

/// Single-line editable text. Clicking requests keyboard focus.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    /// Current contents.
    pub text: String,
    hovered: bool,
    focused: bool,
}

impl TextField {
    /// A field with initial contents.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether the field holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is over the field.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Apply one key to `text`: Backspace deletes the last character,
    /// printable keys append, anything else is ignored.
    pub fn apply_edit(text: &mut String, key: Key) {
        match key {
            Key::Named(NamedKey::Backspace) => {
                text.pop();
            }
            Key::Character(c) => text.push(c),
            Key::Named(_) => {}
        }
    }
}

impl Widget for TextField {
    fn handle_mouse(&mut self, event: &MouseEvent, _: &Geometry, cx: &mut EventCx) -> bool {
        match event.kind {
            MouseKind::Enter => self.hovered = true,
            MouseKind::Exit => self.hovered = false,
            MouseKind::Click => cx.request_focus(),
            _ => return false,
        }
        true
    }

    fn handle_keyboard(&mut self, event: &KeyboardEvent, _: &mut EventCx) -> bool {
        match event.kind {
            KeyboardKind::FocusIn => self.focused = true,
            KeyboardKind::FocusOut => self.focused = false,
            KeyboardKind::Press(key) => {
                if self.focused {
                    Self::apply_edit(&mut self.text, key);
                }
            }
        }
        true
    }

    fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry) {
        let bounds = geometry.bounds();
        if self.hovered {
            painter.stroke_rect(bounds, Color::HIGHLIGHT, 8.0);
        }
        painter.fill_rect(bounds, Color::WHITE);
        painter.stroke_rect(
            bounds,
            if self.focused {
                Color::FOCUS
            } else {
                Color::BLACK
            },
            1.0,
        );
        painter.text(
            &self.text,
            Point::new(bounds.x0 + TEXT_PADDING, bounds.center().y),
            TextStyle::sized(WIDGET_FONT_SIZE).aligned(TextAlign::Left),
        );
    }
}
