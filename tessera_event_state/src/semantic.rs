// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic (interaction-level) events.
//!
//! Events are grouped by category so that dispatchers can match exhaustively:
//! mouse events go to the hit-test path, keyboard events to the focused
//! element, and resize/action events only to the application listener.

use alloc::borrow::Cow;
use kurbo::{Point, Size};

use crate::Timestamp;
use crate::key::Key;

/// Opaque identifier of the element an event originated from.
///
/// Element trees convert their own ids into this form, so the event layer does
/// not depend on any particular tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

/// Kinds of pointer interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Pointer moved.
    Move,
    /// Press and release.
    Click,
    /// Two clicks within the double-click window.
    DoubleClick,
    /// Pointer moved with the button held.
    Drag,
    /// Button held in place past the long-press threshold.
    LongPress,
    /// Pointer entered an element (synthesized by dispatch).
    Enter,
    /// Pointer left an element (synthesized by dispatch).
    Exit,
}

impl MouseKind {
    /// Short, stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Down => "mousedown",
            Self::Up => "mouseup",
            Self::Move => "mousemove",
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
            Self::Drag => "drag",
            Self::LongPress => "longpress",
            Self::Enter => "mouseenter",
            Self::Exit => "mouseexit",
        }
    }
}

/// A pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseKind,
    /// When it happened.
    pub time: Timestamp,
    /// Where it happened, in surface coordinates.
    pub position: Point,
}

impl MouseEvent {
    /// Create a mouse event.
    pub const fn new(kind: MouseKind, time: Timestamp, position: Point) -> Self {
        Self {
            kind,
            time,
            position,
        }
    }

    /// The same event with a different kind, used for synthesized enter/exit.
    pub const fn with_kind(self, kind: MouseKind) -> Self {
        Self { kind, ..self }
    }
}

/// Kinds of keyboard interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyboardKind {
    /// A key went down (repeats filtered).
    Press(Key),
    /// The receiver gained keyboard focus.
    FocusIn,
    /// The receiver lost keyboard focus.
    FocusOut,
}

impl KeyboardKind {
    /// Short, stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Press(_) => "keypress",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
        }
    }
}

/// A keyboard event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// What happened.
    pub kind: KeyboardKind,
    /// When it happened.
    pub time: Timestamp,
}

impl KeyboardEvent {
    /// Create a keyboard event.
    pub const fn new(kind: KeyboardKind, time: Timestamp) -> Self {
        Self { kind, time }
    }

    /// The pressed key, for [`KeyboardKind::Press`].
    pub fn key(&self) -> Option<Key> {
        match self.kind {
            KeyboardKind::Press(key) => Some(key),
            _ => None,
        }
    }
}

/// The drawing surface changed size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeEvent {
    /// When it happened.
    pub time: Timestamp,
    /// New surface size.
    pub size: Size,
}

/// An application-defined event, such as a button's `"action"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    /// When it was raised.
    pub time: Timestamp,
    /// Element that raised it, if any.
    pub source: Option<SourceId>,
    /// Application-defined name.
    pub name: Cow<'static, str>,
}

impl ActionEvent {
    /// Create an action with no source element.
    pub fn new(time: Timestamp, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            time,
            source: None,
            name: name.into(),
        }
    }

    /// Attach the originating element.
    pub fn with_source(mut self, source: SourceId) -> Self {
        self.source = Some(source);
        self
    }
}

/// A semantic event, grouped by category.
#[derive(Clone, Debug, PartialEq)]
pub enum SemanticEvent {
    /// Pointer interaction.
    Mouse(MouseEvent),
    /// Key press or focus change.
    Keyboard(KeyboardEvent),
    /// Surface resize.
    Resize(ResizeEvent),
    /// Application-defined action.
    Action(ActionEvent),
}

impl SemanticEvent {
    /// When the event happened.
    pub fn time(&self) -> Timestamp {
        match self {
            Self::Mouse(e) => e.time,
            Self::Keyboard(e) => e.time,
            Self::Resize(e) => e.time,
            Self::Action(e) => e.time,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &str {
        match self {
            Self::Mouse(e) => e.kind.name(),
            Self::Keyboard(e) => e.kind.name(),
            Self::Resize(_) => "resize",
            Self::Action(e) => &e.name,
        }
    }

    /// The mouse event, if this is one.
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(e) => Some(e),
            _ => None,
        }
    }

    /// The keyboard event, if this is one.
    pub fn as_keyboard(&self) -> Option<&KeyboardEvent> {
        match self {
            Self::Keyboard(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MouseEvent> for SemanticEvent {
    fn from(e: MouseEvent) -> Self {
        Self::Mouse(e)
    }
}

impl From<KeyboardEvent> for SemanticEvent {
    fn from(e: KeyboardEvent) -> Self {
        Self::Keyboard(e)
    }
}

impl From<ResizeEvent> for SemanticEvent {
    fn from(e: ResizeEvent) -> Self {
        Self::Resize(e)
    }
}

impl From<ActionEvent> for SemanticEvent {
    fn from(e: ActionEvent) -> Self {
        Self::Action(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_times() {
        let click: SemanticEvent = MouseEvent::new(MouseKind::Click, 7, Point::ZERO).into();
        assert_eq!(click.name(), "click");
        assert_eq!(click.time(), 7);

        let action: SemanticEvent = ActionEvent::new(9, "action")
            .with_source(SourceId(3))
            .into();
        assert_eq!(action.name(), "action");
        assert_eq!(action.time(), 9);
        assert!(action.as_mouse().is_none());
    }

    #[test]
    fn keyboard_key_accessor() {
        let press = KeyboardEvent::new(KeyboardKind::Press(Key::Character('q')), 1);
        assert_eq!(press.key(), Some(Key::Character('q')));
        assert_eq!(KeyboardEvent::new(KeyboardKind::FocusIn, 1).key(), None);
    }
}
