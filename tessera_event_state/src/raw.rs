// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw (fundamental) input events.
//!
//! A [`RawEvent`] is the lowest-level, time-stamped notification the host
//! delivers. It is immutable once created and consumed exactly once by the
//! translator stage.
//!
//! Hosts that receive string-typed platform events (for example DOM events)
//! can describe them with a [`HostEvent`] and convert with
//! [`RawEvent::try_from`]. Kinds the toolkit does not model are rejected with
//! [`UnsupportedEvent`].

use alloc::string::{String, ToString};
use kurbo::{Point, Size};

use crate::Timestamp;
use crate::key::Key;

/// Kind-specific payload of a raw event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawKind {
    /// A pointer button was pressed.
    PointerDown {
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp {
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// A key was pressed. Hosts may deliver OS key-repeat as further `KeyDown`s.
    KeyDown {
        /// The logical key.
        key: Key,
    },
    /// A key was released.
    KeyUp {
        /// The logical key.
        key: Key,
    },
    /// The drawing surface changed size.
    Resize {
        /// New surface size.
        size: Size,
    },
    /// Synthetic time-only event; produced when a frame has no input.
    Tick,
}

impl RawKind {
    /// Whether this kind is high-frequency and may be coalesced within a pass.
    pub fn is_volatile(&self) -> bool {
        matches!(self, Self::PointerMove { .. } | Self::Resize { .. })
    }

    /// The pointer position carried by this kind, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position }
            | Self::PointerUp { position }
            | Self::PointerMove { position } => Some(*position),
            _ => None,
        }
    }

    /// Short, stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointerdown",
            Self::PointerUp { .. } => "pointerup",
            Self::PointerMove { .. } => "pointermove",
            Self::KeyDown { .. } => "keydown",
            Self::KeyUp { .. } => "keyup",
            Self::Resize { .. } => "resize",
            Self::Tick => "tick",
        }
    }
}

/// A time-stamped raw input event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawEvent {
    /// Monotonic timestamp in milliseconds.
    pub time: Timestamp,
    /// Kind-specific payload.
    pub kind: RawKind,
}

impl RawEvent {
    /// Create a raw event.
    pub const fn new(time: Timestamp, kind: RawKind) -> Self {
        Self { time, kind }
    }

    /// Create a synthetic tick stamped with the current frame time.
    pub const fn tick(time: Timestamp) -> Self {
        Self {
            time,
            kind: RawKind::Tick,
        }
    }
}

/// A string-typed description of a platform input event.
///
/// This mirrors the shape of browser events so that a host can forward what it
/// receives without interpreting it first. Only the fields relevant to `kind`
/// need to be populated.
#[derive(Copy, Clone, Debug, Default)]
pub struct HostEvent<'a> {
    /// Platform event type, such as `"mousedown"` or `"keyup"`.
    pub kind: &'a str,
    /// Monotonic timestamp in milliseconds.
    pub time: Timestamp,
    /// Pointer position, for pointer events.
    pub position: Option<Point>,
    /// Key string, for keyboard events.
    pub key: Option<&'a str>,
    /// Surface size, for resize events.
    pub size: Option<Size>,
    /// Whether the platform flagged this key event as auto-repeat.
    pub repeat: bool,
}

/// Error returned when a host event cannot be represented as a [`RawEvent`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedEvent {
    /// The platform event type is not one the toolkit captures.
    #[error("event `{0}` not supported as a raw event")]
    UnknownKind(String),
    /// The event type is known but a required payload field is missing.
    #[error("`{kind}` event is missing its `{field}`")]
    MissingPayload {
        /// Event type.
        kind: &'static str,
        /// Missing field.
        field: &'static str,
    },
}

impl TryFrom<&HostEvent<'_>> for RawEvent {
    type Error = UnsupportedEvent;

    fn try_from(host: &HostEvent<'_>) -> Result<Self, Self::Error> {
        let position = |kind| {
            host.position.ok_or(UnsupportedEvent::MissingPayload {
                kind,
                field: "position",
            })
        };
        let key = |kind| {
            host.key.map(Key::parse).ok_or(UnsupportedEvent::MissingPayload {
                kind,
                field: "key",
            })
        };
        let kind = match host.kind {
            "mousedown" | "pointerdown" => RawKind::PointerDown {
                position: position("pointerdown")?,
            },
            "mouseup" | "pointerup" => RawKind::PointerUp {
                position: position("pointerup")?,
            },
            "mousemove" | "pointermove" => RawKind::PointerMove {
                position: position("pointermove")?,
            },
            "keydown" => RawKind::KeyDown {
                key: key("keydown")?,
            },
            "keyup" => RawKind::KeyUp { key: key("keyup")? },
            "resize" => RawKind::Resize {
                size: host.size.ok_or(UnsupportedEvent::MissingPayload {
                    kind: "resize",
                    field: "size",
                })?,
            },
            other => return Err(UnsupportedEvent::UnknownKind(other.to_string())),
        };
        Ok(Self::new(host.time, kind))
    }
}
