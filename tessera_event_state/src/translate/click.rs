// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition.
//!
//! A click is a pointer-down followed by a pointer-up. Movement in between is
//! allowed; it is reported separately by [`DragTranslator`](super::DragTranslator).
//!
//! ```
//! use kurbo::Point;
//! use tessera_event_state::raw::{RawEvent, RawKind};
//! use tessera_event_state::translate::{ClickTranslator, EventTranslator};
//!
//! let mut click = ClickTranslator::new();
//! let at = Point::new(3.0, 4.0);
//! assert!(click.update(&RawEvent::new(0, RawKind::PointerDown { position: at })).is_none());
//! let emitted = click.update(&RawEvent::new(80, RawKind::PointerUp { position: at }));
//! assert_eq!(emitted.and_then(|e| e.as_mouse().map(|m| m.time)), Some(80));
//! ```

use kurbo::Point;

use super::EventTranslator;
use crate::Timestamp;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{MouseEvent, MouseKind, SemanticEvent};

/// Click recognizer phase.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Down {
        /// Where the press started.
        anchor: Point,
        /// When the press started.
        time: Timestamp,
    },
}

/// Emits [`MouseKind::Click`] on pointer-up after a pointer-down.
#[derive(Clone, Debug)]
pub struct ClickTranslator {
    phase: Phase,
}

impl Default for ClickTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickTranslator {
    /// Create an idle click translator.
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether a press is in progress.
    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Down { .. })
    }

    /// Anchor position and time of the current press, if any.
    pub fn press(&self) -> Option<(Point, Timestamp)> {
        match self.phase {
            Phase::Down { anchor, time } => Some((anchor, time)),
            Phase::Idle => None,
        }
    }
}

impl EventTranslator for ClickTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        match (self.phase, raw.kind) {
            // A second press re-anchors.
            (_, RawKind::PointerDown { position }) => {
                self.phase = Phase::Down {
                    anchor: position,
                    time: raw.time,
                };
                None
            }
            (Phase::Down { .. }, RawKind::PointerUp { position }) => {
                self.phase = Phase::Idle;
                Some(MouseEvent::new(MouseKind::Click, raw.time, position).into())
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "click"
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
