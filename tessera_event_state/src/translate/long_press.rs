// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press recognition.
//!
//! While a press is held, every raw event is checked in this order:
//!
//! 1. If more than `duration` ms have elapsed since the press, emit
//!    [`MouseKind::LongPress`] and go idle.
//! 2. Else if the event carries a position farther than `slop` from the press
//!    point, go idle.
//! 3. Else on pointer-up, go idle.
//!
//! Because the queue synthesizes ticks on quiet frames, a stationary press
//! still fires without further input. A long-press raised by a tick is
//! reported at the press position.

use kurbo::Point;

use super::{EventTranslator, LONG_PRESS_MS, LONG_PRESS_SLOP};
use crate::Timestamp;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{MouseEvent, MouseKind, SemanticEvent};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Down { anchor: Point, time: Timestamp },
}

/// Emits [`MouseKind::LongPress`] when a press is held in place.
#[derive(Clone, Debug)]
pub struct LongPressTranslator {
    phase: Phase,
    /// Hold time, in milliseconds, that must be exceeded.
    pub duration: u64,
    /// Maximum distance from the press point, in pixels.
    pub slop: f64,
}

impl Default for LongPressTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPressTranslator {
    /// Create a translator with [`LONG_PRESS_MS`] and [`LONG_PRESS_SLOP`].
    pub const fn new() -> Self {
        Self::with_thresholds(LONG_PRESS_MS, LONG_PRESS_SLOP)
    }

    /// Create a translator with custom thresholds.
    pub const fn with_thresholds(duration: u64, slop: f64) -> Self {
        Self {
            phase: Phase::Idle,
            duration,
            slop,
        }
    }
}

impl EventTranslator for LongPressTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        match self.phase {
            Phase::Idle => {
                if let RawKind::PointerDown { position } = raw.kind {
                    self.phase = Phase::Down {
                        anchor: position,
                        time: raw.time,
                    };
                }
                None
            }
            Phase::Down { anchor, time } => {
                if raw.time.saturating_sub(time) > self.duration {
                    self.phase = Phase::Idle;
                    let at = raw.kind.position().unwrap_or(anchor);
                    return Some(MouseEvent::new(MouseKind::LongPress, raw.time, at).into());
                }
                let wandered = raw
                    .kind
                    .position()
                    .is_some_and(|p| (p - anchor).hypot2() > self.slop * self.slop);
                if wandered || matches!(raw.kind, RawKind::PointerUp { .. }) {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "longpress"
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
