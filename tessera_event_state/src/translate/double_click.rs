// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-click recognition, layered over click.
//!
//! The first click of a pair is forwarded as soon as it happens; when a second
//! click follows within the window, it is replaced by a
//! [`MouseKind::DoubleClick`]. A third click starts a new pair.
//!
//! Clicks are never held back waiting for a possible second one, so the first
//! click of a pair is always delivered on its own. Only the second click is
//! absorbed into the double-click.

use super::{ClickTranslator, DOUBLE_CLICK_WINDOW_MS, EventTranslator};
use crate::Timestamp;
use crate::raw::RawEvent;
use crate::semantic::{MouseKind, SemanticEvent};

/// Emits clicks, turning the second of two quick clicks into a double-click.
#[derive(Clone, Debug)]
pub struct DoubleClickTranslator {
    click: ClickTranslator,
    last_click: Option<Timestamp>,
    /// Maximum gap between the two clicks, in milliseconds.
    pub window: u64,
}

impl Default for DoubleClickTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleClickTranslator {
    /// Create a translator using [`DOUBLE_CLICK_WINDOW_MS`].
    pub const fn new() -> Self {
        Self::with_window(DOUBLE_CLICK_WINDOW_MS)
    }

    /// Create a translator with a custom window.
    pub const fn with_window(window: u64) -> Self {
        Self {
            click: ClickTranslator::new(),
            last_click: None,
            window,
        }
    }
}

impl EventTranslator for DoubleClickTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        let SemanticEvent::Mouse(click) = self.click.update(raw)? else {
            return None;
        };
        match self.last_click.take() {
            Some(first) if click.time.saturating_sub(first) <= self.window => {
                Some(click.with_kind(MouseKind::DoubleClick).into())
            }
            _ => {
                self.last_click = Some(click.time);
                Some(click.into())
            }
        }
    }

    fn name(&self) -> &'static str {
        "dblclick"
    }

    fn reset(&mut self) {
        self.click.reset();
        self.last_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawKind;
    use alloc::vec::Vec;
    use kurbo::Point;

    fn click_at(t: &mut DoubleClickTranslator, down: Timestamp, up: Timestamp) -> Vec<MouseKind> {
        [
            RawEvent::new(down, RawKind::PointerDown { position: Point::ZERO }),
            RawEvent::new(up, RawKind::PointerUp { position: Point::ZERO }),
        ]
        .iter()
        .filter_map(|raw| t.update(raw))
        .filter_map(|e| e.as_mouse().map(|m| m.kind))
        .collect()
    }

    #[test]
    fn two_quick_clicks_make_one_double_click() {
        let mut t = DoubleClickTranslator::new();
        assert_eq!(click_at(&mut t, 0, 50), [MouseKind::Click]);
        assert_eq!(click_at(&mut t, 100, 150), [MouseKind::DoubleClick]);
    }

    #[test]
    fn slow_second_click_passes_through() {
        let mut t = DoubleClickTranslator::new();
        assert_eq!(click_at(&mut t, 0, 50), [MouseKind::Click]);
        assert_eq!(click_at(&mut t, 400, 451), [MouseKind::Click]);
        // The slow click opens a new window.
        assert_eq!(click_at(&mut t, 500, 550), [MouseKind::DoubleClick]);
    }

    #[test]
    fn third_click_starts_new_pair() {
        let mut t = DoubleClickTranslator::new();
        click_at(&mut t, 0, 10);
        click_at(&mut t, 20, 30);
        assert_eq!(click_at(&mut t, 40, 50), [MouseKind::Click]);
    }

    #[test]
    fn window_is_configurable() {
        let mut t = DoubleClickTranslator::with_window(10);
        click_at(&mut t, 0, 10);
        assert_eq!(click_at(&mut t, 15, 25), [MouseKind::Click]);
    }

    #[test]
    fn reset_forgets_first_click() {
        let mut t = DoubleClickTranslator::new();
        click_at(&mut t, 0, 10);
        t.reset();
        assert_eq!(click_at(&mut t, 20, 30), [MouseKind::Click]);
    }
}
