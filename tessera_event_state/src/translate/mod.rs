// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw-to-semantic event translators.
//!
//! Each translator is an independent state machine. Every drained raw event
//! (including synthesized ticks) is offered to every translator in a fixed
//! order, and each may emit at most one [`SemanticEvent`] in response.
//!
//! Translators never share state; combining them (for example, double-click
//! on top of click) is done by composition, see [`DoubleClickTranslator`].
//!
//! ## Thresholds
//!
//! | Constant | Value | Used by |
//! |---|---|---|
//! | [`DOUBLE_CLICK_WINDOW_MS`] | 300 ms | [`DoubleClickTranslator`] |
//! | [`LONG_PRESS_MS`] | 1000 ms | [`LongPressTranslator`] |
//! | [`LONG_PRESS_SLOP`] | 50 px | [`LongPressTranslator`] |

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::raw::RawEvent;
use crate::semantic::SemanticEvent;

mod click;
mod double_click;
mod drag;
mod key_press;
mod long_press;
mod pointer;
mod resize;

pub use click::ClickTranslator;
pub use double_click::DoubleClickTranslator;
pub use drag::DragTranslator;
pub use key_press::KeyPressTranslator;
pub use long_press::LongPressTranslator;
pub use pointer::PointerTranslator;
pub use resize::ResizeTranslator;

/// Maximum gap between two clicks, in milliseconds, for them to form a double-click.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

/// Time a press must be held, in milliseconds, before it becomes a long-press.
pub const LONG_PRESS_MS: u64 = 1000;

/// Distance the pointer may wander from the press point before a long-press is abandoned.
pub const LONG_PRESS_SLOP: f64 = 50.0;

/// A state machine converting raw events into semantic events.
pub trait EventTranslator: Debug {
    /// Observe one raw event; optionally emit one semantic event.
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent>;

    /// Short, stable name used in logs.
    fn name(&self) -> &'static str;

    /// Return to the initial state, forgetting any in-progress gesture.
    fn reset(&mut self);
}

/// The standard translator set, in the order the runtime installs it.
///
/// Pointer, resize, key-press, double-click (wrapping click), drag.
pub fn default_translators() -> Vec<Box<dyn EventTranslator>> {
    alloc::vec![
        Box::new(PointerTranslator::new()),
        Box::new(ResizeTranslator::new()),
        Box::new(KeyPressTranslator::new()),
        Box::new(DoubleClickTranslator::new()),
        Box::new(DragTranslator::new()),
    ]
}

/// Run every translator over one raw event, collecting emissions in translator order.
pub fn translate_all(
    translators: &mut [Box<dyn EventTranslator>],
    raw: &RawEvent,
    out: &mut Vec<SemanticEvent>,
) {
    for translator in translators.iter_mut() {
        if let Some(event) = translator.update(raw) {
            tracing::trace!(
                translator = translator.name(),
                raw = raw.kind.name(),
                emitted = event.name(),
                "translated"
            );
            out.push(event);
        }
    }
}
