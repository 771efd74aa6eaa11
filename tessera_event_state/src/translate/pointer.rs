// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through of fundamental pointer events.

use super::EventTranslator;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{MouseEvent, MouseKind, SemanticEvent};

/// Forwards pointer down/up/move as [`MouseKind::Down`], [`MouseKind::Up`] and
/// [`MouseKind::Move`].
///
/// Mouse capture in the dispatch layer is driven by these events, so this
/// translator is part of the default set.
#[derive(Copy, Clone, Debug, Default)]
pub struct PointerTranslator;

impl PointerTranslator {
    /// Create a pointer translator.
    pub const fn new() -> Self {
        Self
    }
}

impl EventTranslator for PointerTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        let (kind, position) = match raw.kind {
            RawKind::PointerDown { position } => (MouseKind::Down, position),
            RawKind::PointerUp { position } => (MouseKind::Up, position),
            RawKind::PointerMove { position } => (MouseKind::Move, position),
            _ => return None,
        };
        Some(MouseEvent::new(kind, raw.time, position).into())
    }

    fn name(&self) -> &'static str {
        "pointer"
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};

    #[test]
    fn forwards_pointer_kinds_only() {
        let mut t = PointerTranslator::new();
        let p = Point::new(2.0, 3.0);
        let e = t
            .update(&RawEvent::new(4, RawKind::PointerMove { position: p }))
            .unwrap();
        assert_eq!(
            e,
            SemanticEvent::Mouse(MouseEvent::new(MouseKind::Move, 4, p))
        );
        assert!(t.update(&RawEvent::tick(5)).is_none());
        assert!(
            t.update(&RawEvent::new(
                6,
                RawKind::Resize {
                    size: Size::new(1.0, 1.0)
                }
            ))
            .is_none()
        );
    }
}
