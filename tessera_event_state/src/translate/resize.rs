// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through of surface resizes.

use super::EventTranslator;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{ResizeEvent, SemanticEvent};

/// Forwards raw resize as [`SemanticEvent::Resize`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ResizeTranslator;

impl ResizeTranslator {
    /// Create a resize translator.
    pub const fn new() -> Self {
        Self
    }
}

impl EventTranslator for ResizeTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        match raw.kind {
            RawKind::Resize { size } => Some(
                ResizeEvent {
                    time: raw.time,
                    size,
                }
                .into(),
            ),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "resize"
    }

    fn reset(&mut self) {}
}
