// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag recognition.

use super::EventTranslator;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{MouseEvent, MouseKind, SemanticEvent};

/// Emits [`MouseKind::Drag`] for every pointer-move while the button is held.
#[derive(Clone, Debug, Default)]
pub struct DragTranslator {
    held: bool,
}

impl DragTranslator {
    /// Create a translator with the button released.
    pub const fn new() -> Self {
        Self { held: false }
    }
}

impl EventTranslator for DragTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        match raw.kind {
            RawKind::PointerDown { .. } => self.held = true,
            RawKind::PointerUp { .. } => self.held = false,
            RawKind::PointerMove { position } if self.held => {
                return Some(MouseEvent::new(MouseKind::Drag, raw.time, position).into());
            }
            _ => {}
        }
        None
    }

    fn name(&self) -> &'static str {
        "drag"
    }

    fn reset(&mut self) {
        self.held = false;
    }
}
