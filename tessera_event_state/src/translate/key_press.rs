// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-press recognition with repeat suppression.

use hashbrown::HashSet;

use super::EventTranslator;
use crate::key::Key;
use crate::raw::{RawEvent, RawKind};
use crate::semantic::{KeyboardEvent, KeyboardKind, SemanticEvent};

/// Forwards key-down as [`KeyboardKind::Press`], once per physical press.
///
/// A key-down for a key that is already held is an OS auto-repeat and is
/// dropped until the matching key-up arrives.
#[derive(Clone, Debug, Default)]
pub struct KeyPressTranslator {
    held: HashSet<Key>,
}

impl KeyPressTranslator {
    /// Create a translator with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently held.
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl EventTranslator for KeyPressTranslator {
    fn update(&mut self, raw: &RawEvent) -> Option<SemanticEvent> {
        match raw.kind {
            RawKind::KeyDown { key } => self
                .held
                .insert(key)
                .then(|| KeyboardEvent::new(KeyboardKind::Press(key), raw.time).into()),
            RawKind::KeyUp { key } => {
                self.held.remove(&key);
                None
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "keypress"
    }

    fn reset(&mut self) {
        self.held.clear();
    }
}
