// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options for starting a game.

/// Fewest buttons a game can have.
pub const MIN_BUTTONS: usize = 1;

/// Most buttons a game can have.
pub const MAX_BUTTONS: usize = 10;

/// Options for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimonConfig {
    /// Number of buttons at start and after a restart.
    pub buttons: usize,
    /// Seed for the sequence generator.
    pub seed: u64,
    /// Log each game step at `debug` level.
    pub debug: bool,
}

impl Default for SimonConfig {
    fn default() -> Self {
        Self {
            buttons: 4,
            seed: 0x5EED_CAFE,
            debug: true,
        }
    }
}

impl SimonConfig {
    /// Start with `buttons` buttons, clamped to the allowed range.
    pub fn with_buttons(mut self, buttons: usize) -> Self {
        self.buttons = buttons.clamp(MIN_BUTTONS, MAX_BUTTONS);
        self
    }

    /// Seed the sequence generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Turn per-step logging on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
