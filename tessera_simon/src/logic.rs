// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Game rules, independent of drawing and timing.
//!
//! A round starts with [`SimonLogic::new_round`], which picks a fresh
//! sequence and enters [`Phase::Computer`]. The computer plays it back one
//! [`next_button`](SimonLogic::next_button) at a time; after the last one the
//! phase becomes [`Phase::Human`], and each
//! [`verify_button`](SimonLogic::verify_button) checks one guess. A wrong
//! guess loses. Finishing the sequence wins, adds a point and makes the next
//! sequence one longer. Losing, or starting fresh, resets length and score.

use core::fmt;

/// Where a game is in its round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the first round.
    #[default]
    Start,
    /// The computer is playing the sequence.
    Computer,
    /// The player is repeating the sequence.
    Human,
    /// The player repeated the whole sequence.
    Win,
    /// The player pressed a wrong button.
    Lose,
}

impl Phase {
    /// Whether a new round may be started from here.
    pub fn is_at_rest(self) -> bool {
        matches!(self, Self::Start | Self::Win | Self::Lose)
    }

    /// Upper-case name, as shown in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Computer => "COMPUTER",
            Self::Human => "HUMAN",
            Self::Win => "WIN",
            Self::Lose => "LOSE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies the buttons of new sequences.
pub trait SequenceSource: fmt::Debug {
    /// A button index in `0..buttons`. `buttons` is never zero.
    fn pick(&mut self, buttons: usize) -> usize;
}

/// Deterministic xorshift64 generator.
#[derive(Clone, Debug)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    /// A generator seeded with `seed`. Zero is replaced by one, since an
    /// all-zero state never advances.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl SequenceSource for XorShift {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the remainder is below `buttons`, which is a usize"
    )]
    fn pick(&mut self, buttons: usize) -> usize {
        (self.next_u64() % buttons as u64) as usize
    }
}

/// Replays a fixed list of buttons, cycling when it runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSequence {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedSequence {
    /// Replay `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            next: 0,
        }
    }
}

impl SequenceSource for ScriptedSequence {
    fn pick(&mut self, buttons: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % buttons
    }
}

/// Phase, score and sequence of one game.
#[derive(Debug)]
pub struct SimonLogic {
    phase: Phase,
    score: u32,
    length: usize,
    index: usize,
    sequence: Vec<usize>,
    buttons: usize,
    debug: bool,
    source: Box<dyn SequenceSource>,
}

impl SimonLogic {
    /// A game with `buttons` buttons, in [`Phase::Start`].
    pub fn new(buttons: usize, source: impl SequenceSource + 'static, debug: bool) -> Self {
        let mut logic = Self {
            phase: Phase::Start,
            score: 0,
            length: 1,
            index: 0,
            sequence: Vec::new(),
            buttons: 1,
            debug,
            source: Box::new(source),
        };
        logic.reset(buttons);
        logic
    }

    /// Start over with `buttons` buttons, keeping the sequence source.
    pub fn reset(&mut self, buttons: usize) {
        self.phase = Phase::Start;
        self.score = 0;
        self.length = 1;
        self.index = 0;
        self.sequence.clear();
        self.buttons = buttons.max(1);
        if self.debug {
            tracing::debug!(buttons = self.buttons, "starting game");
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds won since the last loss or fresh start.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Length of the current (or next) sequence.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Position in the sequence being played or guessed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of buttons.
    pub fn buttons(&self) -> usize {
        self.buttons
    }

    /// The part of the sequence not yet played or guessed.
    pub fn remaining_sequence(&self) -> &[usize] {
        self.sequence.get(self.index..).unwrap_or(&[])
    }

    /// Pick a new sequence and hand it to the computer.
    ///
    /// From [`Phase::Start`] or [`Phase::Lose`], length and score reset
    /// first.
    pub fn new_round(&mut self) {
        if self.debug {
            tracing::debug!(state = %self.phase, "new round");
        }
        if matches!(self.phase, Phase::Start | Phase::Lose) {
            self.length = 1;
            self.score = 0;
        }
        let buttons = self.buttons;
        let source = &mut self.source;
        self.sequence = (0..self.length).map(|_| source.pick(buttons)).collect();
        if self.debug {
            tracing::debug!(sequence = ?self.sequence, "new sequence");
        }
        self.index = 0;
        self.phase = Phase::Computer;
    }

    /// The next button the computer plays.
    ///
    /// After the last one, the phase becomes [`Phase::Human`]. Returns
    /// `None` when the sequence has been exhausted.
    pub fn next_button(&mut self) -> Option<usize> {
        if self.phase != Phase::Computer {
            tracing::warn!(state = %self.phase, "next_button called outside COMPUTER");
        }
        let Some(&button) = self.sequence.get(self.index) else {
            tracing::warn!(index = self.index, "no button left to play");
            return None;
        };
        if self.debug {
            tracing::debug!(index = self.index, button, "next button");
        }
        self.index += 1;
        if self.index >= self.length {
            self.index = 0;
            self.phase = Phase::Human;
        }
        Some(button)
    }

    /// Check the player's guess. Returns whether it was right.
    pub fn verify_button(&mut self, button: usize) -> bool {
        if self.phase != Phase::Human {
            tracing::warn!(state = %self.phase, "verify_button called outside HUMAN");
        }
        let expected = self.sequence.get(self.index).copied();
        if self.debug {
            tracing::debug!(index = self.index, pushed = button, ?expected, "verify");
        }
        self.index += 1;

        if expected != Some(button) {
            self.phase = Phase::Lose;
            if self.debug {
                tracing::debug!(state = %self.phase, "wrong button");
            }
            return false;
        }

        if self.index == self.length {
            self.phase = Phase::Win;
            self.score += 1;
            self.length += 1;
            if self.debug {
                tracing::debug!(score = self.score, length = self.length, "round won");
            }
        }
        true
    }
}
