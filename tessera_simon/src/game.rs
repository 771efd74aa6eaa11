// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The game as the player sees it: a row of buttons, a drawing state that
//! trails the rules, and the animations that connect the two.
//!
//! The drawing state only catches up with [`SimonLogic::phase`] when the
//! animation that reveals the change has finished: the last playback pulse
//! for [`Phase::Human`], the player's click pulse for [`Phase::Win`] and
//! [`Phase::Lose`].
//!
//! Every button animation is bound to the row it was created for. Rebuilding
//! the row (on resize, new round, restart or a button-count change) starts a
//! new row generation, and animations for older rows stop touching anything.

use kurbo::{Point, Size};
use tessera_animate::{Animator, FOREVER, Frame, Timing};

use crate::button::{BUTTON_RADIUS, SimonButton};
use crate::config::{MAX_BUTTONS, MIN_BUTTONS, SimonConfig};
use crate::logic::{Phase, SimonLogic, XorShift};

/// Delay before each button the computer plays.
pub const PLAYBACK_DELAY: u64 = 500;

/// Game state driven by input and animation.
#[derive(Debug)]
pub struct Game {
    logic: SimonLogic,
    config: SimonConfig,
    drawing: Phase,
    window: Size,
    buttons: Vec<SimonButton>,
    generation: u64,
    cheat: bool,
    clicking: bool,
}

impl Game {
    /// A game in [`Phase::Start`], with its idle animations registered on
    /// `animator`.
    pub fn new(config: SimonConfig, animator: &mut Animator<Self>) -> Self {
        let logic = SimonLogic::new(config.buttons, XorShift::new(config.seed), config.debug);
        Self::with_logic(logic, config, animator)
    }

    /// Like [`Game::new`], with the rules (and their sequence source)
    /// supplied by the caller.
    pub fn with_logic(logic: SimonLogic, config: SimonConfig, animator: &mut Animator<Self>) -> Self {
        let mut game = Self {
            logic,
            config,
            drawing: Phase::Start,
            window: Size::ZERO,
            buttons: Vec::new(),
            generation: 0,
            cheat: false,
            clicking: false,
        };
        game.make_row();
        game.show_phase(animator);
        game
    }

    /// The rules.
    pub fn logic(&self) -> &SimonLogic {
        &self.logic
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.logic.score()
    }

    /// The phase currently shown to the player.
    pub fn drawing_state(&self) -> Phase {
        self.drawing
    }

    /// Window size the row was laid out for.
    pub fn window(&self) -> Size {
        self.window
    }

    /// The buttons, left to right.
    pub fn buttons(&self) -> &[SimonButton] {
        &self.buttons
    }

    /// Whether the remaining sequence is shown.
    pub fn cheat_mode(&self) -> bool {
        self.cheat
    }

    /// Whether a player click is still animating.
    pub fn is_clicking(&self) -> bool {
        self.clicking
    }

    /// The unplayed part of the sequence as shown to the player, such as
    /// `"3, 1"`.
    pub fn remaining_sequence(&self) -> String {
        self.logic
            .remaining_sequence()
            .iter()
            .map(|b| (b + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Lay the row out again for a new window size. Same size is a no-op.
    ///
    /// The drawing state is kept: a playback or click pulse in flight still
    /// hands over when it completes.
    pub fn update_window(&mut self, size: Size, animator: &mut Animator<Self>) {
        if size == self.window {
            return;
        }
        self.window = size;
        if self.drawing.is_at_rest() {
            animator.clear_all(self);
        }
        self.make_row();
        self.start_rest_animations(animator);
    }

    /// Start a fresh game with `delta` more (or fewer) buttons, between
    /// [`MIN_BUTTONS`] and [`MAX_BUTTONS`].
    pub fn increment(&mut self, delta: isize, animator: &mut Animator<Self>) {
        let buttons = self
            .logic
            .buttons()
            .saturating_add_signed(delta)
            .clamp(MIN_BUTTONS, MAX_BUTTONS);
        animator.clear_all(self);
        self.clicking = false;
        self.logic.reset(buttons);
        self.make_row();
        self.show_phase(animator);
    }

    /// Force every animation to its end and start a fresh game with the
    /// configured number of buttons.
    pub fn restart(&mut self, animator: &mut Animator<Self>) {
        let finished = animator.clear_all(self);
        tracing::debug!(finished, "restart");
        self.clicking = false;
        self.logic.reset(self.config.buttons);
        self.make_row();
        self.show_phase(animator);
    }

    /// Begin a round and start the computer's playback.
    pub fn new_round(&mut self, animator: &mut Animator<Self>) {
        animator.clear_all(self);
        self.logic.new_round();
        self.make_row();
        self.show_phase(animator);
        self.computer_move(animator);
    }

    /// The player pressed button `index`.
    ///
    /// Ignored while the previous click is still animating.
    pub fn click(&mut self, index: usize, animator: &mut Animator<Self>) {
        if self.clicking {
            tracing::trace!(index, "click ignored while animating");
            return;
        }
        if index >= self.buttons.len() {
            tracing::warn!(index, buttons = self.buttons.len(), "click on missing button");
            return;
        }
        self.clicking = true;
        self.logic.verify_button(index);
        animator.add(pulse(self.generation, index), |game, animator| {
            game.click_finished(animator);
        });
    }

    /// Pulse the next button the player should press.
    pub fn show_hint(&mut self, animator: &mut Animator<Self>) {
        let Some(&next) = self.logic.remaining_sequence().first() else {
            tracing::warn!(state = %self.logic.phase(), "no hint to show");
            return;
        };
        animator.play(Timing::default(), pulse(self.generation, next));
    }

    /// Show or hide the remaining sequence.
    pub fn toggle_cheat(&mut self) {
        self.cheat = !self.cheat;
        tracing::debug!(cheat = self.cheat, "cheat mode");
    }

    /// Mark the buttons under `point` as hovered and clear the rest.
    pub fn update_hover(&mut self, point: Point) {
        for button in &mut self.buttons {
            button.hover = button.hit_test(point);
        }
    }

    /// Click every hovered button.
    pub fn click_hovered(&mut self, animator: &mut Animator<Self>) {
        let hovered: Vec<usize> = self
            .buttons
            .iter()
            .filter(|b| b.hover)
            .map(SimonButton::id)
            .collect();
        for index in hovered {
            self.click(index, animator);
        }
    }

    fn make_row(&mut self) {
        let n = self.logic.buttons();
        let count = n as f64;
        let hue_step = 360.0 / count;
        let r = BUTTON_RADIUS;
        let spacing = (self.window.width - count * r * 2.0) / (count + 1.0);
        let y = self.window.height * 0.5;

        self.generation += 1;
        self.buttons = (0..n)
            .map(|i| {
                let i_f = i as f64;
                let x = spacing + r + (spacing + r * 2.0) * i_f;
                SimonButton::new(Point::new(x, y), i_f * hue_step, r, i)
            })
            .collect();
    }

    /// Catch the drawing state up with the rules.
    fn show_phase(&mut self, animator: &mut Animator<Self>) {
        self.drawing = self.logic.phase();
        tracing::debug!(state = %self.drawing, "drawing state");
        self.start_rest_animations(animator);
    }

    /// Idle loops or falls for the current row, per the drawing state.
    fn start_rest_animations(&mut self, animator: &mut Animator<Self>) {
        match self.drawing {
            Phase::Start | Phase::Win => {
                for index in 0..self.buttons.len() {
                    animator.add_loop(bob(self.generation, index), 0);
                }
            }
            Phase::Lose => {
                for index in 0..self.buttons.len() {
                    animator.play(
                        Timing {
                            delay: 0,
                            duration: FOREVER,
                        },
                        fall(self.generation, index),
                    );
                }
            }
            Phase::Computer | Phase::Human => {}
        }
    }

    fn computer_move(&mut self, animator: &mut Animator<Self>) {
        let Some(next) = self.logic.next_button() else {
            return;
        };
        animator.add_with(
            Timing::delayed(PLAYBACK_DELAY),
            pulse(self.generation, next),
            |game, animator| game.computer_finished(animator),
        );
    }

    fn computer_finished(&mut self, animator: &mut Animator<Self>) {
        match self.logic.phase() {
            Phase::Human => self.show_phase(animator),
            Phase::Computer => self.computer_move(animator),
            phase => tracing::trace!(state = %phase, "playback finished after phase change"),
        }
    }

    fn click_finished(&mut self, animator: &mut Animator<Self>) {
        self.clicking = false;
        if matches!(self.logic.phase(), Phase::Win | Phase::Lose) {
            self.show_phase(animator);
        }
    }

    fn button_mut(&mut self, generation: u64, index: usize) -> Option<&mut SimonButton> {
        if generation != self.generation {
            return None;
        }
        self.buttons.get_mut(index)
    }
}

fn pulse(generation: u64, index: usize) -> impl Fn(&mut Game, Frame) + 'static {
    move |game: &mut Game, frame: Frame| {
        if let Some(button) = game.button_mut(generation, index) {
            button.pulse(frame);
        }
    }
}

fn bob(generation: u64, index: usize) -> impl Fn(&mut Game, Frame) + 'static {
    move |game: &mut Game, frame: Frame| {
        let height = game.window.height;
        if let Some(button) = game.button_mut(generation, index) {
            button.bob(frame, height);
        }
    }
}

fn fall(generation: u64, index: usize) -> impl Fn(&mut Game, Frame) + 'static {
    move |game: &mut Game, frame: Frame| {
        if let Some(button) = game.button_mut(generation, index) {
            button.fall(frame);
        }
    }
}
