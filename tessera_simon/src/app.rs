// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The game bundled with its animations and wired into a runtime.

use tessera_animate::{Animator, Millis};
use tessera_element_tree::Painter;
use tessera_event_state::semantic::SemanticEvent;
use tessera_event_state::translate::LongPressTranslator;
use tessera_runtime::Runtime;

use crate::config::SimonConfig;
use crate::game::Game;
use crate::input::handle_event;
use crate::logic::SimonLogic;
use crate::render;

/// Application state handed to [`Runtime::frame`]: the game and the
/// animations running over it.
#[derive(Debug)]
pub struct SimonApp {
    /// The game.
    pub game: Game,
    /// Animations over [`SimonApp::game`].
    pub animator: Animator<Game>,
}

impl SimonApp {
    /// A fresh game built from `config`.
    pub fn new(config: SimonConfig) -> Self {
        let mut animator = Animator::new();
        let game = Game::new(config, &mut animator);
        Self { game, animator }
    }

    /// A fresh game using caller-supplied rules.
    pub fn with_logic(logic: SimonLogic, config: SimonConfig) -> Self {
        let mut animator = Animator::new();
        let game = Game::with_logic(logic, config, &mut animator);
        Self { game, animator }
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: &SemanticEvent) {
        handle_event(&mut self.game, &mut self.animator, event);
    }

    /// Advance the animations to `now`.
    pub fn animate(&mut self, now: Millis) {
        self.animator.advance(&mut self.game, now);
    }

    /// Draw the scene at the game's window size.
    pub fn draw(&self, painter: &mut dyn Painter) {
        render::draw(&self.game, painter, self.game.window());
    }

    /// Register the game's callbacks and its long-press translator.
    pub fn install(runtime: &mut Runtime<Self>) {
        runtime.add_event_translator(LongPressTranslator::new());
        runtime.set_event_listener(|app: &mut Self, event| app.handle_event(event));
        runtime.set_animation_callback(|app: &mut Self, now| app.animate(now));
        runtime.set_draw_callback(|app: &Self, painter, _| app.draw(painter));
    }

    /// A runtime with the standard translators and the game installed.
    pub fn runtime() -> Runtime<Self> {
        let mut runtime = Runtime::new();
        Self::install(&mut runtime);
        runtime
    }
}
