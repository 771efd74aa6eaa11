// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Maps semantic events onto game operations.
//!
//! | Event | Drawing state | Effect |
//! |---|---|---|
//! | key `' '` | START, WIN, LOSE | [`Game::new_round`] |
//! | key `q` | any | [`Game::restart`] |
//! | key `+` / `-` | START, WIN, LOSE | [`Game::increment`] |
//! | key `?` | any | [`Game::toggle_cheat`] |
//! | long-press | HUMAN | [`Game::show_hint`] |
//! | mouse move | HUMAN | [`Game::update_hover`] |
//! | click | HUMAN | [`Game::click_hovered`] |
//! | resize | any | [`Game::update_window`] |
//!
//! Everything else is ignored.

use tessera_animate::Animator;
use tessera_event_state::key::Key;
use tessera_event_state::semantic::{KeyboardKind, MouseKind, SemanticEvent};

use crate::game::Game;
use crate::logic::Phase;

/// Apply one event to the game.
pub fn handle_event(game: &mut Game, animator: &mut Animator<Game>, event: &SemanticEvent) {
    let drawing = game.drawing_state();
    match event {
        SemanticEvent::Mouse(mouse) if drawing == Phase::Human => match mouse.kind {
            MouseKind::LongPress => game.show_hint(animator),
            MouseKind::Move => game.update_hover(mouse.position),
            MouseKind::Click => game.click_hovered(animator),
            _ => {}
        },
        SemanticEvent::Keyboard(keyboard) => {
            if let KeyboardKind::Press(Key::Character(c)) = keyboard.kind {
                handle_key(game, animator, c, drawing);
            }
        }
        SemanticEvent::Resize(resize) => game.update_window(resize.size, animator),
        _ => {}
    }
}

fn handle_key(game: &mut Game, animator: &mut Animator<Game>, key: char, drawing: Phase) {
    match key {
        ' ' if drawing.is_at_rest() => game.new_round(animator),
        'q' => game.restart(animator),
        '-' if drawing.is_at_rest() => game.increment(-1, animator),
        '+' if drawing.is_at_rest() => game.increment(1, animator),
        '?' => game.toggle_cheat(),
        _ => tracing::trace!(%key, state = %drawing, "key ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimonConfig;
    use crate::logic::{ScriptedSequence, SimonLogic};
    use kurbo::{Point, Size};
    use tessera_event_state::semantic::{KeyboardEvent, MouseEvent, ResizeEvent};

    fn setup() -> (Game, Animator<Game>) {
        let mut animator = Animator::new();
        let logic = SimonLogic::new(4, ScriptedSequence::new([1]), false);
        let game = Game::with_logic(logic, SimonConfig::default(), &mut animator);
        (game, animator)
    }

    fn key(c: char) -> SemanticEvent {
        KeyboardEvent::new(KeyboardKind::Press(Key::from(c)), 0).into()
    }

    fn mouse(kind: MouseKind, x: f64, y: f64) -> SemanticEvent {
        MouseEvent::new(kind, 0, Point::new(x, y)).into()
    }

    #[test]
    fn resize_lays_out_row() {
        let (mut game, mut anim) = setup();
        let resize = ResizeEvent {
            time: 0,
            size: Size::new(800.0, 600.0),
        };
        handle_event(&mut game, &mut anim, &resize.into());
        assert_eq!(game.window(), Size::new(800.0, 600.0));
        assert_eq!(game.buttons()[0].center(), Point::new(124.0, 300.0));
    }

    #[test]
    fn count_keys_only_at_rest() {
        let (mut game, mut anim) = setup();
        handle_event(&mut game, &mut anim, &key('+'));
        assert_eq!(game.buttons().len(), 5);
        handle_event(&mut game, &mut anim, &key('-'));
        handle_event(&mut game, &mut anim, &key('-'));
        assert_eq!(game.buttons().len(), 3);

        handle_event(&mut game, &mut anim, &key(' '));
        assert_eq!(game.drawing_state(), Phase::Computer);
        handle_event(&mut game, &mut anim, &key('+'));
        handle_event(&mut game, &mut anim, &key(' '));
        assert_eq!(game.buttons().len(), 3);
        assert_eq!(game.drawing_state(), Phase::Computer);
    }

    #[test]
    fn cheat_and_restart_work_in_any_state() {
        let (mut game, mut anim) = setup();
        handle_event(&mut game, &mut anim, &key(' '));
        handle_event(&mut game, &mut anim, &key('?'));
        assert!(game.cheat_mode());
        handle_event(&mut game, &mut anim, &key('q'));
        assert_eq!(game.drawing_state(), Phase::Start);
        assert!(game.cheat_mode());
    }

    #[test]
    fn pointer_input_is_ignored_outside_human() {
        let (mut game, mut anim) = setup();
        handle_event(
            &mut game,
            &mut anim,
            &ResizeEvent {
                time: 0,
                size: Size::new(800.0, 600.0),
            }
            .into(),
        );
        handle_event(&mut game, &mut anim, &mouse(MouseKind::Move, 124.0, 300.0));
        assert!(game.buttons().iter().all(|b| !b.hover));

        handle_event(&mut game, &mut anim, &key(' '));
        anim.advance(&mut game, 1_000);
        assert_eq!(game.drawing_state(), Phase::Human);

        handle_event(&mut game, &mut anim, &mouse(MouseKind::Move, 308.0, 300.0));
        assert!(game.buttons()[1].hover);
        handle_event(&mut game, &mut anim, &mouse(MouseKind::Click, 308.0, 300.0));
        assert!(game.is_clicking());
        assert_eq!(game.logic().phase(), Phase::Win);
    }
}
