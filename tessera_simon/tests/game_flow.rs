// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole games played through the runtime with raw input.

use kurbo::{Point, Size};
use tessera_element_tree::paint::DisplayList;
use tessera_event_state::key::Key;
use tessera_event_state::raw::{RawEvent, RawKind};
use tessera_runtime::Runtime;
use tessera_simon::{Phase, ScriptedSequence, SimonApp, SimonConfig, SimonLogic};
use tracing_test::traced_test;

const FRAME_MS: u64 = 16;

/// Picks for rounds of length 1, 2, 3 and 4.
const SCRIPT: [usize; 10] = [0, 1, 2, 3, 0, 1, 2, 0, 3, 1];

struct Harness {
    runtime: Runtime<SimonApp>,
    app: SimonApp,
    painter: DisplayList,
    now: u64,
}

impl Harness {
    fn new(picks: &[usize]) -> Self {
        let logic = SimonLogic::new(4, ScriptedSequence::new(picks.iter().copied()), false);
        let mut harness = Self {
            runtime: SimonApp::runtime(),
            app: SimonApp::with_logic(logic, SimonConfig::default()),
            painter: DisplayList::new(),
            now: 0,
        };
        harness.runtime.push_resize(0, Size::new(800.0, 600.0));
        harness.step();
        harness
    }

    fn step(&mut self) {
        self.now += FRAME_MS;
        self.painter.clear_ops();
        self.runtime.frame(&mut self.app, self.now, &mut self.painter);
    }

    fn wait(&mut self, ms: u64) {
        let until = self.now + ms;
        while self.now < until {
            self.step();
        }
    }

    fn wait_for(&mut self, phase: Phase) {
        for _ in 0..1_000 {
            if self.app.game.drawing_state() == phase {
                return;
            }
            self.step();
        }
        panic!("never reached {phase}, stuck in {}", self.app.game.drawing_state());
    }

    fn key(&mut self, c: char) {
        let key = Key::from(c);
        self.runtime.push_raw(RawEvent::new(self.now + 1, RawKind::KeyDown { key }));
        self.runtime.push_raw(RawEvent::new(self.now + 2, RawKind::KeyUp { key }));
        self.step();
    }

    fn center_of(&self, index: usize) -> Point {
        self.app.game.buttons()[index].center()
    }

    /// Move onto the button, press and release, then let the pulse finish.
    fn click(&mut self, index: usize) {
        let position = self.center_of(index);
        let t = self.now;
        self.runtime.push_raw(RawEvent::new(t + 1, RawKind::PointerMove { position }));
        self.runtime.push_raw(RawEvent::new(t + 2, RawKind::PointerDown { position }));
        self.runtime.push_raw(RawEvent::new(t + 3, RawKind::PointerUp { position }));
        self.step();
        self.wait(600);
    }

    fn play_round(&mut self) {
        self.key(' ');
        self.wait_for(Phase::Human);
        let sequence = self.app.game.logic().remaining_sequence().to_vec();
        for button in sequence {
            self.click(button);
        }
    }

    fn status(&self) -> Option<&str> {
        const PREFIXES: [&str; 4] = ["You", "Now", "Watch", "Press"];
        self.painter
            .texts()
            .find(|t| PREFIXES.iter().any(|p| t.starts_with(p)))
    }
}

fn reach_round_four() -> Harness {
    let mut h = Harness::new(&SCRIPT);
    for length in 1..=3 {
        assert_eq!(h.app.game.logic().length(), length);
        h.play_round();
        assert_eq!(h.app.game.drawing_state(), Phase::Win);
    }
    assert_eq!(h.app.game.score(), 3);
    h.key(' ');
    assert_eq!(h.app.game.drawing_state(), Phase::Computer);
    h.wait_for(Phase::Human);
    assert_eq!(h.app.game.logic().remaining_sequence(), [2, 0, 3, 1]);
    h
}

#[test]
fn winning_round_four() {
    let mut h = reach_round_four();
    assert_eq!(h.status(), Some("Now it’s your turn"));

    for button in [2, 0, 3] {
        h.click(button);
        assert_eq!(h.app.game.drawing_state(), Phase::Human);
    }
    h.click(1);

    assert_eq!(h.app.game.drawing_state(), Phase::Win);
    assert_eq!(h.app.game.score(), 4);
    assert_eq!(h.app.game.logic().length(), 5);
    assert_eq!(h.status(), Some("You won! Press SPACE to continue"));
    assert!(h.painter.texts().any(|t| t == "score 4"));
}

#[test]
fn wrong_third_click_loses_and_resets_length() {
    let mut h = reach_round_four();
    h.click(2);
    h.click(0);
    h.click(1);

    assert_eq!(h.app.game.drawing_state(), Phase::Lose);
    assert_eq!(h.status(), Some("You lose. Press SPACE to play again"));

    // Buttons fall while lost.
    let before = h.center_of(0).y;
    h.wait(100);
    assert!(h.center_of(0).y > before);

    h.key(' ');
    assert_eq!(h.app.game.logic().length(), 1);
    assert_eq!(h.app.game.score(), 0);
    assert_eq!(h.app.game.drawing_state(), Phase::Computer);
}

#[test]
fn drawing_state_waits_for_the_last_playback_pulse() {
    let mut h = Harness::new(&[3]);
    h.key(' ');
    assert_eq!(h.app.game.logic().phase(), Phase::Human);
    assert_eq!(h.status(), Some("Watch what I do ..."));

    // Delay then pulse: 500 ms each.
    h.wait(700);
    assert!(h.app.game.buttons()[3].is_animating());
    assert_eq!(h.app.game.drawing_state(), Phase::Computer);
    h.wait_for(Phase::Human);
    assert!(!h.app.game.buttons()[3].is_animating());
}

#[test]
fn long_press_shows_a_hint() {
    let mut h = Harness::new(&[1]);
    h.key(' ');
    h.wait_for(Phase::Human);

    let position = h.center_of(3);
    h.runtime.push_raw(RawEvent::new(h.now + 1, RawKind::PointerDown { position }));
    h.wait(1_100);
    assert!(h.app.game.buttons()[1].is_animating());
    assert!(!h.app.game.buttons()[3].is_animating());
    assert_eq!(h.app.game.drawing_state(), Phase::Human);
}

#[test]
fn clicks_outside_human_do_nothing() {
    let mut h = Harness::new(&[0]);
    h.click(0);
    assert_eq!(h.app.game.drawing_state(), Phase::Start);
    assert!(!h.app.game.is_clicking());
}

#[test]
fn cheat_mode_reveals_the_rest() {
    let mut h = Harness::new(&[2, 0]);
    h.play_round();
    h.key('?');
    h.key(' ');
    h.wait_for(Phase::Human);
    h.step();
    assert_eq!(h.status(), None);
    let texts: Vec<&str> = h.painter.texts().collect();
    assert!(texts.contains(&"1, 3"));
    assert!(texts.contains(&"CHEATING"));

    // The status line now repeats the label of the last button.
    h.click(0);
    assert_eq!(h.painter.texts().filter(|t| *t == "3").count(), 2);
}

#[traced_test]
#[test]
fn restart_mid_playback_finishes_animations() {
    let mut h = Harness::new(&[0, 1, 2]);
    h.key('+');
    assert_eq!(h.app.game.buttons().len(), 5);
    h.key(' ');
    h.key('q');

    assert_eq!(h.app.game.drawing_state(), Phase::Start);
    assert_eq!(h.app.game.buttons().len(), 4);
    assert_eq!(h.app.animator.len(), 4);
    assert!(logs_contain("cleared animations"));
    assert!(logs_contain("drawing state state=START"));
}
