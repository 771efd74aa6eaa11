// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws a [`Game`] onto any [`Painter`].

use kurbo::{Point, Size};
use tessera_element_tree::paint::{Color, Painter, TextAlign, TextStyle};

use crate::game::Game;
use crate::logic::Phase;

const TEXT_SIZE: f64 = 18.0;
const CORNER_TEXT_SIZE: f64 = 16.0;

/// The status line for a drawing state.
pub fn status_line(game: &Game) -> String {
    match game.drawing_state() {
        Phase::Start => "Press SPACE to play".to_owned(),
        Phase::Computer => "Watch what I do ...".to_owned(),
        Phase::Human if game.cheat_mode() => game.remaining_sequence(),
        Phase::Human => "Now it’s your turn".to_owned(),
        Phase::Win => "You won! Press SPACE to continue".to_owned(),
        Phase::Lose => "You lose. Press SPACE to play again".to_owned(),
    }
}

/// Draw the whole scene for a surface of `size`.
///
/// Buttons first, then the score near the top, the status line at 70 %
/// height, and `"CHEATING"` in the bottom-right corner when cheat mode is on.
pub fn draw(game: &Game, painter: &mut dyn Painter, size: Size) {
    painter.clear();

    let human = game.drawing_state() == Phase::Human;
    for button in game.buttons() {
        button.draw(painter, human && button.hover && !button.is_animating());
    }

    let centered = TextStyle::sized(TEXT_SIZE);
    painter.text(
        &format!("score {}", game.score()),
        Point::new(size.width * 0.5, size.height * 0.2),
        centered,
    );
    painter.text(
        &status_line(game),
        Point::new(size.width * 0.5, size.height * 0.7),
        centered,
    );

    if game.cheat_mode() {
        painter.text(
            "CHEATING",
            Point::new(size.width * 0.95, size.height * 0.95),
            TextStyle::sized(CORNER_TEXT_SIZE)
                .aligned(TextAlign::Right)
                .colored(Color::GREY),
        );
    }
}
