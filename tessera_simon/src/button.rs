// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The round, numbered buttons of the game and their animations.

use core::f64::consts::TAU;

use kurbo::{Circle, Point};
use tessera_animate::Frame;
use tessera_element_tree::paint::{Color, Painter, TextStyle};

/// Radius of every button at rest.
pub const BUTTON_RADIUS: f64 = 60.0;

/// Period of the idle bob, in milliseconds.
const BOB_PERIOD_MS: f64 = 5000.0;

/// How much a click pulse grows the radius at its peak.
const PULSE_GROWTH: f64 = 0.25;

/// One game button.
#[derive(Clone, Debug, PartialEq)]
pub struct SimonButton {
    center: Point,
    rest_y: f64,
    hue: f64,
    radius: f64,
    rest_radius: f64,
    id: usize,
    /// Whether the pointer was over the button at the last hover update.
    pub hover: bool,
    animating: bool,
}

impl SimonButton {
    /// A button at `center` with the given hue, radius and index.
    pub fn new(center: Point, hue: f64, radius: f64, id: usize) -> Self {
        Self {
            center,
            rest_y: center.y,
            hue,
            radius,
            rest_radius: radius,
            id,
            hover: false,
            animating: false,
        }
    }

    /// Index in the row, which is also the value used in sequences.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Whether an animation is moving or resizing the button.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether `point` is on the disc, edge included.
    pub fn hit_test(&self, point: Point) -> bool {
        (point - self.center).hypot2() <= self.radius * self.radius
    }

    /// Draw the button, with a yellow halo when `halo` is set.
    pub fn draw(&self, painter: &mut dyn Painter, halo: bool) {
        if halo {
            painter.fill_circle(
                Circle::new(self.center, self.radius * 7.0 / 6.0),
                Color::hsl(60.0, 100.0, 60.0),
            );
        }
        painter.fill_circle(
            Circle::new(self.center, self.radius),
            Color::hsl(self.hue, 90.0, 38.0),
        );
        painter.text(
            &(self.id + 1).to_string(),
            self.center,
            TextStyle::sized(36.0).colored(Color::WHITE),
        );
    }

    /// Click pulse: the radius grows linearly to 1.25x, then snaps back.
    pub fn pulse(&mut self, frame: Frame) {
        if frame.is_final() {
            self.animating = false;
            self.radius = self.rest_radius;
        } else {
            self.animating = true;
            self.radius = self.rest_radius * (1.0 + PULSE_GROWTH * frame.progress());
        }
    }

    /// Idle bob: a sine wave whose phase depends on the button index and
    /// whose amplitude depends on the window height.
    pub fn bob(&mut self, frame: Frame, window_height: f64) {
        if frame.is_final() {
            self.animating = false;
            self.center.y = self.rest_y;
        } else {
            self.animating = true;
            let shape = 3.0 * ((self.id + 1) as f64 / 7.0).sin() - 5.0;
            let amplitude = window_height / 3.0 - self.rest_radius * 1.4;
            let t = frame.elapsed() as f64 / BOB_PERIOD_MS;
            self.center.y = self.rest_y - amplitude * (t * TAU + shape).sin();
        }
    }

    /// Fall off the bottom, one pixel per millisecond.
    pub fn fall(&mut self, frame: Frame) {
        if frame.is_final() {
            self.animating = false;
            self.center.y = self.rest_y;
        } else {
            self.animating = true;
            self.center.y = self.rest_y + frame.elapsed() as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_element_tree::paint::{DisplayList, PaintOp};

    fn frame(start: u64, current: u64, end: u64) -> Frame {
        Frame {
            start,
            current,
            end,
        }
    }

    fn button() -> SimonButton {
        SimonButton::new(Point::new(100.0, 200.0), 90.0, BUTTON_RADIUS, 1)
    }

    #[test]
    fn hit_test_includes_edge() {
        let b = button();
        assert!(b.hit_test(Point::new(160.0, 200.0)));
        assert!(b.hit_test(Point::new(100.0, 140.0)));
        assert!(!b.hit_test(Point::new(160.1, 200.0)));
    }

    #[test]
    fn pulse_grows_then_restores() {
        let mut b = button();
        b.pulse(frame(0, 250, 500));
        assert!(b.is_animating());
        assert!((b.radius() - 67.5).abs() < 1e-9);
        b.pulse(frame(0, 500, 500));
        assert!(!b.is_animating());
        assert_eq!(b.radius(), BUTTON_RADIUS);
    }

    #[test]
    fn fall_and_bob_return_to_rest_on_final_frame() {
        let mut b = button();
        b.fall(frame(0, 120, 1_000));
        assert_eq!(b.center().y, 320.0);
        b.fall(frame(0, 1_000, 1_000));
        assert_eq!(b.center().y, 200.0);

        b.bob(frame(0, 1_250, 10_000), 600.0);
        assert!(b.is_animating());
        assert_ne!(b.center().y, 200.0);
        b.bob(frame(0, 10_000, 10_000), 600.0);
        assert_eq!(b.center().y, 200.0);
        assert!(!b.is_animating());
    }

    #[test]
    fn draw_halo_then_body_then_label() {
        let b = button();
        let mut list = DisplayList::new();
        b.draw(&mut list, true);
        assert!(matches!(
            list.ops(),
            [PaintOp::FillCircle(halo, _), PaintOp::FillCircle(body, _), PaintOp::Text(label, ..)]
                if halo.radius == 70.0 && body.radius == 60.0 && label == "2"
        ));

        list.clear_ops();
        b.draw(&mut list, false);
        assert_eq!(list.ops().len(), 2);
    }
}
