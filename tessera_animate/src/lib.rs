// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Animate: a frame-driven animation scheduler.
//!
//! An animation is a time window `[start, end]` plus an update callback and an
//! optional completion. Once per frame the host calls
//! [`Animator::advance`] with the frame time:
//!
//! - before `start` the animation is left alone;
//! - within the window its update runs with the current time;
//! - once `now >= end` its update runs one last time with `current == end`,
//!   its completion fires, and it is dropped.
//!
//! The final update is clamped, never skipped, so an animation always ends in
//! its terminal state even if frames are late.
//!
//! [`Animator<T>`] is generic over the model it animates. Updates receive
//! `&mut T`; completions additionally receive the animator so they can chain
//! follow-up animations. Anything registered while `advance` is running is
//! deferred to the next `advance`.
//!
//! ```
//! use tessera_animate::{Animator, Frame, Timing};
//!
//! let mut radius = 10.0_f64;
//! let mut anim: Animator<f64> = Animator::new();
//!
//! anim.add_with(
//!     Timing { delay: 100, duration: 200 },
//!     |r, f: Frame| *r = 10.0 + 10.0 * f.progress(),
//!     |r, _| *r = 10.0,
//! );
//!
//! anim.advance(&mut radius, 50);   // before start
//! assert_eq!(radius, 10.0);
//! anim.advance(&mut radius, 200);  // halfway
//! assert_eq!(radius, 15.0);
//! anim.advance(&mut radius, 1000); // late frame: clamped to the end, then completed
//! assert_eq!(radius, 10.0);
//! assert!(anim.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

/// Milliseconds on the host's monotonic frame clock.
pub type Millis = u64;

/// Default animation length.
pub const CLICK_DURATION: Millis = 500;

/// Length used for effectively unbounded animations.
pub const FOREVER: Millis = 10_000_000_000_000;

/// Time window handed to an update callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Absolute start of the window.
    pub start: Millis,
    /// Current time, clamped to `end`.
    pub current: Millis,
    /// Absolute end of the window.
    pub end: Millis,
}

impl Frame {
    /// Fraction of the window elapsed, in `[0, 1]`. Zero-length windows are complete.
    pub fn progress(&self) -> f64 {
        if self.end <= self.start {
            return 1.0;
        }
        let p = self.elapsed() as f64 / (self.end - self.start) as f64;
        p.clamp(0.0, 1.0)
    }

    /// Milliseconds since `start`.
    pub fn elapsed(&self) -> Millis {
        self.current.saturating_sub(self.start)
    }

    /// Whether this is the terminal call.
    pub fn is_final(&self) -> bool {
        self.current == self.end
    }
}

/// When an animation starts, relative to registration, and how long it runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Wait before starting.
    pub delay: Millis,
    /// Length of the window.
    pub duration: Millis,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            delay: 0,
            duration: CLICK_DURATION,
        }
    }
}

impl Timing {
    /// Default duration after `delay`.
    pub fn delayed(delay: Millis) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// No delay, `duration` long.
    pub fn lasting(duration: Millis) -> Self {
        Self { delay: 0, duration }
    }
}

/// Handle to a registered animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

type Update<T> = Rc<dyn Fn(&mut T, Frame)>;
type OnComplete<T> = Box<dyn FnOnce(&mut T, &mut Animator<T>)>;

enum Completion<T> {
    None,
    Once(OnComplete<T>),
    /// Re-register the same update for another `FOREVER`.
    Loop,
}

struct Animation<T> {
    id: AnimationId,
    start: Millis,
    end: Millis,
    update: Update<T>,
    completion: Completion<T>,
}

impl<T> Animation<T> {
    fn frame(&self, now: Millis) -> Frame {
        Frame {
            start: self.start,
            current: now.min(self.end),
            end: self.end,
        }
    }
}

/// Scheduler of time-bounded animations over a model `T`.
pub struct Animator<T> {
    anims: Vec<Animation<T>>,
    now: Millis,
    next_id: u64,
}

impl<T> fmt::Debug for Animator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("len", &self.anims.len())
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl<T> Default for Animator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Animator<T> {
    /// Register an animation with default [`Timing`] and a completion.
    pub fn add(
        &mut self,
        update: impl Fn(&mut T, Frame) + 'static,
        on_complete: impl FnOnce(&mut T, &mut Self) + 'static,
    ) -> AnimationId {
        self.add_with(Timing::default(), update, on_complete)
    }

    /// Register an animation with explicit timing and a completion.
    ///
    /// Start and end are computed from the last time passed to
    /// [`advance`](Self::advance).
    pub fn add_with(
        &mut self,
        timing: Timing,
        update: impl Fn(&mut T, Frame) + 'static,
        on_complete: impl FnOnce(&mut T, &mut Self) + 'static,
    ) -> AnimationId {
        self.register(
            timing,
            Rc::new(update),
            Completion::Once(Box::new(on_complete)),
        )
    }

    /// Register an animation with no completion.
    pub fn play(&mut self, timing: Timing, update: impl Fn(&mut T, Frame) + 'static) -> AnimationId {
        self.register(timing, Rc::new(update), Completion::None)
    }

    /// Register an effectively unbounded animation that re-registers itself
    /// each time its window ends.
    ///
    /// The returned id refers to the first window only.
    pub fn add_loop(
        &mut self,
        update: impl Fn(&mut T, Frame) + 'static,
        delay: Millis,
    ) -> AnimationId {
        self.register(
            Timing {
                delay,
                duration: FOREVER,
            },
            Rc::new(update),
            Completion::Loop,
        )
    }
}

impl<T> Animator<T> {
    /// An empty scheduler at time zero.
    pub fn new() -> Self {
        Self {
            anims: Vec::new(),
            now: 0,
            next_id: 0,
        }
    }

    /// The last time passed to [`advance`](Self::advance).
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of registered animations (pending or active).
    pub fn len(&self) -> usize {
        self.anims.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.anims.is_empty()
    }

    /// Whether `id` is still registered.
    pub fn is_scheduled(&self, id: AnimationId) -> bool {
        self.anims.iter().any(|a| a.id == id)
    }

    fn register(&mut self, timing: Timing, update: Update<T>, completion: Completion<T>) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        let start = self.now.saturating_add(timing.delay);
        let end = start.saturating_add(timing.duration);
        tracing::trace!(id = id.0, start, end, "animation registered");
        self.anims.push(Animation {
            id,
            start,
            end,
            update,
            completion,
        });
        id
    }

    /// Run every started animation for time `now`, completing those whose
    /// window has ended.
    pub fn advance(&mut self, model: &mut T, now: Millis) {
        self.now = now;
        let current = core::mem::take(&mut self.anims);
        let mut keep = Vec::with_capacity(current.len());
        for anim in current {
            if now < anim.start {
                keep.push(anim);
                continue;
            }
            (anim.update)(model, anim.frame(now));
            if now < anim.end {
                keep.push(anim);
                continue;
            }
            match anim.completion {
                Completion::None => {}
                Completion::Once(done) => done(model, self),
                Completion::Loop => {
                    self.register(Timing::lasting(FOREVER), anim.update, Completion::Loop);
                }
            }
        }
        // Registrations made during this pass run from the next advance.
        let added = core::mem::replace(&mut self.anims, keep);
        self.anims.extend(added);
    }

    /// Finish every registered animation immediately.
    ///
    /// Each update runs once with `current == end`; completions are *not*
    /// called and loops are not renewed. Returns how many were finished.
    pub fn clear_all(&mut self, model: &mut T) -> usize {
        let anims = core::mem::take(&mut self.anims);
        let count = anims.len();
        for anim in anims {
            (anim.update)(model, anim.frame(anim.end));
        }
        if count > 0 {
            tracing::debug!(count, "cleared animations");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Default)]
    struct Model {
        frames: Vec<Frame>,
        completions: u32,
    }

    fn record(m: &mut Model, f: Frame) {
        m.frames.push(f);
    }

    #[test]
    fn delay_and_duration_window() {
        let mut m = Model::default();
        let mut a = Animator::new();
        a.advance(&mut m, 1000);
        a.add_with(
            Timing {
                delay: 100,
                duration: 200,
            },
            record,
            |m: &mut Model, _| m.completions += 1,
        );

        a.advance(&mut m, 1099);
        assert!(m.frames.is_empty());

        a.advance(&mut m, 1100);
        a.advance(&mut m, 1250);
        a.advance(&mut m, 5000);
        a.advance(&mut m, 6000);

        let currents: Vec<_> = m.frames.iter().map(|f| f.current).collect();
        assert_eq!(currents, [1100, 1250, 1300]);
        assert!(m.frames.last().unwrap().is_final());
        assert!(m.frames.iter().all(|f| f.start == 1100 && f.end == 1300));
        assert_eq!(m.completions, 1);
        assert!(a.is_empty());
    }

    #[test]
    fn zero_length_fires_one_terminal_call() {
        let mut m = Model::default();
        let mut a = Animator::new();
        a.add_with(
            Timing::lasting(0),
            record,
            |m: &mut Model, _| m.completions += 1,
        );
        a.advance(&mut m, 0);
        a.advance(&mut m, 10);
        assert_eq!(
            m.frames,
            vec![Frame {
                start: 0,
                current: 0,
                end: 0
            }]
        );
        assert_eq!(m.frames[0].progress(), 1.0);
        assert_eq!(m.completions, 1);
    }

    #[test]
    fn clear_all_finishes_without_completions() {
        let mut m = Model::default();
        let mut a = Animator::new();
        a.add(record, |m: &mut Model, _| m.completions += 1);
        a.add_with(Timing::delayed(10_000), record, |m: &mut Model, _| {
            m.completions += 1;
        });
        a.add_loop(record, 0);
        a.advance(&mut m, 100);
        m.frames.clear();

        assert_eq!(a.clear_all(&mut m), 3);
        assert_eq!(m.frames.len(), 3);
        assert!(m.frames.iter().all(Frame::is_final));
        assert_eq!(m.completions, 0);
        assert!(a.is_empty());

        a.advance(&mut m, 1_000_000);
        assert_eq!(m.frames.len(), 3);
    }

    #[test]
    fn completion_registrations_are_deferred() {
        let mut m = Model::default();
        let mut a: Animator<Model> = Animator::new();
        a.add_with(Timing::lasting(10), |_, _| {}, |_, a: &mut Animator<Model>| {
            a.add_with(Timing::lasting(0), record, |m: &mut Model, _| {
                m.completions += 1;
            });
        });

        a.advance(&mut m, 10);
        // Follow-up registered at t=10 but not run in the same pass.
        assert!(m.frames.is_empty());
        assert_eq!(a.len(), 1);

        a.advance(&mut m, 11);
        assert_eq!(m.frames.len(), 1);
        assert_eq!(m.completions, 1);
    }

    #[test]
    fn loops_renew_with_same_update() {
        let mut m = Model::default();
        let mut a = Animator::new();
        let first = a.add_loop(record, 0);
        a.advance(&mut m, FOREVER);
        assert!(m.frames[0].is_final());
        assert!(!a.is_scheduled(first));
        assert_eq!(a.len(), 1);

        a.advance(&mut m, FOREVER + 5);
        assert_eq!(
            m.frames[1],
            Frame {
                start: FOREVER,
                current: FOREVER + 5,
                end: 2 * FOREVER
            }
        );
    }

    #[test]
    fn pending_animations_are_untouched() {
        let mut m = Model::default();
        let mut a = Animator::new();
        let id = a.add_with(Timing::delayed(50), record, |_, _| {});
        a.advance(&mut m, 49);
        assert!(m.frames.is_empty());
        assert!(a.is_scheduled(id));
        assert_eq!(a.now(), 49);
    }

    #[test]
    fn progress_is_linear() {
        let f = Frame {
            start: 100,
            current: 150,
            end: 300,
        };
        assert_eq!(f.progress(), 0.25);
        assert_eq!(f.elapsed(), 50);
        assert!(!f.is_final());
    }
}
