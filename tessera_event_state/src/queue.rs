// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw event queue with per-pass coalescing.
//!
//! The host appends raw events as they arrive. Once per frame the runtime
//! calls [`RawEventQueue::drain`], which:
//!
//! - coalesces volatile kinds (pointer-move, resize) so at most one of each
//!   survives the pass, keeping the latest payload at the position of that
//!   kind's first occurrence;
//! - preserves every other event in arrival order and count;
//! - synthesizes a single [`RawKind::Tick`] when the queue is empty, so
//!   time-driven translators (long-press) still observe the clock.
//!
//! Draining is destructive: each event is handed out once and then removed.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Timestamp;
use crate::raw::{HostEvent, RawEvent, RawKind};

/// Queue behavior switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Coalesce pointer-move and resize events within a pass.
    pub coalesce: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { coalesce: true }
    }
}

/// FIFO of raw events awaiting the next processing pass.
#[derive(Clone, Debug, Default)]
pub struct RawEventQueue {
    events: VecDeque<RawEvent>,
    config: QueueConfig,
}

impl RawEventQueue {
    /// Create an empty queue with coalescing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with explicit configuration.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            events: VecDeque::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> QueueConfig {
        self.config
    }

    /// Append a raw event.
    pub fn push(&mut self, event: RawEvent) {
        self.events.push_back(event);
    }

    /// Convert and append a host event.
    ///
    /// Unsupported kinds are logged at `warn` and dropped. Key events the
    /// platform flags as auto-repeat are dropped at capture.
    ///
    /// Returns `true` if an event was enqueued.
    pub fn capture(&mut self, host: &HostEvent<'_>) -> bool {
        if host.repeat {
            tracing::trace!(kind = host.kind, "dropping platform key repeat");
            return false;
        }
        match RawEvent::try_from(host) {
            Ok(event) => {
                self.push(event);
                true
            }
            Err(err) => {
                tracing::warn!(kind = host.kind, "{err}");
                false
            }
        }
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take the events for one processing pass.
    ///
    /// Returns a single tick stamped `now` if nothing was queued.
    pub fn drain(&mut self, now: Timestamp) -> Vec<RawEvent> {
        if self.events.is_empty() {
            return alloc::vec![RawEvent::tick(now)];
        }
        let pending: Vec<RawEvent> = self.events.drain(..).collect();
        if self.config.coalesce {
            coalesce(pending)
        } else {
            pending
        }
    }

    /// Discard all queued events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

fn coalesce(events: Vec<RawEvent>) -> Vec<RawEvent> {
    let mut out: Vec<RawEvent> = Vec::with_capacity(events.len());
    let mut move_slot: Option<usize> = None;
    let mut resize_slot: Option<usize> = None;
    for event in events {
        let slot = match event.kind {
            RawKind::PointerMove { .. } => &mut move_slot,
            RawKind::Resize { .. } => &mut resize_slot,
            _ => {
                out.push(event);
                continue;
            }
        };
        match *slot {
            Some(i) => out[i] = event,
            None => {
                *slot = Some(out.len());
                out.push(event);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use kurbo::{Point, Size};

    fn mv(time: Timestamp, x: f64) -> RawEvent {
        RawEvent::new(
            time,
            RawKind::PointerMove {
                position: Point::new(x, 0.0),
            },
        )
    }

    fn down(time: Timestamp) -> RawEvent {
        RawEvent::new(
            time,
            RawKind::PointerDown {
                position: Point::ZERO,
            },
        )
    }

    fn resize(time: Timestamp, w: f64) -> RawEvent {
        RawEvent::new(
            time,
            RawKind::Resize {
                size: Size::new(w, 100.0),
            },
        )
    }

    #[test]
    fn empty_queue_yields_single_tick() {
        let mut q = RawEventQueue::new();
        let pass = q.drain(777);
        assert_eq!(pass, alloc::vec![RawEvent::tick(777)]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_is_destructive() {
        let mut q = RawEventQueue::new();
        q.push(down(1));
        assert_eq!(q.drain(2).len(), 1);
        // Second pass only sees a tick.
        assert_eq!(q.drain(3), alloc::vec![RawEvent::tick(3)]);
    }

    #[test]
    fn coalesces_each_volatile_kind_to_latest_at_first_slot() {
        let mut q = RawEventQueue::new();
        q.push(mv(1, 1.0));
        q.push(resize(2, 10.0));
        q.push(down(3));
        q.push(mv(4, 4.0));
        q.push(resize(5, 50.0));
        q.push(mv(6, 6.0));

        let pass = q.drain(10);
        assert_eq!(pass, alloc::vec![mv(6, 6.0), resize(5, 50.0), down(3)]);
    }

    #[test]
    fn non_volatile_kinds_keep_order_and_count() {
        let mut q = RawEventQueue::new();
        let key = RawEvent::new(
            2,
            RawKind::KeyDown {
                key: Key::Character('a'),
            },
        );
        q.push(down(1));
        q.push(key);
        q.push(down(3));
        q.push(key);
        let pass = q.drain(5);
        assert_eq!(pass, alloc::vec![down(1), key, down(3), key]);
    }

    #[test]
    fn coalescing_can_be_disabled() {
        let mut q = RawEventQueue::with_config(QueueConfig { coalesce: false });
        q.push(mv(1, 1.0));
        q.push(mv(2, 2.0));
        assert_eq!(q.drain(3), alloc::vec![mv(1, 1.0), mv(2, 2.0)]);
    }

    #[test]
    fn capture_drops_unsupported_and_repeats() {
        let mut q = RawEventQueue::new();
        assert!(!q.capture(&HostEvent {
            kind: "wheel",
            ..HostEvent::default()
        }));
        assert!(!q.capture(&HostEvent {
            kind: "keydown",
            key: Some("a"),
            repeat: true,
            ..HostEvent::default()
        }));
        assert!(q.capture(&HostEvent {
            kind: "keydown",
            key: Some("a"),
            ..HostEvent::default()
        }));
        assert_eq!(q.len(), 1);
    }
}
