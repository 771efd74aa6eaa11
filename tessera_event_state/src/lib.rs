// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Event State: raw input capture and semantic event translation.
//!
//! ## Overview
//!
//! Input arrives from the host as a stream of low-level, time-stamped
//! [`RawEvent`](raw::RawEvent)s: pointer down/up/move, key down/up, resize.
//! This crate turns that stream into [`SemanticEvent`](semantic::SemanticEvent)s
//! such as clicks, double-clicks, drags, long-presses, and key-presses.
//!
//! The work is split in two stages:
//!
//! 1. [`RawEventQueue`](queue::RawEventQueue) accumulates raw events between
//!    frames. Draining it once per frame coalesces high-frequency kinds
//!    (pointer-move, resize) and synthesizes a [`RawKind::Tick`](raw::RawKind::Tick)
//!    when nothing arrived, so time-only transitions still fire.
//! 2. A fixed, ordered list of [`EventTranslator`](translate::EventTranslator)s
//!    each see every drained event and independently emit at most one semantic
//!    event per input.
//!
//! ```
//! use kurbo::Point;
//! use tessera_event_state::queue::RawEventQueue;
//! use tessera_event_state::raw::{RawEvent, RawKind};
//! use tessera_event_state::semantic::{MouseKind, SemanticEvent};
//! use tessera_event_state::translate::{ClickTranslator, EventTranslator};
//!
//! let mut queue = RawEventQueue::new();
//! queue.push(RawEvent::new(10, RawKind::PointerDown { position: Point::new(5.0, 5.0) }));
//! queue.push(RawEvent::new(40, RawKind::PointerUp { position: Point::new(6.0, 5.0) }));
//!
//! let mut click = ClickTranslator::new();
//! let emitted: Vec<SemanticEvent> = queue
//!     .drain(50)
//!     .iter()
//!     .filter_map(|raw| click.update(raw))
//!     .collect();
//!
//! assert_eq!(emitted.len(), 1);
//! assert!(matches!(
//!     &emitted[0],
//!     SemanticEvent::Mouse(m) if m.kind == MouseKind::Click
//! ));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod key;
pub mod queue;
pub mod raw;
pub mod semantic;
pub mod translate;

/// Monotonic time in milliseconds, as supplied by the host's frame clock.
pub type Timestamp = u64;
