// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Responder: routes semantic events into an element tree.
//!
//! ## Overview
//!
//! Two dispatchers cover the two input categories:
//!
//! - [`MouseDispatcher`](mouse::MouseDispatcher) hit-tests the tree, offers
//!   the event front to back until an element handles it, tracks the
//!   topmost hovered element to synthesize enter/exit, and gives a handled
//!   press exclusive capture until release.
//! - [`KeyboardDispatcher`](keyboard::KeyboardDispatcher) keeps a single
//!   focused element, sends focus-out/focus-in on change, and delivers key
//!   presses only there.
//!
//! Propagation is driven by the small [`dispatcher::run`] helper.
//!
//! Handlers get an [`EventCx`](tessera_element_tree::EventCx) through which
//! they can request focus or raise application actions; the caller (normally
//! the runtime) applies those after delivery.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod keyboard;
pub mod mouse;

#[cfg(test)]
mod test_util;
