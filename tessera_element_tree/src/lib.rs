// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Element Tree: an arena-backed tree of interactive elements.
//!
//! - [`ElementTree`] owns elements in a generational arena; [`NodeId`]s are
//!   cheap handles that go stale when their element is removed.
//! - Each element has [`Geometry`] in its parent's space, [`ElementFlags`],
//!   and a boxed [`Widget`] providing hit testing, drawing, and input handling.
//! - [`ElementTree::hits_at`] walks a subtree with an explicit worklist,
//!   translating the point into each element's local space, and returns hits
//!   front-to-back.
//! - [`ElementTree::draw`] paints a subtree through a [`Painter`].
//!
//! Routing events to elements (mouse capture, hover tracking, keyboard focus)
//! is the job of `tessera_responder`; this crate only delivers an event to
//! one element at a time.
//!
//! ## Not a layout engine
//!
//! [`layout::row_layout`] and [`layout::row_wrap_layout`] are positioning
//! helpers. Sizes are whatever the application assigns.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;
pub mod paint;
mod tree;
mod types;
mod widget;
pub mod widgets;

pub use paint::{Color, Painter};
pub use tree::{Element, ElementTree, Hits};
pub use types::{
    DEFAULT_EXTENT, DEFAULT_MAX_EXTENT, DEFAULT_MIN_EXTENT, ElementFlags, Geometry, NodeId,
};
pub use widget::{EventCx, Widget};
