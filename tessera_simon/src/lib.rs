// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Simon: a memory game on the Tessera runtime.
//!
//! The computer plays a sequence of numbered buttons; the player repeats it.
//! Each win makes the next sequence one longer.
//!
//! - [`logic`] holds the rules: phases, score, sequence.
//! - [`game`] lays out the buttons and drives the animations that reveal
//!   each rule change, keeping a drawing state that trails the rules.
//! - [`input`] maps keys, pointer gestures and resizes onto the game.
//! - [`render`] paints the scene.
//! - [`SimonApp`] bundles the game with its [`Animator`](tessera_animate::Animator)
//!   and installs everything on a [`Runtime`](tessera_runtime::Runtime).
//!
//! ```
//! use kurbo::Size;
//! use tessera_element_tree::paint::DisplayList;
//! use tessera_event_state::key::Key;
//! use tessera_event_state::raw::{RawEvent, RawKind};
//! use tessera_simon::{Phase, SimonApp, SimonConfig};
//!
//! let mut runtime = SimonApp::runtime();
//! let mut app = SimonApp::new(SimonConfig::default().with_seed(42));
//! let mut painter = DisplayList::new();
//!
//! runtime.push_resize(0, Size::new(800.0, 600.0));
//! runtime.push_raw(RawEvent::new(10, RawKind::KeyDown { key: Key::from(' ') }));
//! runtime.frame(&mut app, 16, &mut painter);
//!
//! assert_eq!(app.game.drawing_state(), Phase::Computer);
//! assert!(painter.texts().any(|t| t == "Watch what I do ..."));
//! ```

mod app;
mod config;
pub mod button;
pub mod game;
pub mod input;
pub mod logic;
pub mod render;

pub use app::SimonApp;
pub use config::{MAX_BUTTONS, MIN_BUTTONS, SimonConfig};
pub use game::Game;
pub use logic::{Phase, ScriptedSequence, SequenceSource, SimonLogic, XorShift};
