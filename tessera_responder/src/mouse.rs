// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse dispatch: capture, hover tracking, and front-to-back delivery.
//!
//! ## Semantics
//!
//! - **Capture.** When an element handles [`MouseKind::Down`], it captures the
//!   pointer: every following mouse event goes straight to it, without hit
//!   testing, until a [`MouseKind::Up`] has been delivered. If the captured
//!   element has been removed, the event is dropped and capture released.
//! - **Delivery.** Without capture, the elements under the pointer are
//!   computed with [`ElementTree::hits_at`] and offered the event front to
//!   back until one reports it handled.
//! - **Hover.** On [`MouseKind::Move`] without capture, if the topmost hit
//!   differs from the previous topmost, the previous one receives
//!   [`MouseKind::Exit`] and the new one [`MouseKind::Enter`] before the move
//!   itself is delivered. Moving off every element sends only the exit.

use tessera_element_tree::{ElementTree, EventCx, NodeId};
use tessera_event_state::semantic::{MouseEvent, MouseKind};

use crate::dispatcher::{self, Outcome};

/// Routes mouse events into an [`ElementTree`].
#[derive(Clone, Debug, Default)]
pub struct MouseDispatcher {
    capture: Option<NodeId>,
    hovered: Option<NodeId>,
}

impl MouseDispatcher {
    /// A dispatcher with no capture and nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element holding pointer capture.
    pub fn capture(&self) -> Option<NodeId> {
        self.capture
    }

    /// The topmost element under the pointer as of the last move.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Forget capture and hover, for example after replacing the tree.
    pub fn reset(&mut self) {
        self.capture = None;
        self.hovered = None;
    }

    /// Deliver `event` to the subtree at `root`.
    ///
    /// Returns the element that handled it, if any.
    pub fn dispatch(
        &mut self,
        tree: &mut ElementTree,
        root: NodeId,
        event: &MouseEvent,
        cx: &mut EventCx,
    ) -> Option<NodeId> {
        if let Some(captured) = self.capture {
            if !tree.is_alive(captured) {
                tracing::trace!(kind = event.kind.name(), "captured element gone; dropping");
                self.capture = None;
                return None;
            }
            let handled = tree.handle_mouse(captured, event, cx);
            if event.kind == MouseKind::Up {
                self.capture = None;
            }
            return handled.then_some(captured);
        }

        let hits = tree.hits_at(root, event.position);

        if event.kind == MouseKind::Move {
            let top = hits.first().copied();
            if top != self.hovered {
                if let Some(prev) = self.hovered {
                    tree.handle_mouse(prev, &event.with_kind(MouseKind::Exit), cx);
                }
                if let Some(next) = top {
                    tree.handle_mouse(next, &event.with_kind(MouseKind::Enter), cx);
                }
                self.hovered = top;
            }
        }

        let handled = dispatcher::run(&hits, cx, |id, cx| {
            Outcome::from_handled(tree.handle_mouse(*id, event, cx))
        })
        .copied();

        if event.kind == MouseKind::Down
            && let Some(id) = handled
        {
            tracing::trace!(?id, "pointer captured");
            self.capture = Some(id);
        }
        handled
    }
}
