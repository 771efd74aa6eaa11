// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard dispatch: a single focused element.
//!
//! Requesting focus sends [`KeyboardKind::FocusOut`] to the previously
//! focused element (if it is a different one), then
//! [`KeyboardKind::FocusIn`] to the new one, then records it. Key presses go
//! only to the focused element and are dropped when nothing is focused or the
//! focused element has been removed.

use tessera_element_tree::{ElementTree, EventCx, NodeId};
use tessera_event_state::Timestamp;
use tessera_event_state::semantic::{KeyboardEvent, KeyboardKind};

/// Routes keyboard events to the focused element of an [`ElementTree`].
#[derive(Clone, Debug, Default)]
pub struct KeyboardDispatcher {
    focused: Option<NodeId>,
}

impl KeyboardDispatcher {
    /// A dispatcher with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused element, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus to `id`.
    ///
    /// Requests for the already focused element, or for removed elements,
    /// do nothing.
    pub fn request_focus(
        &mut self,
        tree: &mut ElementTree,
        id: NodeId,
        time: Timestamp,
        cx: &mut EventCx,
    ) {
        if self.focused == Some(id) {
            return;
        }
        if !tree.is_alive(id) {
            tracing::trace!(?id, "focus requested for removed element");
            return;
        }
        if let Some(prev) = self.focused {
            tree.handle_keyboard(prev, &KeyboardEvent::new(KeyboardKind::FocusOut, time), cx);
            tracing::debug!(?prev, "lost focus");
        }
        tree.handle_keyboard(id, &KeyboardEvent::new(KeyboardKind::FocusIn, time), cx);
        self.focused = Some(id);
        tracing::debug!(?id, "gained focus");
    }

    /// Remove focus, sending [`KeyboardKind::FocusOut`] to the focused element.
    pub fn clear_focus(&mut self, tree: &mut ElementTree, time: Timestamp, cx: &mut EventCx) {
        if let Some(prev) = self.focused.take() {
            tree.handle_keyboard(prev, &KeyboardEvent::new(KeyboardKind::FocusOut, time), cx);
            tracing::debug!(?prev, "lost focus");
        }
    }

    /// Deliver `event` to the focused element. Returns whether it was handled.
    pub fn dispatch(
        &mut self,
        tree: &mut ElementTree,
        event: &KeyboardEvent,
        cx: &mut EventCx,
    ) -> bool {
        let Some(id) = self.focused else {
            return false;
        };
        if !tree.is_alive(id) {
            self.focused = None;
            return false;
        }
        tracing::trace!(?id, kind = event.kind.name(), "keyboard dispatch");
        tree.handle_keyboard(id, event, cx)
    }
}
