// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget protocol and the per-event context handed to handlers.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt::Debug;
use kurbo::Point;
use tessera_event_state::Timestamp;
use tessera_event_state::semantic::{ActionEvent, KeyboardEvent, MouseEvent};

use crate::paint::Painter;
use crate::types::{Geometry, NodeId};

/// Behavior attached to an element.
///
/// Geometry lives on the element, not the widget, and is passed in by the
/// tree. All positions (geometry origin, event positions, hit-test points) are
/// in the element's parent space.
pub trait Widget: Any + Debug {
    /// Handle a pointer event. Return `true` if handled, which stops
    /// propagation to elements further back.
    fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        geometry: &Geometry,
        cx: &mut EventCx,
    ) -> bool {
        let _ = (event, geometry, cx);
        false
    }

    /// Handle a keyboard event (key-press or focus change).
    fn handle_keyboard(&mut self, event: &KeyboardEvent, cx: &mut EventCx) -> bool {
        let _ = (event, cx);
        false
    }

    /// Draw in parent space.
    fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry);

    /// Whether `point` (parent space) lies in the interactive region.
    ///
    /// Defaults to inclusive bounds containment.
    fn hit_test(&self, geometry: &Geometry, point: Point) -> bool {
        geometry.contains(point)
    }
}

/// Side-channel for handlers: focus requests and application actions.
///
/// One context spans the delivery of a single semantic event (including any
/// synthesized enter/exit or focus events), so requests from several elements
/// accumulate. The last focus request wins.
#[derive(Clone, Debug)]
pub struct EventCx {
    time: Timestamp,
    current: Option<NodeId>,
    focus_request: Option<NodeId>,
    actions: Vec<ActionEvent>,
}

impl EventCx {
    /// Create a context for an event delivered at `time`.
    pub fn new(time: Timestamp) -> Self {
        Self {
            time,
            current: None,
            focus_request: None,
            actions: Vec::new(),
        }
    }

    /// Time of the event being delivered.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The element currently handling the event.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub(crate) fn set_current(&mut self, id: NodeId) {
        self.current = Some(id);
    }

    /// Ask for keyboard focus to move to the current element.
    pub fn request_focus(&mut self) {
        if let Some(id) = self.current {
            self.focus_request = Some(id);
        }
    }

    /// Raise an application action originating from the current element.
    pub fn emit(&mut self, name: impl Into<Cow<'static, str>>) {
        let mut action = ActionEvent::new(self.time, name);
        action.source = self.current.map(NodeId::source_id);
        self.actions.push(action);
    }

    /// Pending focus request, if any.
    pub fn focus_request(&self) -> Option<NodeId> {
        self.focus_request
    }

    /// Take the pending focus request.
    pub fn take_focus_request(&mut self) -> Option<NodeId> {
        self.focus_request.take()
    }

    /// Take the actions raised so far, oldest first.
    pub fn take_actions(&mut self) -> Vec<ActionEvent> {
        core::mem::take(&mut self.actions)
    }
}
