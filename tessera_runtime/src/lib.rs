// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Runtime: the per-frame loop that ties input, dispatch, animation
//! and drawing together.
//!
//! ## Overview
//!
//! A [`Runtime`] owns everything between the host and the application:
//!
//! - a [`RawEventQueue`] the host feeds between frames,
//! - an ordered list of [`EventTranslator`]s,
//! - events the application sent itself with [`Runtime::send_event`],
//! - an optional element tree with its [`MouseDispatcher`] and
//!   [`KeyboardDispatcher`],
//! - the application's listener, animation and draw callbacks.
//!
//! The application state `S` is not owned by the runtime. It is passed to
//! [`Runtime::frame`] and from there to each callback.
//!
//! ## One frame
//!
//! 1. Drain the queue; an empty queue yields a single tick so time-based
//!    translators still make progress.
//! 2. Run every raw event through every translator, in order.
//! 3. Merge the result with the sent events by timestamp. On equal
//!    timestamps translated events come first.
//! 4. For each event: route mouse events through the tree (if a root is
//!    set) and keyboard events to the focused element, apply any focus
//!    request, then hand the event to the listener followed by any actions
//!    the handlers raised.
//! 5. Call the animation callback with the frame time.
//! 6. Draw: with a root, clear the surface and draw the tree; otherwise call
//!    the draw callback.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tessera_element_tree::paint::DisplayList;
//! use tessera_element_tree::widgets::PushButton;
//! use tessera_element_tree::{Element, ElementTree};
//! use tessera_event_state::raw::{RawEvent, RawKind};
//! use tessera_event_state::semantic::SemanticEvent;
//! use tessera_runtime::Runtime;
//!
//! let mut tree = ElementTree::new();
//! let button = tree.insert(None, Element::new(PushButton::new("Go"), Rect::new(0.0, 0.0, 80.0, 30.0)));
//!
//! let mut runtime: Runtime<Vec<String>> = Runtime::new();
//! runtime.set_root(tree, button);
//! runtime.set_event_listener(|seen, event| seen.push(event.name().to_owned()));
//!
//! let at = Point::new(10.0, 10.0);
//! runtime.push_raw(RawEvent::new(5, RawKind::PointerDown { position: at }));
//! runtime.push_raw(RawEvent::new(20, RawKind::PointerUp { position: at }));
//!
//! let mut seen = Vec::new();
//! runtime.frame(&mut seen, 30, &mut DisplayList::new());
//! assert_eq!(seen, ["mousedown", "mouseup", "action", "click"]);
//! ```

use core::fmt;

use kurbo::Size;
use tessera_element_tree::{ElementTree, EventCx, NodeId, Painter};
use tessera_event_state::Timestamp;
use tessera_event_state::queue::{QueueConfig, RawEventQueue};
use tessera_event_state::raw::{HostEvent, RawEvent, RawKind};
use tessera_event_state::semantic::SemanticEvent;
use tessera_event_state::translate::{EventTranslator, default_translators, translate_all};
use tessera_responder::keyboard::KeyboardDispatcher;
use tessera_responder::mouse::MouseDispatcher;

/// Construction options for a [`Runtime`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Options for the raw event queue.
    pub queue: QueueConfig,
    /// Whether to install [`default_translators`] at construction.
    pub default_translators: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            queue: QueueConfig::default(),
            default_translators: true,
        }
    }
}

impl RuntimeConfig {
    /// Use `queue` for the raw event queue.
    pub fn with_queue(mut self, queue: QueueConfig) -> Self {
        self.queue = queue;
        self
    }

    /// Choose whether the standard translators are installed.
    pub fn with_default_translators(mut self, install: bool) -> Self {
        self.default_translators = install;
        self
    }
}

type Listener<S> = Box<dyn FnMut(&mut S, &SemanticEvent)>;
type DrawCallback<S> = Box<dyn FnMut(&S, &mut dyn Painter, Timestamp)>;
type AnimationCallback<S> = Box<dyn FnMut(&mut S, Timestamp)>;

#[derive(Debug)]
struct Root {
    tree: ElementTree,
    id: NodeId,
}

/// The frame loop for an application with state `S`.
pub struct Runtime<S> {
    queue: RawEventQueue,
    translators: Vec<Box<dyn EventTranslator>>,
    sent: Vec<SemanticEvent>,
    root: Option<Root>,
    mouse: MouseDispatcher,
    keyboard: KeyboardDispatcher,
    listener: Option<Listener<S>>,
    draw: Option<DrawCallback<S>>,
    animate: Option<AnimationCallback<S>>,
}

impl<S> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("queued", &self.queue.len())
            .field("translators", &self.translator_names().collect::<Vec<_>>())
            .field("sent", &self.sent.len())
            .field("root", &self.root.as_ref().map(|r| r.id))
            .field("mouse", &self.mouse)
            .field("keyboard", &self.keyboard)
            .finish_non_exhaustive()
    }
}

impl<S> Default for Runtime<S> {
    fn default() -> Self {
        Self::with_config(RuntimeConfig::default())
    }
}

impl<S> Runtime<S> {
    /// A runtime with the standard translators and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runtime built from `config`.
    pub fn with_config(config: RuntimeConfig) -> Self {
        let translators = if config.default_translators {
            default_translators()
        } else {
            Vec::new()
        };
        Self {
            queue: RawEventQueue::with_config(config.queue),
            translators,
            sent: Vec::new(),
            root: None,
            mouse: MouseDispatcher::new(),
            keyboard: KeyboardDispatcher::new(),
            listener: None,
            draw: None,
            animate: None,
        }
    }

    /// Queue a raw event for the next frame.
    pub fn push_raw(&mut self, event: RawEvent) {
        self.queue.push(event);
    }

    /// Convert and queue a host event. Returns whether it was queued.
    ///
    /// Key repeats and unsupported kinds are dropped; the latter with a
    /// warning.
    pub fn capture(&mut self, host: &HostEvent<'_>) -> bool {
        self.queue.capture(host)
    }

    /// Queue a resize, as a host does once at startup to report the
    /// initial surface size.
    pub fn push_resize(&mut self, time: Timestamp, size: Size) {
        self.queue.push(RawEvent::new(time, RawKind::Resize { size }));
    }

    /// Number of raw events waiting for the next frame.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Append a translator after the existing ones.
    pub fn add_event_translator(&mut self, translator: impl EventTranslator + 'static) {
        tracing::debug!(translator = translator.name(), "translator added");
        self.translators.push(Box::new(translator));
    }

    /// Names of the installed translators, in the order they run.
    pub fn translator_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.translators.iter().map(|t| t.name())
    }

    /// Receive every event after dispatch, including actions raised by
    /// elements.
    pub fn set_event_listener(&mut self, listener: impl FnMut(&mut S, &SemanticEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Draw the frame when no element tree is set.
    pub fn set_draw_callback(
        &mut self,
        draw: impl FnMut(&S, &mut dyn Painter, Timestamp) + 'static,
    ) {
        self.draw = Some(Box::new(draw));
    }

    /// Called once per frame after events, before drawing.
    pub fn set_animation_callback(&mut self, animate: impl FnMut(&mut S, Timestamp) + 'static) {
        self.animate = Some(Box::new(animate));
    }

    /// Install an element tree and the node drawn and hit-tested as its root.
    ///
    /// Replaces any previous tree, forgetting its capture, hover and focus.
    pub fn set_root(&mut self, tree: ElementTree, root: NodeId) {
        tracing::debug!(?root, elements = tree.len(), "root set");
        self.mouse.reset();
        self.keyboard = KeyboardDispatcher::new();
        self.root = Some(Root { tree, id: root });
    }

    /// Remove the element tree, returning it with its root.
    pub fn take_root(&mut self) -> Option<(ElementTree, NodeId)> {
        self.mouse.reset();
        self.keyboard = KeyboardDispatcher::new();
        self.root.take().map(|r| (r.tree, r.id))
    }

    /// The root node, if a tree is set.
    pub fn root(&self) -> Option<NodeId> {
        self.root.as_ref().map(|r| r.id)
    }

    /// The element tree, if set.
    pub fn tree(&self) -> Option<&ElementTree> {
        self.root.as_ref().map(|r| &r.tree)
    }

    /// Mutable access to the element tree, if set.
    pub fn tree_mut(&mut self) -> Option<&mut ElementTree> {
        self.root.as_mut().map(|r| &mut r.tree)
    }

    /// The element with keyboard focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.keyboard.focused()
    }

    /// The topmost element under the pointer as of the last move.
    pub fn hovered(&self) -> Option<NodeId> {
        self.mouse.hovered()
    }

    /// Move keyboard focus to `id`, forwarding any actions raised by the
    /// focus change to the listener.
    pub fn request_focus(&mut self, state: &mut S, id: NodeId, time: Timestamp) {
        let Some(root) = &mut self.root else {
            return;
        };
        let mut cx = EventCx::new(time);
        self.keyboard.request_focus(&mut root.tree, id, time, &mut cx);
        self.forward_actions(state, &mut cx);
    }

    /// Queue an application event for the next frame.
    ///
    /// It is delivered after dispatch, in timestamp order with the
    /// translated events.
    pub fn send_event(&mut self, event: impl Into<SemanticEvent>) {
        self.sent.push(event.into());
    }

    /// Run one frame at time `now`, drawing into `painter`.
    pub fn frame(&mut self, state: &mut S, now: Timestamp, painter: &mut dyn Painter) {
        let raw = self.queue.drain(now);
        let mut translated = Vec::new();
        for event in &raw {
            translate_all(&mut self.translators, event, &mut translated);
        }
        let events = merge_by_time(translated, core::mem::take(&mut self.sent));
        tracing::trace!(now, raw = raw.len(), events = events.len(), "frame");

        for event in &events {
            self.deliver(state, event);
        }

        if let Some(animate) = &mut self.animate {
            animate(state, now);
        }

        match &self.root {
            Some(root) => {
                painter.clear();
                root.tree.draw(root.id, painter);
            }
            None => {
                if let Some(draw) = &mut self.draw {
                    draw(state, painter, now);
                }
            }
        }
    }

    fn deliver(&mut self, state: &mut S, event: &SemanticEvent) {
        let mut cx = EventCx::new(event.time());
        if let Some(root) = &mut self.root {
            match event {
                SemanticEvent::Mouse(mouse) => {
                    self.mouse.dispatch(&mut root.tree, root.id, mouse, &mut cx);
                }
                SemanticEvent::Keyboard(key) => {
                    self.keyboard.dispatch(&mut root.tree, key, &mut cx);
                }
                SemanticEvent::Resize(_) | SemanticEvent::Action(_) => {}
            }
            if let Some(id) = cx.take_focus_request() {
                self.keyboard
                    .request_focus(&mut root.tree, id, event.time(), &mut cx);
            }
        }
        if let Some(listener) = &mut self.listener {
            listener(state, event);
        }
        self.forward_actions(state, &mut cx);
    }

    fn forward_actions(&mut self, state: &mut S, cx: &mut EventCx) {
        for action in cx.take_actions() {
            tracing::trace!(name = %action.name, source = ?action.source, "action");
            if let Some(listener) = &mut self.listener {
                listener(state, &SemanticEvent::Action(action));
            }
        }
    }
}

/// Merge two event lists by timestamp, keeping `first` ahead on ties.
///
/// `first` keeps its own order; `second` is stably sorted first.
fn merge_by_time(first: Vec<SemanticEvent>, mut second: Vec<SemanticEvent>) -> Vec<SemanticEvent> {
    if second.is_empty() {
        return first;
    }
    second.sort_by_key(SemanticEvent::time);
    let mut out = Vec::with_capacity(first.len() + second.len());
    let mut second = second.into_iter().peekable();
    for event in first {
        while let Some(next) = second.next_if(|s| s.time() < event.time()) {
            out.push(next);
        }
        out.push(event);
    }
    out.extend(second);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_event_state::semantic::{ActionEvent, ResizeEvent};

    fn action(time: Timestamp, name: &'static str) -> SemanticEvent {
        ActionEvent::new(time, name).into()
    }

    fn names(events: &[SemanticEvent]) -> Vec<&str> {
        events.iter().map(SemanticEvent::name).collect()
    }

    #[test]
    fn merge_puts_first_ahead_on_ties() {
        let first = vec![action(10, "a"), action(20, "b")];
        let second = vec![action(20, "x"), action(5, "y"), action(30, "z")];
        let merged = merge_by_time(first, second);
        assert_eq!(names(&merged), ["y", "a", "b", "x", "z"]);
    }

    #[test]
    fn merge_with_empty_sides() {
        let only = vec![action(1, "a")];
        assert_eq!(names(&merge_by_time(only.clone(), Vec::new())), ["a"]);
        assert_eq!(names(&merge_by_time(Vec::new(), only)), ["a"]);
    }

    #[test]
    fn config_can_skip_default_translators() {
        let bare: Runtime<()> =
            Runtime::with_config(RuntimeConfig::default().with_default_translators(false));
        assert_eq!(bare.translator_names().count(), 0);

        let full: Runtime<()> = Runtime::new();
        assert_eq!(
            full.translator_names().collect::<Vec<_>>(),
            ["pointer", "resize", "keypress", "dblclick", "drag"]
        );
    }

    #[test]
    fn sent_events_are_consumed_by_one_frame() {
        use tessera_element_tree::paint::DisplayList;

        let mut runtime: Runtime<Vec<String>> =
            Runtime::with_config(RuntimeConfig::default().with_default_translators(false));
        runtime.set_event_listener(|seen, e| seen.push(e.name().to_owned()));
        runtime.send_event(ResizeEvent {
            time: 1,
            size: Size::new(10.0, 10.0),
        });

        let mut seen = Vec::new();
        let mut painter = DisplayList::new();
        runtime.frame(&mut seen, 2, &mut painter);
        runtime.frame(&mut seen, 3, &mut painter);
        assert_eq!(seen, ["resize"]);
    }
}
