// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, queries, hit testing, drawing.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use tessera_event_state::semantic::{KeyboardEvent, MouseEvent};

use crate::paint::Painter;
use crate::types::{ElementFlags, Geometry, NodeId};
use crate::widget::{EventCx, Widget};

/// Elements under a point, front-to-back.
pub type Hits = SmallVec<[NodeId; 8]>;

/// A widget plus its geometry and flags, ready to insert.
#[derive(Debug)]
pub struct Element {
    /// Geometry in parent space.
    pub geometry: Geometry,
    /// Drawing and picking flags.
    pub flags: ElementFlags,
    widget: Box<dyn Widget>,
}

impl Element {
    /// Wrap `widget` occupying `bounds` in parent space.
    pub fn new(widget: impl Widget, bounds: Rect) -> Self {
        Self {
            geometry: Geometry::from_rect(bounds),
            flags: ElementFlags::default(),
            widget: Box::new(widget),
        }
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}

#[derive(Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// Arena of elements forming one or more trees.
///
/// Each element's geometry is in its parent's space; children are
/// positioned relative to the parent's origin.
///
/// ```
/// use kurbo::{Point, Rect};
/// use tessera_element_tree::{Element, ElementTree};
/// use tessera_element_tree::widgets::{Container, PushButton};
///
/// let mut tree = ElementTree::new();
/// let root = tree.insert(None, Element::new(Container::new(), Rect::new(0.0, 0.0, 400.0, 300.0)));
/// let panel = tree.insert(Some(root), Element::new(Container::new(), Rect::new(100.0, 100.0, 300.0, 200.0)));
/// let ok = tree.insert(Some(panel), Element::new(PushButton::new("OK"), Rect::new(10.0, 10.0, 90.0, 40.0)));
///
/// // Front-to-back: the button, then its panel, then the root.
/// let hits = tree.hits_at(root, Point::new(120.0, 120.0));
/// assert_eq!(hits.as_slice(), &[ok, panel, root]);
/// ```
pub struct ElementTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ElementTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert an element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts a root.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let node = |generation| Node {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove an element and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id)
            && let Some(p) = self.node_mut(parent)
        {
            p.children.retain(|c| *c != id);
        }
        let mut stack = alloc::vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes[cur.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(cur.idx());
            }
        }
    }

    /// Whether `id` refers to a live element.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the tree has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parent of a live element.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a live element, in insertion (back-to-front) order.
    ///
    /// Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Geometry of a live element.
    pub fn geometry(&self, id: NodeId) -> Option<&Geometry> {
        self.node(id).map(|n| &n.element.geometry)
    }

    /// Mutable geometry of a live element.
    pub fn geometry_mut(&mut self, id: NodeId) -> Option<&mut Geometry> {
        self.node_mut(id).map(|n| &mut n.element.geometry)
    }

    /// Flags of a live element.
    pub fn flags(&self, id: NodeId) -> Option<ElementFlags> {
        self.node(id).map(|n| n.element.flags)
    }

    /// Update flags of a live element.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(n) = self.node_mut(id) {
            n.element.flags = flags;
        }
    }

    /// The widget of a live element, if it is a `W`.
    pub fn widget<W: Widget>(&self, id: NodeId) -> Option<&W> {
        let widget: &dyn Any = &*self.node(id)?.element.widget;
        widget.downcast_ref()
    }

    /// Mutable access to the widget of a live element, if it is a `W`.
    pub fn widget_mut<W: Widget>(&mut self, id: NodeId) -> Option<&mut W> {
        let widget: &mut dyn Any = &mut *self.node_mut(id)?.element.widget;
        widget.downcast_mut()
    }

    /// Position of `id`'s origin in surface space (its root's parent space).
    pub fn origin_in_root(&self, id: NodeId) -> Option<Point> {
        let mut at = self.geometry(id)?.origin;
        let mut cur = self.parent_of(id);
        while let Some(p) = cur {
            at += self.geometry(p)?.origin.to_vec2();
            cur = self.parent_of(p);
        }
        Some(at)
    }

    /// Elements under `point` in the subtree at `root`, front-to-back.
    ///
    /// `point` is in `root`'s parent space. The walk visits every visible
    /// element depth-first, translating the point into each element's local
    /// space before testing its children, and records pickable elements whose
    /// hit test passes. Later siblings and deeper elements come first in the
    /// result.
    ///
    /// Children are visited even when their parent misses, so children drawn
    /// outside a container's bounds remain reachable.
    pub fn hits_at(&self, root: NodeId, point: Point) -> Hits {
        let mut hits = Hits::new();
        let mut stack: Vec<(NodeId, Point)> = alloc::vec![(root, point)];
        while let Some((id, p)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let el = &node.element;
            if !el.flags.contains(ElementFlags::VISIBLE) {
                continue;
            }
            if el.flags.contains(ElementFlags::PICKABLE) && el.widget.hit_test(&el.geometry, p) {
                hits.push(id);
            }
            let local = p - el.geometry.origin.to_vec2();
            // Reverse so the first child is popped first.
            stack.extend(node.children.iter().rev().map(|c| (*c, local)));
        }
        hits.reverse();
        hits
    }

    /// Draw the subtree at `root`, parents before children.
    ///
    /// Children are drawn inside a translation by their parent's origin.
    /// Invisible elements are skipped with their subtrees.
    pub fn draw(&self, root: NodeId, painter: &mut dyn Painter) {
        enum Step {
            Draw(NodeId),
            Pop,
        }
        let mut stack = alloc::vec![Step::Draw(root)];
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Draw(id) => id,
                Step::Pop => {
                    painter.pop();
                    continue;
                }
            };
            let Some(node) = self.node(id) else {
                continue;
            };
            let el = &node.element;
            if !el.flags.contains(ElementFlags::VISIBLE) {
                continue;
            }
            el.widget.draw(painter, &el.geometry);
            if !node.children.is_empty() {
                painter.push_translate(el.geometry.origin.to_vec2());
                stack.push(Step::Pop);
                stack.extend(node.children.iter().rev().map(|c| Step::Draw(*c)));
            }
        }
    }

    /// Deliver a mouse event to one element. Returns whether it was handled.
    ///
    /// Returns `false` for stale ids.
    pub fn handle_mouse(&mut self, id: NodeId, event: &MouseEvent, cx: &mut EventCx) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        cx.set_current(id);
        let el = &mut node.element;
        el.widget.handle_mouse(event, &el.geometry, cx)
    }

    /// Deliver a keyboard event to one element. Returns whether it was handled.
    ///
    /// Returns `false` for stale ids.
    pub fn handle_keyboard(
        &mut self,
        id: NodeId,
        event: &KeyboardEvent,
        cx: &mut EventCx,
    ) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        cx.set_current(id);
        node.element.widget.handle_keyboard(event, cx)
    }

    /// Position the children of `id` with a layout function.
    ///
    /// The function receives the parent's size and the children's geometry
    /// in order, and returns the area it used.
    pub fn layout_children(
        &mut self,
        id: NodeId,
        layout: impl FnOnce(Size, &mut [Geometry]) -> Size,
    ) -> Option<Size> {
        let size = self.geometry(id)?.size;
        let children = self.children_of(id).to_vec();
        let mut geometries: Vec<Geometry> = children
            .iter()
            .filter_map(|c| self.geometry(*c).copied())
            .collect();
        let used = layout(size, &mut geometries);
        for (child, g) in children.iter().zip(geometries) {
            if let Some(slot) = self.geometry_mut(*child) {
                *slot = g;
            }
        }
        Some(used)
    }

    /// Move a live element.
    pub fn set_origin(&mut self, id: NodeId, origin: Point) {
        if let Some(g) = self.geometry_mut(id) {
            g.origin = origin;
        }
    }

    /// Resize a live element, clamped to its min/max sizes.
    pub fn set_size(&mut self, id: NodeId, size: Size) {
        if let Some(g) = self.geometry_mut(id) {
            g.size = g.constrain(size);
        }
    }

    /// Translate a live element by `delta`.
    pub fn translate(&mut self, id: NodeId, delta: Vec2) {
        if let Some(g) = self.geometry_mut(id) {
            g.origin += delta;
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|n| n.generation == id.1)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|n| n.generation == id.1)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = Some(parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, DisplayList, PaintOp};
    use crate::widgets::Container;
    use kurbo::Circle;

    #[derive(Debug)]
    struct Dot {
        radius: f64,
    }

    impl Widget for Dot {
        fn draw(&self, painter: &mut dyn Painter, geometry: &Geometry) {
            painter.fill_circle(Circle::new(geometry.origin, self.radius), Color::BLACK);
        }

        fn hit_test(&self, geometry: &Geometry, point: Point) -> bool {
            (point - geometry.origin).hypot2() <= self.radius * self.radius
        }
    }

    fn boxed(x0: f64, y0: f64, x1: f64, y1: f64) -> Element {
        Element::new(Container::new(), Rect::new(x0, y0, x1, y1))
    }

    #[test]
    fn insert_remove_and_generations() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(Some(root), boxed(0.0, 0.0, 10.0, 10.0));
        let b = tree.insert(Some(a), boxed(0.0, 0.0, 5.0, 5.0));
        assert_eq!(tree.children_of(root), &[a]);
        assert_eq!(tree.parent_of(b), Some(a));
        assert_eq!(tree.len(), 3);

        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(b));
        assert!(tree.children_of(root).is_empty());

        // Reused slots get a new generation; old ids stay stale.
        let c = tree.insert(Some(root), boxed(0.0, 0.0, 1.0, 1.0));
        assert!(tree.is_alive(c));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(b));
        assert!(tree.geometry(a).is_none());
        assert_ne!(c.source_id(), a.source_id());
        assert_ne!(c.source_id(), b.source_id());
    }

    #[test]
    fn hits_are_front_to_back_with_accumulated_offsets() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 200.0, 200.0));
        let back = tree.insert(Some(root), boxed(10.0, 10.0, 110.0, 110.0));
        let front = tree.insert(Some(root), boxed(50.0, 50.0, 150.0, 150.0));
        // Nested: local (5,5)-(15,15) inside `back`, i.e. world (15,15)-(25,25).
        let nested = tree.insert(Some(back), boxed(5.0, 5.0, 15.0, 15.0));

        let hits = tree.hits_at(root, Point::new(20.0, 20.0));
        assert_eq!(hits.as_slice(), &[nested, back, root]);

        let hits = tree.hits_at(root, Point::new(60.0, 60.0));
        assert_eq!(hits.as_slice(), &[front, back, root]);

        assert!(tree.hits_at(root, Point::new(500.0, 500.0)).is_empty());
    }

    #[test]
    fn children_outside_parent_bounds_still_hit() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 10.0, 10.0));
        let child = tree.insert(Some(root), boxed(50.0, 0.0, 60.0, 10.0));
        assert_eq!(tree.hits_at(root, Point::new(55.0, 5.0)).as_slice(), &[child]);
    }

    #[test]
    fn flags_control_picking_and_visibility() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let child = tree.insert(Some(root), boxed(0.0, 0.0, 50.0, 50.0));
        let grandchild = tree.insert(Some(child), boxed(0.0, 0.0, 10.0, 10.0));

        tree.set_flags(child, ElementFlags::VISIBLE);
        assert_eq!(
            tree.hits_at(root, Point::new(5.0, 5.0)).as_slice(),
            &[grandchild, root]
        );

        tree.set_flags(child, ElementFlags::empty());
        assert_eq!(tree.hits_at(root, Point::new(5.0, 5.0)).as_slice(), &[root]);
    }

    #[test]
    fn custom_hit_test_is_used() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let dot = tree.insert(
            Some(root),
            Element::new(Dot { radius: 10.0 }, Rect::new(50.0, 50.0, 50.0, 50.0)),
        );
        assert_eq!(
            tree.hits_at(root, Point::new(55.0, 55.0)).as_slice(),
            &[dot, root]
        );
        assert_eq!(tree.hits_at(root, Point::new(59.0, 59.0)).as_slice(), &[root]);
    }

    #[test]
    fn draw_translates_children_and_balances_pops() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let panel = tree.insert(Some(root), boxed(10.0, 20.0, 60.0, 60.0));
        tree.insert(
            Some(panel),
            Element::new(Dot { radius: 3.0 }, Rect::new(1.0, 2.0, 1.0, 2.0)),
        );

        let mut list = DisplayList::new();
        tree.draw(root, &mut list);
        let ops = list.ops();
        assert_eq!(ops.first(), Some(&PaintOp::PushTranslate(Vec2::ZERO)));
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, PaintOp::PushTranslate(_)))
                .count(),
            ops.iter().filter(|op| matches!(op, PaintOp::Pop)).count()
        );
        assert!(ops.contains(&PaintOp::PushTranslate(Vec2::new(10.0, 20.0))));
        assert!(ops.contains(&PaintOp::FillCircle(
            Circle::new(Point::new(1.0, 2.0), 3.0),
            Color::BLACK
        )));
    }

    #[test]
    fn widget_downcast() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(0.0, 0.0, 1.0, 1.0));
        assert!(tree.widget::<Container>(root).is_some());
        assert!(tree.widget::<Dot>(root).is_none());
        tree.widget_mut::<Container>(root).unwrap().fill = Some(Color::WHITE);
        assert_eq!(
            tree.widget::<Container>(root).and_then(|c| c.fill),
            Some(Color::WHITE)
        );
    }

    #[test]
    fn origin_in_root_accumulates() {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, boxed(5.0, 5.0, 100.0, 100.0));
        let a = tree.insert(Some(root), boxed(10.0, 10.0, 50.0, 50.0));
        let b = tree.insert(Some(a), boxed(1.0, 2.0, 5.0, 5.0));
        assert_eq!(tree.origin_in_root(b), Some(Point::new(16.0, 17.0)));
    }
}
