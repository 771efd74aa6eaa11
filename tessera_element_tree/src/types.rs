// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: identifiers, flags, and geometry.

use kurbo::{Point, Rect, Size};
use tessera_event_state::semantic::SourceId;

/// Identifier for an element in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The id carried by events this element raises.
    ///
    /// Distinct live or stale ids never share a source id.
    pub const fn source_id(self) -> SourceId {
        SourceId(((self.1 as u64) << 32) | self.0 as u64)
    }
}

impl From<NodeId> for SourceId {
    fn from(id: NodeId) -> Self {
        id.source_id()
    }
}

bitflags::bitflags! {
    /// Element flags controlling drawing and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element and its subtree are drawn and can be hit.
        const VISIBLE  = 0b0000_0001;
        /// Element itself participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Default minimum, preferred, and maximum edge length of an element.
pub const DEFAULT_MIN_EXTENT: f64 = 32.0;
/// See [`DEFAULT_MIN_EXTENT`].
pub const DEFAULT_EXTENT: f64 = 32.0;
/// See [`DEFAULT_MIN_EXTENT`].
pub const DEFAULT_MAX_EXTENT: f64 = 256.0;

/// Element geometry, expressed in the parent's coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Top-left corner in parent space. Children are positioned relative to it.
    pub origin: Point,
    /// Current size.
    pub size: Size,
    /// Smallest size layouts should assign.
    pub min_size: Size,
    /// Largest size layouts should assign.
    pub max_size: Size,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            size: Size::new(DEFAULT_EXTENT, DEFAULT_EXTENT),
            min_size: Size::new(DEFAULT_MIN_EXTENT, DEFAULT_MIN_EXTENT),
            max_size: Size::new(DEFAULT_MAX_EXTENT, DEFAULT_MAX_EXTENT),
        }
    }
}

impl Geometry {
    /// Geometry occupying `rect`, with default min/max sizes.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: rect.origin(),
            size: rect.size(),
            ..Self::default()
        }
    }

    /// Bounds in parent space.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Inclusive containment test in parent space (edges count as inside).
    pub fn contains(&self, point: Point) -> bool {
        let b = self.bounds();
        point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1
    }

    /// Clamp `size` into `[min_size, max_size]`.
    pub fn constrain(&self, size: Size) -> Size {
        size.clamp(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toolkit_extents() {
        let g = Geometry::default();
        assert_eq!(g.size, Size::new(32.0, 32.0));
        assert_eq!(g.min_size, Size::new(32.0, 32.0));
        assert_eq!(g.max_size, Size::new(256.0, 256.0));
    }

    #[test]
    fn containment_is_inclusive() {
        let g = Geometry::from_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(g.contains(Point::new(10.0, 10.0)));
        assert!(g.contains(Point::new(20.0, 20.0)));
        assert!(!g.contains(Point::new(20.1, 15.0)));
    }

    #[test]
    fn constrain_clamps_both_axes() {
        let g = Geometry::default();
        assert_eq!(g.constrain(Size::new(1.0, 999.0)), Size::new(32.0, 256.0));
    }

    #[test]
    fn source_ids_differ_by_generation() {
        assert_ne!(NodeId::new(0, 1).source_id(), NodeId::new(0, 2).source_id());
        assert_ne!(NodeId::new(1, 1).source_id(), NodeId::new(0, 1).source_id());
    }
}
