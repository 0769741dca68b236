//! Read-only traversal interface over an external occupancy structure.
//!
//! The occupancy map itself (typically a sparse voxel octree) is owned
//! and mutated by an external mapping subsystem. This crate only needs
//! to iterate its occupied leaves at a given traversal depth; nothing
//! here ever mutates the structure.

use nalgebra::Point3;

use crate::core::types::ColorRgb;

/// A terminal occupied node of the occupancy structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupiedLeaf {
    /// Leaf center in the map frame, meters
    pub position: Point3<f32>,
    /// Leaf color
    pub color: ColorRgb,
}

impl OccupiedLeaf {
    /// Create a new occupied leaf.
    #[inline]
    pub fn new(position: Point3<f32>, color: ColorRgb) -> Self {
        Self { position, color }
    }
}

/// Traversal interface over occupied leaves.
///
/// `depth` selects the traversal depth of the underlying structure;
/// implementations backed by a flat store may ignore it.
pub trait OccupancySource {
    /// Iterate the occupied leaves at the given traversal depth.
    fn occupied_leaves(&self, depth: u16) -> Box<dyn Iterator<Item = OccupiedLeaf> + '_>;
}
