//! Point, color, and cloud types.

use nalgebra::{Isometry3, Point3};
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorRgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorRgb {
    /// Create a new color.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single colored cloud point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudPoint {
    /// Position in meters, in the cloud's frame
    pub position: Point3<f32>,
    /// Point color
    pub color: ColorRgb,
}

/// Ordered colored point cloud produced by one compute cycle.
///
/// Created empty at the start of each cycle, owned exclusively by that
/// cycle, and either published or discarded at cycle end. Never retained
/// across cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleCloud {
    /// Accumulated points, in `frame_id`
    pub points: Vec<CloudPoint>,
    /// Cycle timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Frame the points are expressed in
    pub frame_id: String,
    /// Map frame the cycle was computed against
    pub map_frame_id: String,
}

impl VisibleCloud {
    /// Create an empty cloud for a new compute cycle.
    pub fn new(timestamp_us: u64, frame_id: String, map_frame_id: String) -> Self {
        Self {
            points: Vec::new(),
            timestamp_us,
            frame_id,
            map_frame_id,
        }
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, point: CloudPoint) {
        self.points.push(point);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CloudPoint> {
        self.points.iter()
    }

    /// Apply a rigid transform to every accumulated point in one pass.
    ///
    /// Used to re-express a cloud accumulated in the map frame in the
    /// output frame after traversal, so the transform cost is paid only
    /// for points that survived visibility filtering.
    pub fn transform_in_place(&mut self, transform: &Isometry3<f32>) {
        for point in &mut self.points {
            point.position = transform * point.position;
        }
    }
}
