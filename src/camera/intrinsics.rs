//! Pinhole camera intrinsics and projection.

use nalgebra::{Point3, Vector2};
use serde::{Deserialize, Serialize};

/// Pinhole camera intrinsics.
///
/// Focal lengths and principal point are in pixels; `width`/`height` are
/// the full working resolution the calibration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Focal length in pixels along X
    pub fx: f32,
    /// Focal length in pixels along Y
    pub fy: f32,
    /// Principal point X coordinate in pixels
    pub cx: f32,
    /// Principal point Y coordinate in pixels
    pub cy: f32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl CameraIntrinsics {
    /// Create new intrinsics.
    pub fn new(fx: f32, fy: f32, cx: f32, cy: f32, width: u32, height: u32) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            width,
            height,
        }
    }

    /// Full working resolution (width, height) in pixels.
    #[inline]
    pub fn full_resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Project a sensor-frame point to pixel coordinates.
    ///
    /// Standard pinhole model: perspective division by Z, then scale and
    /// offset by focal length and principal point. Pure function of its
    /// inputs. The caller must reject points with Z at or behind the
    /// camera before projecting; the render pipeline guards depth
    /// positivity upstream.
    #[inline]
    pub fn project(&self, point: &Point3<f32>) -> Vector2<f32> {
        Vector2::new(
            self.fx * point.x / point.z + self.cx,
            self.fy * point.y / point.z + self.cy,
        )
    }
}
