//! Pixel-space sensor cone test.

use nalgebra::Vector2;

/// Pixel-space approximation of a camera's usable field of view.
///
/// The check is a little more restrictive than the nominal image
/// rectangle, shrinking it by roughly one pixel on every side to absorb
/// rounding and discretization error at the sensor's edges. The stereo
/// offsets let a stereo rig exclude pixel columns visible to only one
/// camera of the pair; both are zero for a monocular sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorCone {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Columns excluded on the left edge
    pub stereo_offset_left: i32,
    /// Columns excluded on the right edge (non-positive shrinks)
    pub stereo_offset_right: i32,
}

impl SensorCone {
    /// Create a new sensor cone.
    pub fn new(width: u32, height: u32, stereo_offset_left: i32, stereo_offset_right: i32) -> Self {
        Self {
            width,
            height,
            stereo_offset_left,
            stereo_offset_right,
        }
    }

    /// Whether a projected pixel lies inside the usable field of view.
    ///
    /// Stateless predicate over the pixel coordinate; strict inequalities
    /// on all four bounds.
    #[inline]
    pub fn contains(&self, uv: &Vector2<f32>) -> bool {
        uv.x > (self.stereo_offset_left + 1) as f32
            && uv.x < (self.width as i32 + self.stereo_offset_right - 2) as f32
            && uv.y > 1.0
            && uv.y < (self.height as i32 - 2) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_visible() {
        for (w, h) in [(7u32, 7u32), (64, 48), (640, 480), (1920, 1080)] {
            let cone = SensorCone::new(w, h, 0, 0);
            let center = Vector2::new(w as f32 / 2.0, h as f32 / 2.0);
            assert!(cone.contains(&center), "center of {}x{} not visible", w, h);
        }
    }

    #[test]
    fn test_corners_never_visible() {
        let cone = SensorCone::new(640, 480, 0, 0);
        assert!(!cone.contains(&Vector2::new(0.0, 0.0)));
        assert!(!cone.contains(&Vector2::new(639.0, 479.0)));
        assert!(!cone.contains(&Vector2::new(0.0, 479.0)));
        assert!(!cone.contains(&Vector2::new(639.0, 0.0)));
    }

    #[test]
    fn test_one_pixel_shrink_per_side() {
        let cone = SensorCone::new(640, 480, 0, 0);
        // On the shrunken boundary: excluded by the strict inequality.
        assert!(!cone.contains(&Vector2::new(1.0, 240.0)));
        assert!(!cone.contains(&Vector2::new(638.0, 240.0)));
        assert!(!cone.contains(&Vector2::new(320.0, 1.0)));
        assert!(!cone.contains(&Vector2::new(320.0, 478.0)));
        // Just inside.
        assert!(cone.contains(&Vector2::new(1.5, 240.0)));
        assert!(cone.contains(&Vector2::new(637.5, 240.0)));
        assert!(cone.contains(&Vector2::new(320.0, 1.5)));
        assert!(cone.contains(&Vector2::new(320.0, 477.5)));
    }

    #[test]
    fn test_horizontal_symmetry_without_offsets() {
        // With zero stereo offsets the accepted column window (1, w-2) is
        // symmetric under reflection about its center, u -> (w-1) - u.
        let w = 640u32;
        let cone = SensorCone::new(w, 480, 0, 0);
        for u in [0.0f32, 1.0, 1.5, 2.0, 100.0, 319.5, 500.0, 637.5, 638.0, 639.0] {
            let mirrored = (w - 1) as f32 - u;
            assert_eq!(
                cone.contains(&Vector2::new(u, 240.0)),
                cone.contains(&Vector2::new(mirrored, 240.0)),
                "asymmetry at u={}",
                u
            );
        }
    }

    #[test]
    fn test_stereo_offsets_shift_column_window() {
        let cone = SensorCone::new(640, 480, 128, 0);
        // Columns unique to the left camera of the pair are excluded.
        assert!(!cone.contains(&Vector2::new(100.0, 240.0)));
        assert!(!cone.contains(&Vector2::new(129.0, 240.0)));
        assert!(cone.contains(&Vector2::new(130.0, 240.0)));

        // A negative right offset narrows the right edge.
        let cone = SensorCone::new(640, 480, 0, -128);
        assert!(!cone.contains(&Vector2::new(510.0, 240.0)));
        assert!(cone.contains(&Vector2::new(509.0, 240.0)));
    }
}
