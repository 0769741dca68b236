//! Frame resolver trait.

use std::time::Duration;

use nalgebra::Isometry3;

use crate::error::Result;

/// Resolves rigid transforms between named coordinate frames.
///
/// A compute cycle requests at most two transforms per cycle (map→output
/// and map→sensor), and only when the respective frames differ. A
/// resolved transform is valid only for the cycle that resolved it;
/// poses move over time, so transforms are never cached across cycles.
pub trait TransformResolver {
    /// Resolve the transform mapping points from `source_frame` into
    /// `target_frame` at the given timestamp.
    ///
    /// Blocks up to `max_wait` for the transform to become available.
    /// Fails with [`DrishtiError::TransformUnavailable`] carrying both
    /// frame names and the underlying cause.
    ///
    /// [`DrishtiError::TransformUnavailable`]: crate::error::DrishtiError::TransformUnavailable
    fn resolve(
        &self,
        target_frame: &str,
        source_frame: &str,
        timestamp_us: u64,
        max_wait: Duration,
    ) -> Result<Isometry3<f32>>;
}
