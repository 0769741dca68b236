//! Double-buffered store for asynchronously arriving camera calibration.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::CameraIntrinsics;

/// Camera intrinsics together with the sensor frame they apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Pinhole intrinsics
    pub intrinsics: CameraIntrinsics,
    /// Frame id of the camera sensor
    pub frame_id: String,
}

/// Shared calibration store between the background listener and the
/// compute cycle.
///
/// Writers overwrite the live value under the lock (last-write-wins);
/// a compute cycle copies it out once at cycle start and then works
/// lock-free on its private snapshot for the remainder of the cycle.
/// The snapshot is always complete and consistent at the instant it was
/// taken, but may be stale relative to a write landing a moment later;
/// staleness is accepted in exchange for never blocking either side.
#[derive(Debug, Default)]
pub struct CalibrationBuffer {
    live: Mutex<Option<Calibration>>,
}

impl CalibrationBuffer {
    /// Create an uninitialized buffer.
    pub fn new() -> Self {
        Self {
            live: Mutex::new(None),
        }
    }

    /// Overwrite the live calibration and mark the buffer initialized.
    pub fn update(&self, calibration: Calibration) {
        *self.live.lock() = Some(calibration);
    }

    /// Copy the live calibration out under a short critical section.
    ///
    /// Returns `None` if no calibration was ever received; callers treat
    /// that as a degraded-but-valid state (every leaf invisible), not an
    /// error.
    pub fn snapshot(&self) -> Option<Calibration> {
        self.live.lock().clone()
    }

    /// Whether a calibration has ever been received.
    pub fn is_initialized(&self) -> bool {
        self.live.lock().is_some()
    }
}
