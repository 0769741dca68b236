//! Camera model: pinhole intrinsics, sensor cone, and the calibration buffer.

mod buffer;
mod cone;
mod intrinsics;

pub use buffer::{Calibration, CalibrationBuffer};
pub use cone::SensorCone;
pub use intrinsics::CameraIntrinsics;
