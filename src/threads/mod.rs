//! Background thread infrastructure.
//!
//! One background thread: the calibration listener, which drains an
//! update channel so calibration arrivals never block or race with
//! compute cycles.

mod calibration_listener;

pub use calibration_listener::{CalibrationListener, CalibrationSender};
