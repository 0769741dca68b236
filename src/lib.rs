//! DrishtiView - Sensor-visibility rendering for sparse occupancy maps
//!
//! Converts a sparse 3D occupancy structure into the colored point set a
//! specific camera could actually have observed, re-expressed in a
//! caller-chosen output frame. Used in perception pipelines where a dense
//! volumetric map must be "rendered" into the subset of points a sensor
//! could have seen, for registration, diagnostics, or comparison against
//! raw sensor data.
//!
//! # Architecture
//!
//! The crate is organized into 5 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   threads/                          │  ← Background listener
//! │              (calibration updates)                  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    render/                          │  ← Per-cycle orchestration
//! │              (visible cloud builder)                │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │              camera/    transform/                  │  ← Projection + frames
//! │   (intrinsics, cone, calibration)  (resolver)       │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     map/                            │  ← Occupancy traversal seam
//! │             (occupied leaf iteration)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │               (points, colors, cloud)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Compute cycle
//!
//! A cycle snapshots the calibration buffer under a short lock, resolves
//! the map→output and map→sensor transforms for the cycle timestamp
//! (skipped entirely when the frames coincide), traverses the occupied
//! leaves of the map, projects each leaf into pixel space, keeps those
//! inside the sensor cone, and finally re-expresses the accumulated cloud
//! in the output frame with a single batch transform.

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Occupancy traversal seam (depends on core)
pub mod map;

// Layer 3: Camera model and frame resolution (depends on core)
pub mod camera;
pub mod transform;

// Layer 4: Per-cycle rendering (depends on all lower layers)
pub mod render;

// Layer 5: Background thread infrastructure
pub mod threads;

// Cross-cutting: configuration and errors
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use camera::{Calibration, CalibrationBuffer, CameraIntrinsics, SensorCone};
pub use config::RenderConfig;
pub use core::types::{CloudPoint, ColorRgb, VisibleCloud};
pub use error::{DrishtiError, Result};
pub use map::{OccupancySource, OccupiedLeaf};
pub use render::{CloudRenderer, CycleParams};
pub use threads::CalibrationListener;
pub use transform::{TransformBuffer, TransformResolver};
