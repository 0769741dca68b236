//! Visible-cloud builder: one compute cycle from occupancy map to cloud.

use std::sync::Arc;

use crate::camera::{CalibrationBuffer, SensorCone};
use crate::config::RenderConfig;
use crate::core::types::{CloudPoint, VisibleCloud};
use crate::error::{DrishtiError, Result};
use crate::map::OccupancySource;
use crate::transform::TransformResolver;

/// Per-cycle parameters supplied by the external map-update tick.
#[derive(Debug, Clone)]
pub struct CycleParams {
    /// Frame the occupancy structure is expressed in.
    pub map_frame: String,
    /// Cycle timestamp in microseconds since epoch.
    pub timestamp_us: u64,
    /// Traversal depth of the occupancy structure.
    pub depth: u16,
}

/// Renders the subset of an occupancy map visible to the camera into a
/// colored point cloud.
///
/// A cycle runs to completion synchronously and is all-or-nothing with
/// respect to frame resolution: either both needed transforms resolve
/// and a cloud is produced, or the cycle aborts with no partial output.
pub struct CloudRenderer {
    config: RenderConfig,
    calibration: Arc<CalibrationBuffer>,
}

impl CloudRenderer {
    /// Create a renderer sharing the given calibration buffer with the
    /// background listener.
    pub fn new(config: RenderConfig, calibration: Arc<CalibrationBuffer>) -> Self {
        Self {
            config,
            calibration,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Run one compute cycle.
    ///
    /// Snapshots the calibration buffer, resolves the transforms needed
    /// this cycle (skipping the lookup entirely when the frames
    /// coincide), traverses the occupied leaves, and accumulates those
    /// whose projection falls inside the sensor cone. Points are
    /// accumulated in the map frame and re-expressed in the output frame
    /// with a single batch transform after traversal, so transform cost
    /// is paid only for points that survived filtering.
    pub fn compute_cloud<M, R>(
        &self,
        map: &M,
        cycle: &CycleParams,
        resolver: &R,
    ) -> Result<VisibleCloud>
    where
        M: OccupancySource + ?Sized,
        R: TransformResolver + ?Sized,
    {
        let transform_output = self.config.output_frame != cycle.map_frame;
        let output_frame = if transform_output {
            self.config.output_frame.clone()
        } else {
            cycle.map_frame.clone()
        };

        // Copy the live calibration under a short lock; the rest of the
        // cycle runs lock-free on the private snapshot.
        let calibration = match self.calibration.snapshot() {
            Some(c) => c,
            None => {
                // A map with no known camera yields an empty cloud, not
                // an error. No transform lookup, no projection; an empty
                // point set needs no transform to be expressed in the
                // output frame.
                log::debug!("no calibration received yet, emitting empty cloud");
                return Ok(VisibleCloud::new(
                    cycle.timestamp_us,
                    output_frame,
                    cycle.map_frame.clone(),
                ));
            }
        };

        if calibration.frame_id.is_empty() {
            log::error!("calibration received without a camera frame id, aborting cycle");
            return Err(DrishtiError::CameraFrameUnset);
        }

        let map_to_output = if transform_output {
            Some(
                resolver
                    .resolve(
                        &self.config.output_frame,
                        &cycle.map_frame,
                        cycle.timestamp_us,
                        self.config.transform_wait(),
                    )
                    .inspect_err(|e| log::error!("cycle aborted: {}", e))?,
            )
        } else {
            None
        };

        let map_to_sensor = if calibration.frame_id != cycle.map_frame {
            Some(
                resolver
                    .resolve(
                        &calibration.frame_id,
                        &cycle.map_frame,
                        cycle.timestamp_us,
                        self.config.transform_wait(),
                    )
                    .inspect_err(|e| log::error!("cycle aborted: {}", e))?,
            )
        } else {
            None
        };

        let cone = SensorCone::new(
            calibration.intrinsics.width,
            calibration.intrinsics.height,
            self.config.stereo_offset_left,
            self.config.stereo_offset_right,
        );

        let mut cloud = VisibleCloud::new(cycle.timestamp_us, output_frame, cycle.map_frame.clone());

        for leaf in map.occupied_leaves(cycle.depth) {
            let sensor_pos = match &map_to_sensor {
                Some(tf) => tf * leaf.position,
                None => leaf.position,
            };

            // Points at or behind the camera (or with a degenerate
            // depth) never reach the projector.
            if !(sensor_pos.z.is_finite() && sensor_pos.z > self.config.min_depth) {
                continue;
            }

            let uv = calibration.intrinsics.project(&sensor_pos);
            if !cone.contains(&uv) {
                continue;
            }

            // Accumulate in the map frame; the output transform is
            // applied once, after traversal, to the survivors only.
            cloud.push(CloudPoint {
                position: leaf.position,
                color: leaf.color,
            });
        }

        if let Some(tf) = &map_to_output {
            cloud.transform_in_place(tf);
        }

        log::debug!(
            "cycle at {}us: {} visible points in '{}'",
            cycle.timestamp_us,
            cloud.len(),
            cloud.frame_id
        );
        Ok(cloud)
    }
}
