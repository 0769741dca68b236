//! Startup configuration.
//!
//! Resolved once at startup, not per cycle. Loadable from a TOML file;
//! every field has a sensible default so a partial (or absent) config
//! still yields a working renderer.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{DrishtiError, Result};

/// Renderer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame id the output cloud is expressed in.
    pub output_frame: String,
    /// Pixel columns excluded on the left image edge (stereo rigs).
    pub stereo_offset_left: i32,
    /// Pixel columns excluded on the right image edge (stereo rigs).
    pub stereo_offset_right: i32,
    /// Upper bound on a single transform lookup, in seconds.
    pub transform_wait_s: f32,
    /// Minimum sensor-frame depth for a leaf to be projectable, in
    /// meters. Leaves at or behind this plane are rejected before
    /// projection so no division by a non-positive Z ever happens.
    pub min_depth: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_frame: "map".to_string(),
            stereo_offset_left: 0,
            stereo_offset_right: 0,
            transform_wait_s: 5.0,
            min_depth: 1e-3,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.transform_wait_s.is_finite() || self.transform_wait_s < 0.0 {
            return Err(DrishtiError::Config(format!(
                "transform_wait_s must be a non-negative finite number of seconds, got {}",
                self.transform_wait_s
            )));
        }
        Ok(())
    }

    /// Transform lookup wait bound as a [`Duration`].
    pub fn transform_wait(&self) -> Duration {
        Duration::from_secs_f32(self.transform_wait_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.output_frame, "map");
        assert_eq!(config.stereo_offset_left, 0);
        assert_eq!(config.stereo_offset_right, 0);
        assert_eq!(config.transform_wait(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: RenderConfig = toml::from_str(
            r#"
            output_frame = "odom"
            stereo_offset_left = 128
            "#,
        )
        .unwrap();

        assert_eq!(config.output_frame, "odom");
        assert_eq!(config.stereo_offset_left, 128);
        assert_eq!(config.stereo_offset_right, 0);
        assert_eq!(config.transform_wait_s, 5.0);
    }

    #[test]
    fn test_validate_rejects_unusable_wait_bound() {
        for bad in [-1.0f32, f32::NAN, f32::INFINITY] {
            let config = RenderConfig {
                transform_wait_s: bad,
                ..RenderConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(DrishtiError::Config(_))),
                "transform_wait_s = {} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(RenderConfig {
            transform_wait_s: 0.0,
            ..RenderConfig::default()
        }
        .validate()
        .is_ok());
    }
}
