//! Error types for DrishtiView

/// Result type alias
pub type Result<T> = std::result::Result<T, DrishtiError>;

/// DrishtiView error types
#[derive(Debug, thiserror::Error)]
pub enum DrishtiError {
    /// A rigid transform between two frames could not be resolved within
    /// the wait bound. Aborts the current compute cycle; the caller is
    /// expected to retry on the next tick with a fresh timestamp.
    #[error(
        "transform from '{source_frame}' to '{target_frame}' unavailable at {timestamp_us}us: {cause}"
    )]
    TransformUnavailable {
        /// Frame the transform maps into
        target_frame: String,
        /// Frame the transform maps from
        source_frame: String,
        /// Cycle timestamp the lookup was made for (microseconds)
        timestamp_us: u64,
        /// Underlying cause
        cause: String,
    },

    /// Calibration has been received but carries an empty sensor frame id
    #[error("camera frame id has not been set")]
    CameraFrameUnset,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DrishtiError {
    fn from(e: toml::de::Error) -> Self {
        DrishtiError::Config(e.to_string())
    }
}
