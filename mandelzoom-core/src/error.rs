use thiserror::Error;

/// Configuration errors detected before any frame is computed.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid iteration count: {0} (must be >= 1)")]
    InvalidIterations(u32),

    #[error("invalid divergence threshold: {0} (must be positive and finite)")]
    InvalidThreshold(f64),

    #[error("invalid dimensions: {width}×{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid aspect ratio: {0} (must be positive and finite)")]
    InvalidAspectRatio(f64),

    #[error("invalid zoom speed: {0} (must be finite and > 1)")]
    InvalidZoomSpeed(f64),

    #[error("invalid zoom factor: {0} (must be positive and finite)")]
    InvalidZoom(f64),

    #[error("frame count must be >= 1")]
    NoFrames,

    #[error("unknown center point index {index} (table has {available} entries)")]
    UnknownCenterPoint { index: usize, available: usize },
}
