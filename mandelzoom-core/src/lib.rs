pub mod complex;
pub mod error;
pub mod escape;
pub mod sequence;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{orbit_end, Classification, EscapeParams, EscapeTest};
pub use sequence::{
    center_point, iterations_for_quality, Aspect, FrameConfig, NamedPoint, SequenceConfig,
    SequenceSettings, CENTER_POINTS,
};
pub use viewport::{CoordinateGrid, Viewport, BASE_EXTENT_IM, BASE_EXTENT_RE};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
