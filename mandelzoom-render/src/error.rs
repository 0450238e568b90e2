use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from rendering or writing frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    /// Text art or status lines could not be written to the output stream.
    #[error("failed to write to output stream: {0}")]
    Stream(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] mandelzoom_core::CoreError),
}
