pub mod buffer;
pub mod error;
pub mod export;
pub mod renderer;
pub mod result_grid;
pub mod sequence;
pub mod sink;
pub mod timing;

pub use buffer::{RenderBuffer, DIVERGED_COLOR, IN_SET_COLOR};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use renderer::{render, RenderResult};
pub use result_grid::ResultGrid;
pub use sequence::{run_sequence, SequenceSummary};
pub use sink::{text_lines, write_text, OutputSink, SinkOutput, HIGH_GLYPH, LOW_GLYPH};
pub use timing::format_duration;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
