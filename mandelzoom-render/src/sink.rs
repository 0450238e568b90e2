//! Output sinks: where a rendered frame goes.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use mandelzoom_core::{Classification, FrameConfig};

use crate::buffer::RenderBuffer;
use crate::export::{export_png, ExportMetadata};
use crate::renderer::RenderResult;
use crate::result_grid::ResultGrid;

/// Glyph printed for points in the set.
pub const HIGH_GLYPH: char = '#';
/// Glyph printed for diverged points.
pub const LOW_GLYPH: char = ' ';
/// File-name prefix for image frames (`Sequence0.png`, `Sequence1.png`, …).
pub const DEFAULT_FILE_PREFIX: &str = "Sequence";

/// Where rendered frames are sent. Chosen once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// One two-tone PNG per frame at `<dir>/<prefix><index>.png`.
    /// `dir` must already exist.
    Image { dir: PathBuf, prefix: String },
    /// ASCII art, one line per row.
    Text { high: char, low: char },
}

/// What a sink produced for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOutput {
    File(PathBuf),
    Text { lines: usize },
}

impl OutputSink {
    pub fn image(dir: impl Into<PathBuf>) -> Self {
        Self::Image {
            dir: dir.into(),
            prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    pub fn text() -> Self {
        Self::Text {
            high: HIGH_GLYPH,
            low: LOW_GLYPH,
        }
    }

    /// Output path for frame `index`; `None` for text output.
    pub fn frame_path(&self, index: u32) -> Option<PathBuf> {
        match self {
            Self::Image { dir, prefix } => Some(frame_file(dir, prefix, index)),
            Self::Text { .. } => None,
        }
    }

    /// Send one rendered frame to the sink.
    ///
    /// Text frames are written to `out`; image frames go to disk and leave
    /// `out` untouched.
    pub fn emit<W: Write>(
        &self,
        frame: &FrameConfig,
        result: &RenderResult,
        out: &mut W,
    ) -> crate::Result<SinkOutput> {
        match self {
            Self::Image { dir, prefix } => {
                let path = frame_file(dir, prefix, frame.index);
                debug!(frame = frame.index, "Started creating image");
                let buffer = RenderBuffer::from_grid(&result.grid);
                export_png(&buffer, &path, &ExportMetadata::for_frame(frame))?;
                info!(frame = frame.index, path = %path.display(), "Image written");
                Ok(SinkOutput::File(path))
            }
            Self::Text { high, low } => {
                write_text(&result.grid, *high, *low, out)?;
                Ok(SinkOutput::Text {
                    lines: result.grid.height as usize,
                })
            }
        }
    }
}

fn frame_file(dir: &Path, prefix: &str, index: u32) -> PathBuf {
    dir.join(format!("{prefix}{index}.png"))
}

/// Render a grid as text lines, row 0 first.
pub fn text_lines(grid: &ResultGrid, high: char, low: char) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    if v == Classification::InSet.value() {
                        high
                    } else {
                        low
                    }
                })
                .collect()
        })
        .collect()
}

/// Print a grid as ASCII art.
pub fn write_text<W: Write>(
    grid: &ResultGrid,
    high: char,
    low: char,
    out: &mut W,
) -> std::io::Result<()> {
    for line in text_lines(grid, high, low) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelzoom_core::{Complex, EscapeParams, Viewport};
    use std::time::Duration;

    fn frame(index: u32) -> FrameConfig {
        FrameConfig {
            index,
            viewport: Viewport::new(Complex::ZERO, 1.0, 3, 2).unwrap(),
            escape: EscapeParams::new(20, 100.0).unwrap(),
        }
    }

    fn result(index: u32) -> RenderResult {
        let grid = ResultGrid::from_data(3, 2, vec![0, 1, 0, 1, 1, 1]).unwrap();
        RenderResult {
            frame_index: index,
            in_set: grid.count_in_set(),
            grid,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn text_glyphs_per_row() {
        let lines = text_lines(&result(0).grid, '#', '.');
        assert_eq!(lines, vec![".#.".to_string(), "###".to_string()]);
    }

    #[test]
    fn text_sink_prints_rows() {
        let mut out = Vec::new();
        let emitted = OutputSink::text().emit(&frame(0), &result(0), &mut out).unwrap();
        assert_eq!(emitted, SinkOutput::Text { lines: 2 });
        assert_eq!(String::from_utf8(out).unwrap(), " # \n###\n");
    }

    #[test]
    fn image_paths_are_keyed_by_index() {
        let sink = OutputSink::image("sequence");
        assert_eq!(
            sink.frame_path(12),
            Some(PathBuf::from("sequence").join("Sequence12.png"))
        );
        assert_eq!(OutputSink::text().frame_path(0), None);
    }

    #[test]
    fn image_sink_writes_file_and_no_text() {
        let dir = tempfile::tempdir().unwrap();
        let sink = OutputSink::image(dir.path());
        let mut out = Vec::new();

        let emitted = sink.emit(&frame(3), &result(3), &mut out).unwrap();
        let path = dir.path().join("Sequence3.png");
        assert_eq!(emitted, SinkOutput::File(path.clone()));
        assert!(path.is_file());
        assert!(out.is_empty());
    }

    #[test]
    fn image_sink_does_not_create_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = OutputSink::image(dir.path().join("missing"));
        let err = sink.emit(&frame(0), &result(0), &mut Vec::new());
        assert!(err.is_err());
        assert!(!dir.path().join("missing").exists());
    }
}
