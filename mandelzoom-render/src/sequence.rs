use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{error, info};

use mandelzoom_core::SequenceConfig;

use crate::renderer::render;
use crate::sink::{OutputSink, SinkOutput};
use crate::timing::format_duration;

/// Outcome of a full sequence run.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSummary {
    pub frames: u32,
    /// Image files written, in frame order. Empty for text output.
    pub files: Vec<PathBuf>,
    /// Frames whose output could not be written.
    pub failed_frames: Vec<u32>,
    pub elapsed: Duration,
}

/// Render every frame of `config` in order and send each to `sink`.
///
/// Frames are strictly sequential; pixels within a frame are rendered in
/// parallel. A frame whose output cannot be written is logged and skipped,
/// and the run continues. Status lines (and text frames) go to `out`.
pub fn run_sequence<W: Write>(
    config: &SequenceConfig,
    sink: &OutputSink,
    out: &mut W,
) -> crate::Result<SequenceSummary> {
    let start = Instant::now();
    info!(
        frames = config.frames,
        width = config.width,
        height = config.height,
        iterations = config.escape.iterations,
        center = config.center.name,
        "Starting sequence"
    );

    let mut files = Vec::new();
    let mut failed_frames = Vec::new();

    for index in 0..config.frames {
        let frame = config.frame(index)?;
        let result = render(&frame);

        match sink.emit(&frame, &result, out) {
            Ok(SinkOutput::File(path)) => files.push(path),
            Ok(SinkOutput::Text { .. }) => {}
            Err(e) => {
                error!(frame = index, "Failed to write frame: {e}");
                failed_frames.push(index);
            }
        }

        writeln!(
            out,
            "------------------------Frame {index} finished------------------------"
        )?;
        info!(
            frame = index,
            zoom = frame.zoom(),
            in_set = result.in_set,
            render_ms = result.elapsed.as_millis(),
            "Frame finished"
        );
    }

    let elapsed = start.elapsed();
    writeln!(
        out,
        "Calculated {} frame/s. Process took {:.3}s ({})",
        config.frames,
        elapsed.as_secs_f64(),
        format_duration(elapsed)
    )?;
    out.flush()?;

    if !failed_frames.is_empty() {
        error!(failed = failed_frames.len(), "Some frames could not be written");
    }
    info!(
        frames = config.frames,
        written = files.len(),
        elapsed = %format_duration(elapsed),
        "Sequence complete"
    );

    Ok(SequenceSummary {
        frames: config.frames,
        files,
        failed_frames,
        elapsed,
    })
}
