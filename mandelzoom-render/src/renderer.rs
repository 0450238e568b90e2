use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::debug;

use mandelzoom_core::{Complex, CoordinateGrid, EscapeParams, FrameConfig};

use crate::result_grid::ResultGrid;

/// The result of rendering one frame.
///
/// Holds the classification grid only; turning it into pixels or text is
/// the output sink's job.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub frame_index: u32,
    pub grid: ResultGrid,
    pub elapsed: Duration,
    pub in_set: usize,
}

/// Classify one row of sample points into `out`.
#[inline]
fn classify_row(escape: &EscapeParams, points: &[Complex], out: &mut [u8]) {
    for (cell, &c) in out.iter_mut().zip(points) {
        *cell = escape.classify(c).value();
    }
}

/// Render a full frame.
///
/// Builds the frame's coordinate grid, then classifies rows in parallel on
/// the rayon pool. Every cell is written by exactly one task, so the output
/// is identical to a sequential pass.
pub fn render(frame: &FrameConfig) -> RenderResult {
    let start = Instant::now();
    let viewport = &frame.viewport;
    let width = viewport.width as usize;

    let coords = CoordinateGrid::build(viewport);
    let mut data = vec![0u8; coords.points().len()];

    data.par_chunks_mut(width)
        .zip(coords.points().par_chunks(width))
        .for_each(|(out, points)| classify_row(&frame.escape, points, out));

    let grid = ResultGrid {
        width: viewport.width,
        height: viewport.height,
        data,
    };
    let in_set = grid.count_in_set();
    let elapsed = start.elapsed();
    debug!(
        frame = frame.index,
        zoom = frame.zoom(),
        width = viewport.width,
        height = viewport.height,
        in_set,
        elapsed_ms = elapsed.as_millis(),
        "Frame rendered"
    );

    RenderResult {
        frame_index: frame.index,
        grid,
        elapsed,
        in_set,
    }
}
