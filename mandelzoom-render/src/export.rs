//! PNG export with embedded frame metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use mandelzoom_core::FrameConfig;

use crate::buffer::RenderBuffer;
use crate::error::RenderError;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone)]
pub struct ExportMetadata {
    pub frame_index: u32,
    pub center_re: f64,
    pub center_im: f64,
    pub zoom: f64,
    pub iterations: u32,
    pub threshold: f64,
    pub escape_test: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    pub fn for_frame(frame: &FrameConfig) -> Self {
        Self {
            frame_index: frame.index,
            center_re: frame.viewport.center.re,
            center_im: frame.viewport.center.im,
            zoom: frame.zoom(),
            iterations: frame.escape.iterations,
            threshold: frame.escape.threshold,
            escape_test: frame.escape.test.label(),
            width: frame.viewport.width,
            height: frame.viewport.height,
        }
    }
}

/// Write an RGBA buffer as a PNG file with embedded frame metadata.
///
/// Uses the `png` crate directly to inject custom tEXt chunks. The parent
/// directory must already exist.
pub fn export_png(
    buffer: &RenderBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    let file = std::fs::File::create(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let encoding = |source: png::EncodingError| RenderError::Encoding {
        path: path.to_path_buf(),
        source,
    };

    let mut encoder = png::Encoder::new(BufWriter::new(file), buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder
        .add_text_chunk("Software".to_string(), "MandelZoom".to_string())
        .map_err(encoding)?;
    encoder
        .add_text_chunk("Description".to_string(), build_description(metadata))
        .map_err(encoding)?;
    for (key, value) in build_metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value).map_err(encoding)?;
    }

    let mut png_writer = encoder.write_header().map_err(encoding)?;
    png_writer
        .write_image_data(&buffer.pixels)
        .map_err(encoding)?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

fn build_description(meta: &ExportMetadata) -> String {
    format!(
        "Mandelbrot frame {} - Center: {} {}i, Zoom: {}, Iterations: {}",
        meta.frame_index, meta.center_re, meta.center_im, meta.zoom, meta.iterations,
    )
}

fn build_metadata_pairs(meta: &ExportMetadata) -> Vec<(String, String)> {
    vec![
        ("MandelZoom.Frame".into(), meta.frame_index.to_string()),
        ("MandelZoom.CenterRe".into(), meta.center_re.to_string()),
        ("MandelZoom.CenterIm".into(), meta.center_im.to_string()),
        ("MandelZoom.Zoom".into(), meta.zoom.to_string()),
        ("MandelZoom.Iterations".into(), meta.iterations.to_string()),
        ("MandelZoom.Threshold".into(), meta.threshold.to_string()),
        ("MandelZoom.EscapeTest".into(), meta.escape_test.to_string()),
        (
            "MandelZoom.Resolution".into(),
            format!("{}x{}", meta.width, meta.height),
        ),
    ]
}
