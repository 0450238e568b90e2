use std::process::ExitCode;

use tracing::{error, info};

use mandelzoom_core::{Aspect, EscapeParams, EscapeTest, SequenceConfig, SequenceSettings};
use mandelzoom_render::{run_sequence, OutputSink};

// ---------------------------------------------------------------------------
// Run parameters
// ---------------------------------------------------------------------------

/// Index into the center-point table: 0 = overview, 1 = spiral.
const POINT_NUMBER: usize = 1;
/// 0 = very low, 1 = low, 2 = medium, 3 = high, 4 = ultra; larger values
/// are used as the iteration count directly.
const QUALITY: u32 = 2;
/// Per-frame zoom multiplier (> 1).
const ZOOM_SPEED: f64 = 1.1;
const FRAMES: u32 = 100;
const WIDTH: u32 = 1920;

/// When set, height is `WIDTH * RATIO`; otherwise `HEIGHT` is used.
const LOCKED: bool = true;
const RATIO: f64 = Aspect::IMAGE_RATIO;
const HEIGHT: u32 = 1080;

const THRESHOLD: f64 = EscapeParams::DEFAULT_THRESHOLD;
const ESCAPE_TEST: EscapeTest = EscapeTest::UpperBound;

/// PNG frames into `OUTPUT_DIR` when set, ASCII art on stdout otherwise.
const IMAGE_MODE: bool = true;
/// Must exist before the run; it is not created.
const OUTPUT_DIR: &str = "sequence";

fn settings() -> SequenceSettings {
    SequenceSettings {
        center_index: POINT_NUMBER,
        quality: QUALITY,
        threshold: THRESHOLD,
        escape_test: ESCAPE_TEST,
        zoom_speed: ZOOM_SPEED,
        frames: FRAMES,
        width: WIDTH,
        aspect: if LOCKED {
            Aspect::Locked { ratio: RATIO }
        } else {
            Aspect::Free { height: HEIGHT }
        },
    }
}

fn sink() -> OutputSink {
    if IMAGE_MODE {
        OutputSink::image(OUTPUT_DIR)
    } else {
        OutputSink::text()
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MandelZoom");

    let config = match SequenceConfig::new(settings()) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string(&config) {
        Ok(json) => info!(config = %json, "Resolved configuration"),
        Err(e) => error!("Could not serialise configuration: {e}"),
    }

    let sink = sink();
    let stdout = std::io::stdout();
    match run_sequence(&config, &sink, &mut stdout.lock()) {
        Ok(summary) if summary.failed_frames.is_empty() => ExitCode::SUCCESS,
        Ok(summary) => {
            error!(
                failed = ?summary.failed_frames,
                "{} of {} frames could not be written",
                summary.failed_frames.len(),
                summary.frames
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Sequence aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_form_a_valid_configuration() {
        let config = SequenceConfig::new(settings()).unwrap();
        assert_eq!(config.frames, FRAMES);
        assert_eq!(config.width, WIDTH);
        assert_eq!(config.escape.iterations, 100);
    }

    #[test]
    fn sink_follows_mode_flag() {
        assert_eq!(sink().frame_path(0).is_some(), IMAGE_MODE);
    }
}
