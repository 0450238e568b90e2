//! Run-wide settings and the immutable per-frame configuration derived
//! from them.

use serde::Serialize;
use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;
use crate::escape::{EscapeParams, EscapeTest};
use crate::viewport::Viewport;

/// A named zoom target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedPoint {
    pub name: &'static str,
    pub point: Complex,
}

/// The fixed table of zoom targets selectable by index.
pub const CENTER_POINTS: [NamedPoint; 2] = [
    NamedPoint {
        name: "overview",
        point: Complex { re: -0.75, im: 0.0 },
    },
    NamedPoint {
        name: "spiral",
        point: Complex {
            re: -0.77568377,
            im: 0.13646737,
        },
    },
];

/// Look up a zoom target in [`CENTER_POINTS`].
pub fn center_point(index: usize) -> crate::Result<NamedPoint> {
    CENTER_POINTS
        .get(index)
        .copied()
        .ok_or(CoreError::UnknownCenterPoint {
            index,
            available: CENTER_POINTS.len(),
        })
}

/// Iteration budget for a quality tier.
///
/// Tiers 0–4 map to 20, 50, 100, 500 and 1000 iterations. Any other value
/// is taken as the iteration count itself.
pub fn iterations_for_quality(quality: u32) -> u32 {
    match quality {
        0 => 20,
        1 => 50,
        2 => 100,
        3 => 500,
        4 => 1000,
        custom => custom,
    }
}

/// How the frame height is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Aspect {
    /// `height = trunc(width * ratio)`.
    Locked { ratio: f64 },
    /// Height configured independently of width.
    Free { height: u32 },
}

impl Aspect {
    /// Ratio used for image output; matches the 3 × 2 base extent.
    pub const IMAGE_RATIO: f64 = 2.0 / 3.0;

    pub fn height_for(&self, width: u32) -> crate::Result<u32> {
        match *self {
            Self::Locked { ratio } => {
                if ratio <= 0.0 || !ratio.is_finite() {
                    return Err(CoreError::InvalidAspectRatio(ratio));
                }
                Ok((width as f64 * ratio) as u32)
            }
            Self::Free { height } => Ok(height),
        }
    }
}

/// Raw, unvalidated run parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceSettings {
    /// Index into [`CENTER_POINTS`].
    pub center_index: usize,
    /// Quality tier, see [`iterations_for_quality`].
    pub quality: u32,
    pub threshold: f64,
    pub escape_test: EscapeTest,
    /// Per-frame zoom multiplier, must be > 1.
    pub zoom_speed: f64,
    pub frames: u32,
    pub width: u32,
    pub aspect: Aspect,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            center_index: 1,
            quality: 2,
            threshold: EscapeParams::DEFAULT_THRESHOLD,
            escape_test: EscapeTest::UpperBound,
            zoom_speed: 1.1,
            frames: 100,
            width: 1920,
            aspect: Aspect::Locked {
                ratio: Aspect::IMAGE_RATIO,
            },
        }
    }
}

/// Validated run configuration.
///
/// Every frame's [`FrameConfig`] is a pure function of this value and the
/// frame index, so frames never share mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceConfig {
    pub center: NamedPoint,
    pub quality: u32,
    pub escape: EscapeParams,
    pub zoom_speed: f64,
    pub frames: u32,
    pub width: u32,
    pub height: u32,
}

impl SequenceConfig {
    /// Validate `settings`, failing before any frame is computed.
    pub fn new(settings: SequenceSettings) -> crate::Result<Self> {
        let center = center_point(settings.center_index)?;
        let iterations = iterations_for_quality(settings.quality);
        let escape =
            EscapeParams::new(iterations, settings.threshold)?.with_test(settings.escape_test);

        if !(settings.zoom_speed.is_finite() && settings.zoom_speed > 1.0) {
            return Err(CoreError::InvalidZoomSpeed(settings.zoom_speed));
        }
        if settings.frames == 0 {
            return Err(CoreError::NoFrames);
        }

        let width = settings.width;
        let height = settings.aspect.height_for(width)?;
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }

        let config = Self {
            center,
            quality: settings.quality,
            escape,
            zoom_speed: settings.zoom_speed,
            frames: settings.frames,
            width,
            height,
        };

        // The deepest frame must still have a usable zoom.
        let deepest = config.zoom_at(settings.frames - 1);
        if !deepest.is_finite() {
            return Err(CoreError::InvalidZoom(deepest));
        }

        debug!(
            center = %config.center.point,
            iterations,
            width,
            height,
            frames = config.frames,
            "Sequence configuration validated"
        );
        Ok(config)
    }

    /// Zoom factor of frame `index`: `zoom_speed^index`.
    #[inline]
    pub fn zoom_at(&self, index: u32) -> f64 {
        self.zoom_speed.powf(index as f64)
    }

    /// Derive the configuration of frame `index`.
    pub fn frame(&self, index: u32) -> crate::Result<FrameConfig> {
        let viewport = Viewport::new(
            self.center.point,
            self.zoom_at(index),
            self.width,
            self.height,
        )?;
        Ok(FrameConfig {
            index,
            viewport,
            escape: self.escape,
        })
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameConfig {
    pub index: u32,
    pub viewport: Viewport,
    pub escape: EscapeParams,
}

impl FrameConfig {
    #[inline]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SequenceSettings {
        SequenceSettings {
            frames: 5,
            width: 90,
            ..SequenceSettings::default()
        }
    }

    #[test]
    fn quality_tiers() {
        assert_eq!(iterations_for_quality(0), 20);
        assert_eq!(iterations_for_quality(1), 50);
        assert_eq!(iterations_for_quality(2), 100);
        assert_eq!(iterations_for_quality(3), 500);
        assert_eq!(iterations_for_quality(4), 1000);
        assert_eq!(iterations_for_quality(5), 5);
        assert_eq!(iterations_for_quality(2500), 2500);
    }

    #[test]
    fn center_table() {
        assert_eq!(center_point(0).unwrap().point, Complex::new(-0.75, 0.0));
        assert_eq!(center_point(1).unwrap().name, "spiral");
        assert_eq!(
            center_point(2),
            Err(CoreError::UnknownCenterPoint {
                index: 2,
                available: 2
            })
        );
    }

    #[test]
    fn locked_aspect_truncates() {
        let locked = Aspect::Locked {
            ratio: Aspect::IMAGE_RATIO,
        };
        assert_eq!(locked.height_for(1920).unwrap(), 1280);
        assert_eq!(locked.height_for(100).unwrap(), 66);
        assert_eq!(Aspect::Free { height: 1080 }.height_for(1920).unwrap(), 1080);
        assert!(Aspect::Locked { ratio: 0.0 }.height_for(100).is_err());
    }

    #[test]
    fn zoom_grows_geometrically() {
        let config = SequenceConfig::new(settings()).unwrap();
        let expected = [1.0, 1.1, 1.21, 1.331, 1.4641];
        for (index, want) in expected.iter().enumerate() {
            let frame = config.frame(index as u32).unwrap();
            assert!((frame.zoom() - want).abs() < 1e-12, "frame {index}");
        }
    }

    #[test]
    fn frames_share_everything_but_zoom() {
        let config = SequenceConfig::new(settings()).unwrap();
        let a = config.frame(0).unwrap();
        let b = config.frame(3).unwrap();
        assert_eq!(a.escape, b.escape);
        assert_eq!(a.viewport.center, b.viewport.center);
        assert_eq!((a.viewport.width, a.viewport.height), (90, 60));
        assert_eq!(b.index, 3);
        assert_eq!(config.frame(3).unwrap(), b);
    }

    #[test]
    fn defaults_resolve() {
        let config = SequenceConfig::new(SequenceSettings::default()).unwrap();
        assert_eq!(config.escape.iterations, 100);
        assert_eq!(config.escape.threshold, 100.0);
        assert_eq!((config.width, config.height), (1920, 1280));
        assert_eq!(config.center.name, "spiral");
    }

    #[test]
    fn rejects_invalid_settings() {
        let bad = |s: SequenceSettings| SequenceConfig::new(s).unwrap_err();

        assert_eq!(
            bad(SequenceSettings {
                width: 0,
                ..settings()
            }),
            CoreError::InvalidDimensions {
                width: 0,
                height: 0
            }
        );
        assert_eq!(
            bad(SequenceSettings {
                width: 1,
                ..settings()
            }),
            CoreError::InvalidDimensions {
                width: 1,
                height: 0
            }
        );
        assert_eq!(
            bad(SequenceSettings {
                frames: 0,
                ..settings()
            }),
            CoreError::NoFrames
        );
        assert_eq!(
            bad(SequenceSettings {
                zoom_speed: 1.0,
                ..settings()
            }),
            CoreError::InvalidZoomSpeed(1.0)
        );
        assert_eq!(
            bad(SequenceSettings {
                quality: 5,
                threshold: -1.0,
                ..settings()
            }),
            CoreError::InvalidThreshold(-1.0)
        );
        assert_eq!(
            bad(SequenceSettings {
                center_index: 7,
                ..settings()
            }),
            CoreError::UnknownCenterPoint {
                index: 7,
                available: 2
            }
        );
        assert!(matches!(
            bad(SequenceSettings {
                zoom_speed: 2.0,
                frames: 2000,
                ..settings()
            }),
            CoreError::InvalidZoom(_)
        ));
    }

    #[test]
    fn quality_zero_is_a_tier() {
        let config = SequenceConfig::new(SequenceSettings {
            quality: 0,
            ..settings()
        })
        .unwrap();
        assert_eq!(config.escape.iterations, 20);
    }

    #[test]
    fn serializes_for_logging() {
        let config = SequenceConfig::new(settings()).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["center"]["name"], "spiral");
        assert_eq!(json["escape"]["test"], "UpperBound");
        assert_eq!(json["height"], 60);
    }
}
