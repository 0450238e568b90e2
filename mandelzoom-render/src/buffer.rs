use mandelzoom_core::Classification;

use crate::result_grid::ResultGrid;

/// Opaque black for points in the set.
pub const IN_SET_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Opaque white for diverged points.
pub const DIVERGED_COLOR: [u8; 4] = [255, 255, 255, 255];

/// An RGBA pixel buffer representing a rendered frame.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Two-tone rendering of a classification grid.
    pub fn from_grid(grid: &ResultGrid) -> Self {
        let mut pixels = Vec::with_capacity(grid.data.len() * 4);
        for &value in &grid.data {
            let color = if value == Classification::InSet.value() {
                IN_SET_COLOR
            } else {
                DIVERGED_COLOR
            };
            pixels.extend_from_slice(&color);
        }
        Self {
            width: grid.width,
            height: grid.height,
            pixels,
        }
    }

    /// RGBA value of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }
}
