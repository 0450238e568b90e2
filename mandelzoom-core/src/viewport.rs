use serde::Serialize;

use crate::complex::Complex;
use crate::error::CoreError;

/// Real-axis span visible at zoom 1.
pub const BASE_EXTENT_RE: f64 = 3.0;
/// Imaginary-axis span visible at zoom 1.
pub const BASE_EXTENT_IM: f64 = 2.0;

/// The visible region of the complex plane for one frame.
///
/// At zoom 1 the view spans [`BASE_EXTENT_RE`] × [`BASE_EXTENT_IM`]
/// regardless of pixel dimensions, so non-3:2 pixel grids stretch the image.
/// Increasing pixel-x moves right (larger real part); increasing pixel-y
/// moves down (smaller imaginary part).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom));
        }
        Ok(Self {
            center,
            zoom,
            width,
            height,
        })
    }

    /// Complex-plane units between horizontally adjacent pixels.
    #[inline]
    pub fn step_re(&self) -> f64 {
        (BASE_EXTENT_RE / self.width as f64) / self.zoom
    }

    /// Complex-plane units between vertically adjacent pixels.
    #[inline]
    pub fn step_im(&self) -> f64 {
        (BASE_EXTENT_IM / self.height as f64) / self.zoom
    }

    /// The coordinate of pixel `(0, 0)`.
    ///
    /// The half-dimensions are integer halves, so odd sizes put the center
    /// half a pixel right of / below the exact middle.
    pub fn origin(&self) -> Complex {
        let half_w = (self.width / 2) as f64;
        let half_h = (self.height / 2) as f64;
        Complex::new(
            self.center.re - half_w * self.step_re(),
            -(self.center.im - half_h * self.step_im()),
        )
    }

    /// Map pixel `(px, py)` to its sample point on the complex plane.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        let origin = self.origin();
        Complex::new(
            origin.re + self.step_re() * px as f64,
            origin.im - self.step_im() * py as f64,
        )
    }

    /// Number of pixels in the view.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Sample coordinates for every pixel of a viewport.
///
/// Stored row-major in one flat buffer; addressed as `[column][row]`
/// through [`get`](Self::get).
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    width: u32,
    height: u32,
    points: Vec<Complex>,
}

impl CoordinateGrid {
    /// Compute the sample point of every pixel.
    pub fn build(viewport: &Viewport) -> Self {
        let origin = viewport.origin();
        let step_re = viewport.step_re();
        let step_im = viewport.step_im();

        let mut points = Vec::with_capacity(viewport.pixel_count());
        for row in 0..viewport.height {
            let im = origin.im - step_im * row as f64;
            for column in 0..viewport.width {
                points.push(Complex::new(origin.re + step_re * column as f64, im));
            }
        }

        Self {
            width: viewport.width,
            height: viewport.height,
            points,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample point at `(column, row)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, column: u32, row: u32) -> Option<Complex> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.points[row as usize * self.width as usize + column as usize])
    }

    /// The points of one row, left to right.
    pub fn row(&self, row: u32) -> Option<&[Complex]> {
        if row >= self.height {
            return None;
        }
        let start = row as usize * self.width as usize;
        Some(&self.points[start..start + self.width as usize])
    }

    /// All points in row-major order.
    pub fn points(&self) -> &[Complex] {
        &self.points
    }
}
