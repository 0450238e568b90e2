use mandelzoom_core::Classification;

/// Per-pixel classification for a full frame: 1 = in set, 0 = diverged.
///
/// Stored row-major; addressed as `[column][row]` through [`get`](Self::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ResultGrid {
    /// A grid with every cell diverged.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Classification::Diverged.value(); width as usize * height as usize],
        }
    }

    /// Wrap row-major classification data.
    ///
    /// Returns `None` when `data` does not hold exactly `width × height` cells.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Classification value at `(column, row)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, column: u32, row: u32) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[row as usize * self.width as usize + column as usize])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// Number of cells classified as in set.
    pub fn count_in_set(&self) -> usize {
        self.data
            .iter()
            .filter(|&&v| v == Classification::InSet.value())
            .count()
    }
}
