use std::path::PathBuf;

use crate::grid::{CropRect, PixelRect};

/// Outcome of a successful extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    /// File the sprite was written to
    pub destination: PathBuf,
    /// Sheet width in pixels
    pub sheet_width: u32,
    /// Sheet height in pixels
    pub sheet_height: u32,
    /// Cell bounds before rounding
    pub cell: CropRect,
    /// Pixels actually copied out of the sheet
    pub region: PixelRect,
}

impl Extraction {
    /// Size of the written sprite
    pub fn dimensions(&self) -> (u32, u32) {
        (self.region.width, self.region.height)
    }
}
