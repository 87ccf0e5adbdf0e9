use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;
use log::{debug, info};

use super::Extraction;
use crate::cli::CompressionLevel;
use crate::error::SpriteCutError;
use crate::grid::{CropRect, GridSpec, PixelRect};
use crate::output::save_image;
use crate::sprite::load_sheet;

/// Configuration for a single sheet-to-sprite extraction
pub struct SpriteExtractor {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub grid: GridSpec,
    pub strict: bool,
    pub compress: Option<CompressionLevel>,
}

impl SpriteExtractor {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            grid: GridSpec::default(),
            strict: false,
            compress: None,
        }
    }

    pub fn grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Load the sheet, crop the target cell and write it to the destination.
    ///
    /// Nothing is written unless every step before the save succeeds. The
    /// source file is only ever read.
    pub fn extract(&self) -> Result<Extraction> {
        self.grid.validate()?;

        if is_same_file(&self.source, &self.destination) {
            return Err(SpriteCutError::OutputIsSource(self.destination.clone()).into());
        }

        let sheet = load_sheet(&self.source)?;
        let (sheet_width, sheet_height) = (sheet.width(), sheet.height());
        info!(
            "Loaded sheet {} ({}x{})",
            self.source.display(),
            sheet_width,
            sheet_height
        );

        if self.strict {
            self.grid.check_divisible(sheet_width, sheet_height)?;
        }

        let (sprite, cell, region) = crop_cell(&sheet, &self.grid)?;
        drop(sheet);

        debug!(
            "Cell ({}, {}) of {}x{} grid: ({:.2}, {:.2}, {:.2}, {:.2}) -> {}x{} at ({}, {})",
            self.grid.column,
            self.grid.row,
            self.grid.columns,
            self.grid.rows,
            cell.left,
            cell.top,
            cell.right,
            cell.bottom,
            region.width,
            region.height,
            region.x,
            region.y
        );

        save_image(&sprite, &self.destination, self.compress)?;
        info!(
            "Wrote {}x{} sprite to {}",
            region.width,
            region.height,
            self.destination.display()
        );

        Ok(Extraction {
            destination: self.destination.clone(),
            sheet_width,
            sheet_height,
            cell,
            region,
        })
    }
}

/// True when both paths resolve to one existing file.
///
/// A destination that does not exist yet cannot be the (existing) source.
fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

/// Crop the grid's target cell out of an in-memory sheet.
///
/// Returns the cropped sprite together with the real-valued cell bounds and
/// the rounded pixel region that was copied.
pub fn crop_cell(
    sheet: &DynamicImage,
    grid: &GridSpec,
) -> Result<(DynamicImage, CropRect, PixelRect)> {
    grid.validate()?;

    let (width, height) = (sheet.width(), sheet.height());
    let cell = grid.cell_rect(width, height);
    let region = cell.to_pixels();

    if region.is_empty() || !region.fits_within(width, height) {
        return Err(SpriteCutError::SheetTooSmall {
            width,
            height,
            columns: grid.columns,
            rows: grid.rows,
            column: grid.column,
            row: grid.row,
        }
        .into());
    }

    let sprite = sheet.crop_imm(region.x, region.y, region.width, region.height);

    Ok((sprite, cell, region))
}
