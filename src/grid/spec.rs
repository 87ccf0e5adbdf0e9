use anyhow::Result;
use serde::Deserialize;

use super::CropRect;
use crate::error::SpriteCutError;

/// Layout of a sprite sheet and the cell to extract from it.
///
/// Indices are 0-based. The default describes a 4x2 character sheet and
/// selects the third portrait of the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Number of grid columns in the sheet
    pub columns: u32,
    /// Number of grid rows in the sheet
    pub rows: u32,
    /// Column of the target cell
    pub column: u32,
    /// Row of the target cell
    pub row: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 2,
            column: 2,
            row: 0,
        }
    }
}

impl GridSpec {
    pub fn new(columns: u32, rows: u32, column: u32, row: u32) -> Self {
        Self {
            columns,
            rows,
            column,
            row,
        }
    }

    /// Ensure the grid has at least one cell and the target cell is inside it
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(SpriteCutError::InvalidGrid(format!(
                "grid must have at least one column and one row, got {}x{}",
                self.columns, self.rows
            ))
            .into());
        }
        if self.column >= self.columns {
            return Err(SpriteCutError::InvalidGrid(format!(
                "column {} is outside a grid of {} columns",
                self.column, self.columns
            ))
            .into());
        }
        if self.row >= self.rows {
            return Err(SpriteCutError::InvalidGrid(format!(
                "row {} is outside a grid of {} rows",
                self.row, self.rows
            ))
            .into());
        }
        Ok(())
    }

    /// Reject sheets whose dimensions are not whole multiples of the grid
    pub fn check_divisible(&self, width: u32, height: u32) -> Result<()> {
        if width % self.columns != 0 || height % self.rows != 0 {
            return Err(SpriteCutError::UnevenGrid {
                width,
                height,
                columns: self.columns,
                rows: self.rows,
            }
            .into());
        }
        Ok(())
    }

    /// Real-valued bounds of the target cell in a `width` x `height` sheet.
    ///
    /// Cell sizes are not truncated, so the rect stays faithful to the grid
    /// even when the sheet does not divide evenly.
    pub fn cell_rect(&self, width: u32, height: u32) -> CropRect {
        let col_width = f64::from(width) / f64::from(self.columns);
        let row_height = f64::from(height) / f64::from(self.rows);

        CropRect::new(
            f64::from(self.column) * col_width,
            f64::from(self.row) * row_height,
            f64::from(self.column + 1) * col_width,
            f64::from(self.row + 1) * row_height,
        )
    }
}
