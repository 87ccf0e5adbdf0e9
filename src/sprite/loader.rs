use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::SpriteCutError;

/// Decode a sprite sheet from disk.
///
/// The format is guessed from the file contents rather than the extension, so
/// a mislabelled sheet still decodes.
pub fn load_sheet(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(SpriteCutError::InputNotFound(path.to_path_buf()).into());
    }

    let img = ImageReader::open(path)
        .map_err(|e| SpriteCutError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SpriteCutError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpriteCutError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}
