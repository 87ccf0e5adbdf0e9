use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteCutError {
    #[error("Source image does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Output path '{0}' is the source sheet; refusing to overwrite it")]
    OutputIsSource(PathBuf),

    #[error("Unsupported output format for '{0}'")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error(
        "Sheet ({width}x{height}) is too small for a {columns}x{rows} grid: cell ({column}, {row}) is empty"
    )]
    SheetTooSmall {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
        column: u32,
        row: u32,
    },

    #[error("Sheet ({width}x{height}) does not divide evenly into a {columns}x{rows} grid")]
    UnevenGrid {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },
}
