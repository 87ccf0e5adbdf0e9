pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod grid;
pub mod output;
pub mod sprite;

pub use cli::{CliArgs, CompressionLevel};
pub use error::SpriteCutError;
pub use extract::{Extraction, SpriteExtractor};
pub use grid::{CropRect, GridSpec, PixelRect};
