mod builder;
mod types;

pub use builder::{SpriteExtractor, crop_cell};
pub use types::Extraction;
