mod rect;
mod spec;

pub use rect::{CropRect, PixelRect};
pub use spec::GridSpec;
