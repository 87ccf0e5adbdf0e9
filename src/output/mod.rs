mod format;

pub use format::{ensure_parent_dir, output_format, save_image};
