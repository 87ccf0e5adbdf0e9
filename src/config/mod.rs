mod load;
mod types;

pub use load::LoadedConfig;
pub use types::{CONFIG_VERSION, CompressConfig, DEFAULT_OUTPUT, DEFAULT_SOURCE, SpriteCutConfig};
