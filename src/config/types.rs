use serde::Deserialize;

use crate::grid::GridSpec;

/// Sprite sheet read when nothing else is configured
pub const DEFAULT_SOURCE: &str = "public/assets/sprites/family-presence.png";
/// Extracted sprite written when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "public/assets/avatars/juzu.png";

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Config file version understood by this build
pub const CONFIG_VERSION: u32 = 1;

/// Spritecut configuration file structure.
///
/// Paths are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpriteCutConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet to read
    pub source: String,
    /// Destination of the extracted sprite
    pub output: String,
    /// Sheet layout and target cell
    pub grid: GridSpec,
    /// Fail if the sheet does not divide evenly into the grid
    pub strict: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SpriteCutConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            source: DEFAULT_SOURCE.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            grid: GridSpec::default(),
            strict: false,
            compress: None,
        }
    }
}
