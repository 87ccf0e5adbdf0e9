use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::{CONFIG_VERSION, CompressConfig, SpriteCutConfig};
use crate::cli::CompressionLevel;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SpriteCutConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SpriteCutConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if config.version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {} (expected {})",
                config.version,
                path.display(),
                CONFIG_VERSION
            );
        }

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the sheet path relative to the config file directory.
    pub fn resolve_source(&self) -> PathBuf {
        self.config_dir.join(&self.config.source)
    }

    /// Resolve the destination path relative to the config file directory.
    pub fn resolve_output(&self) -> PathBuf {
        self.config_dir.join(&self.config.output)
    }

    /// Interpret the `compress` entry, rejecting strings other than "max".
    pub fn compression(&self) -> Result<Option<CompressionLevel>> {
        match &self.config.compress {
            None => Ok(None),
            Some(CompressConfig::Level(n)) if *n <= 6 => Ok(Some(CompressionLevel::Level(*n))),
            Some(CompressConfig::Level(n)) => {
                bail!("compress level must be 0-6 or \"max\" in config file, got {}", n)
            }
            Some(CompressConfig::Max(s)) if s.eq_ignore_ascii_case("max") => {
                Ok(Some(CompressionLevel::Max))
            }
            Some(CompressConfig::Max(s)) => {
                bail!("compress level must be 0-6 or \"max\" in config file, got '{}'", s)
            }
        }
    }
}
