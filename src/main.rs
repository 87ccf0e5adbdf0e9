use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use spritecut::cli::{CliArgs, CompressionLevel};
use spritecut::config::{DEFAULT_OUTPUT, DEFAULT_SOURCE, LoadedConfig};
use spritecut::grid::GridSpec;
use spritecut::{Extraction, SpriteExtractor};

/// Prints exactly one line to stdout; diagnostics go to stderr via the logger.
#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(&cli) {
        Ok(extraction) => {
            println!("Saved sprite to {}", extraction.destination.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> Result<Extraction> {
    debug!("spritecut v{}", env!("CARGO_PKG_VERSION"));

    let merged = merge_config_with_args(cli)?;
    debug!(
        "Source {}, output {}, grid {:?}, strict {}, compress {:?}",
        merged.source.display(),
        merged.output.display(),
        merged.grid,
        merged.strict,
        merged.compress
    );

    SpriteExtractor::new(merged.source, merged.output)
        .grid(merged.grid)
        .strict(merged.strict)
        .compress(merged.compress)
        .extract()
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    source: PathBuf,
    output: PathBuf,
    grid: GridSpec,
    strict: bool,
    compress: Option<CompressionLevel>,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Paths: CLI > config > default
    let source = args.source.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_source)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))
    });

    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    });

    // Grid: each field individually, CLI > config > default
    let base = loaded_config
        .as_ref()
        .map(|lc| lc.config.grid)
        .unwrap_or_default();
    let grid = GridSpec::new(
        args.columns.unwrap_or(base.columns),
        args.rows.unwrap_or(base.rows),
        args.column.unwrap_or(base.column),
        args.row.unwrap_or(base.row),
    );

    // Strict flag: CLI presence sets it, otherwise use config
    let strict = args.strict || loaded_config.as_ref().is_some_and(|lc| lc.config.strict);

    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.compression()?
    } else {
        None
    };

    Ok(MergedConfig {
        source,
        output,
        grid,
        strict,
        compress,
    })
}
