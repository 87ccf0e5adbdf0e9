use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "spritecut")]
#[command(
    version,
    about = "Extract one cell from a fixed-grid sprite sheet",
    long_about = "Extract one cell from a fixed-grid sprite sheet.\n\n\
                  With no arguments, crops column 2 of row 0 from a 4x2 sheet \
                  using the built-in source and output paths."
)]
pub struct CliArgs {
    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sprite sheet to read
    #[arg(short, long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Where to write the extracted sprite; the extension picks the format
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of grid columns in the sheet [default: 4]
    #[arg(long, value_name = "N")]
    pub columns: Option<u32>,

    /// Number of grid rows in the sheet [default: 2]
    #[arg(long, value_name = "N")]
    pub rows: Option<u32>,

    /// 0-based column of the cell to extract [default: 2]
    #[arg(long, value_name = "INDEX")]
    pub column: Option<u32>,

    /// 0-based row of the cell to extract [default: 0]
    #[arg(long, value_name = "INDEX")]
    pub row: Option<u32>,

    /// Fail if the sheet does not divide evenly into the grid
    #[arg(long)]
    pub strict: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Log progress to stderr (only the result line is printed otherwise)
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}
