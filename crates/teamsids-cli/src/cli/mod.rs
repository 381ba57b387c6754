//! CLI for extracting group/channel ID pairs from Teams channel links.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use teamsids_core::config::{self, ExtractConfig};
use teamsids_core::extract;
use teamsids_core::format::OutputFormat;

/// Extract channel ID and group ID from Microsoft Teams URLs.
#[derive(Debug, Parser)]
#[command(name = "teamsids", version)]
#[command(
    about = "Extract channel ID and group ID from Microsoft Teams URLs",
    long_about = None
)]
pub struct Cli {
    /// Path to the file containing URLs, one per line; `#` lines are skipped
    /// [default: channels.txt].
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format [default: pair].
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputArg>,
}

/// Accepted `--output` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Comma-separated list of `group ID;channel ID` pairs.
    #[value(alias = "glean")]
    Pair,
    /// Comma-separated list of channel IDs.
    Channels,
    /// Comma-separated list of group IDs.
    Groups,
    /// JSON array of objects with group IDs and channel IDs.
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Pair => OutputFormat::Pair,
            OutputArg::Channels => OutputFormat::Channels,
            OutputArg::Groups => OutputFormat::Groups,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Flags override config; config overrides built-in defaults.
    pub fn resolve(&self, cfg: &ExtractConfig) -> (PathBuf, OutputFormat) {
        let file = self.file.clone().unwrap_or_else(|| cfg.file.clone());
        let output = self.output.map(OutputFormat::from).unwrap_or(cfg.output);
        (file, output)
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let (file, output) = cli.resolve(&cfg);
        let rendered = extract::extract_file(&file, output)?;
        println!("{}", rendered);
        Ok(())
    }
}
