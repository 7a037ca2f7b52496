//! CLI for the arxpath resolver.

mod commands;

use anyhow::Result;
use arxpath_core::config;
use clap::Parser;
use std::path::PathBuf;

use commands::run_convert;

/// Resolve arXiv PDF links to GCS bucket paths.
///
/// A run over a file (or several URLs) always completes, reporting bad lines
/// without aborting; a run over a single URL fails loudly.
#[derive(Debug, Parser)]
#[command(name = "arxpath")]
#[command(about = "arxpath: resolve arXiv PDF links to GCS bucket paths", long_about = None)]
pub struct Cli {
    /// arXiv PDF URLs or bare identifiers.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File of newline-delimited URLs to convert.
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write resolved paths to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Metadata snapshot to consult, overriding the configured list.
    #[arg(long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Skip the remote category lookup (local metadata and link slugs only).
    #[arg(long)]
    pub offline: bool,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    run_convert(&cli, &cfg)
}

#[cfg(test)]
mod tests;
