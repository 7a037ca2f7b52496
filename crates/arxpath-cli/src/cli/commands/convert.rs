//! `arxpath [URLS]... [--file F] [--output O]` – the batch conversion driver.

use anyhow::{Context, Result};
use arxpath_core::category::{ArxivApi, RemoteCategory, RemoteDisabled, SnapshotIndex};
use arxpath_core::config::AppConfig;
use arxpath_core::convert::Converter;
use std::fs;

use crate::cli::Cli;

pub fn run_convert(cli: &Cli, cfg: &AppConfig) -> Result<()> {
    let inputs = gather_inputs(cli)?;
    // Only a direct single-URL invocation aborts on a conversion error;
    // anything batch-shaped reports and continues.
    let single = inputs.len() == 1 && cli.file.is_none();

    // An explicit override must be readable; the configured defaults are
    // optional and quietly fall back to an empty index.
    let local = match &cli.metadata {
        Some(path) => SnapshotIndex::load(path)?,
        None => SnapshotIndex::load_first(&cfg.metadata_files),
    };

    let api;
    let disabled;
    let remote: &dyn RemoteCategory = if cli.offline {
        disabled = RemoteDisabled;
        &disabled
    } else {
        api = ArxivApi::new(&cfg.api_endpoint, cfg.api_timeout_secs);
        &api
    };

    let converter = Converter::new(&cfg.bucket, &cfg.default_category, &local, remote);
    let items = converter.convert_batch(inputs.iter().map(String::as_str));

    let mut resolved = Vec::new();
    let mut failures = 0usize;
    for item in &items {
        match &item.result {
            Ok(path) => resolved.push(path.clone()),
            Err(err) => {
                if single {
                    return Err(anyhow::Error::new(err.clone()));
                }
                failures += 1;
                eprintln!("arxpath: skipping {}: {}", item.input, err);
            }
        }
    }

    write_resolved(cli, &resolved)?;
    if failures > 0 {
        eprintln!("arxpath: {failures} of {} inputs failed", items.len());
    }
    Ok(())
}

fn gather_inputs(cli: &Cli) -> Result<Vec<String>> {
    let mut inputs = cli.urls.clone();
    if let Some(path) = &cli.file {
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?;
        inputs.extend(
            data.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if inputs.is_empty() {
        anyhow::bail!("no URLs given (pass URLs directly or use --file)");
    }
    Ok(inputs)
}

fn write_resolved(cli: &Cli, resolved: &[String]) -> Result<()> {
    match &cli.output {
        Some(path) => {
            let mut out = String::new();
            for line in resolved {
                out.push_str(line);
                out.push('\n');
            }
            fs::write(path, out)
                .with_context(|| format!("cannot write output file {}", path.display()))?;
            tracing::info!("wrote {} paths to {}", resolved.len(), path.display());
        }
        None => {
            for line in resolved {
                println!("{line}");
            }
        }
    }
    Ok(())
}
