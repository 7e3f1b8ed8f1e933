//! `license-guess` — identify the license of one or more projects.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load policy config ([`config::load_config`]).
//! 3. Classify each path, or standard input ([`scan`]).
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` (clean) or `1` (at least one [`models::PolicyVerdict::Error`]).

mod cli;
mod config;
mod models;
mod report;
mod scan;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use models::ScanResult;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_root = cli
        .paths
        .first()
        .map(|p| if p.is_dir() { p.as_path() } else { p.parent().unwrap_or(Path::new(".")) })
        .unwrap_or(Path::new("."));
    let config = load_config(config_root, cli.config.as_deref())?;

    let results = if cli.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading license text from stdin")?;
        vec![scan::scan_text(&config, "-", text)]
    } else {
        scan_all(&config, &cli)?
    };

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&results, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", report::json::render(&results)?);
        }
    }

    if scan::has_errors(&results) {
        std::process::exit(1);
    }

    Ok(())
}

fn scan_all(config: &config::Config, cli: &Cli) -> Result<Vec<ScanResult>> {
    let pb = if !cli.quiet && cli.paths.len() > 1 {
        let pb = ProgressBar::new(cli.paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::with_capacity(cli.paths.len());
    for path in &cli.paths {
        if let Some(pb) = &pb {
            pb.set_message(path.display().to_string());
        }
        results.push(scan::scan_path(config, path));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(results)
}
