use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-guess",
    about = "Identify the license of a project from its license file",
    version
)]
pub struct Cli {
    /// Project directories or license files to inspect
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Read license text from standard input instead of scanning paths
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,

    /// Policy config file [default: <first path>/.license-guess/config.toml, fallback ~/.config/license-guess/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show all results (not just warnings/errors)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
