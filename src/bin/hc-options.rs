//! hc-options CLI
//!
//! Maintainer-run batch entry point: prune the Highcharts options model and
//! write the surviving records. Failures are logged and degraded, never
//! fatal, so a run always produces its reports.

use std::path::PathBuf;

use clap::Parser;
use hc_options::{run, FilterBank, RunOptions};

#[derive(Parser)]
#[command(name = "hc-options")]
#[command(about = "Prune the Highcharts options JSON model for host property panels")]
#[command(version)]
struct Cli {
    /// Model source: file path or URL (default: the bundled snapshot)
    #[arg(long)]
    source: Option<String>,

    /// Highest "since" version to keep (lexicographic comparison)
    #[arg(long, short = 'm')]
    max_version: String,

    /// Output file for the pruned record list (overwritten if present)
    #[arg(long, short)]
    output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Reports go through the log stream; surface info by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = RunOptions {
        source: cli.source,
        max_version: cli.max_version,
        output: cli.output,
        pretty: cli.pretty,
    };

    run(&options, &FilterBank::curated());
}
