mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use onepage_pdf::{Document, PageConfig};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where the summary is written when no `--output` is given.
const DEFAULT_OUTPUT: &str = "output/pdf/app-summary-one-page.pdf";

#[derive(Parser)]
#[command(
    name = "onepage-pdf",
    about = "Generate the one-page application summary PDF",
    version,
    author
)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log each object and offset as it is written
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "onepage_pdf=debug"
    } else {
        "onepage_pdf=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PageConfig::letter();
    let instructions = summary::summary_instructions(&config);
    debug!(lines = instructions.len(), output = %cli.output.display(), "building summary");
    let document = Document::with_instructions(config, instructions);

    let written = document
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{}", written.display());
    Ok(())
}
