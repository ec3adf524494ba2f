//! CLI entry point for dnspy-themegen.
//!
//! Log output goes to stderr and is filtered by `RUST_LOG` (default `info`).
//! Use `RUST_LOG=warn` to see only the fields that could not be mapped.

mod cli;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dnspy_themegen::{Converter, DestinationTheme, SourceTheme};

use cli::Args;

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let source = SourceTheme::from_file(&args.input)
        .with_context(|| format!("failed to load Rider scheme {}", args.input.display()))?;
    let donor = DestinationTheme::from_file(&args.donor)
        .with_context(|| format!("failed to load donor theme {}", args.donor.display()))?;

    let conversion = Converter::default().convert(&source, donor);

    conversion
        .theme
        .write_to_file(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        output = %args.output.display(),
        mapped = conversion.report.mapped_count(),
        unchanged = conversion.report.unchanged_count(),
        "wrote theme '{}'",
        conversion.theme.menu_name()
    );
    Ok(())
}
