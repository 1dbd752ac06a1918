use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use test_discovery::cli;
use test_discovery::discovery::Discoverer;
use test_discovery::logging::{self, Verbosity};
use test_discovery::output::{self, CiOutputs, OutputFormatter};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.to_config();
    tracing::info!(
        "Discovering tests under {} (max depth {})",
        config.root.display(),
        config.max_depth
    );

    let result = Discoverer::default()
        .discover(&config)
        .context("Test discovery failed")?;
    output::log_diagnostics(&result.diagnostics);

    let rendered = OutputFormatter::format(&result, args.format)?;
    match &args.output_file {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Cannot write output file: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    if args.ci_output {
        if let Some(path) = CiOutputs::from_result(&result).emit_from_env()? {
            tracing::info!("Wrote CI outputs to {}", path.display());
        }
    }

    Ok(())
}
