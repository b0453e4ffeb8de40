//! stencil-gen - photograph to stencil outline converter
//!
//! CLI entry point

use clap::Parser;
use std::time::Instant;
use stencil_gen::{exit_codes, Cli, StencilGenerator};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Validate input path
    if !cli.input.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input.display());
        std::process::exit(exit_codes::INPUT_NOT_FOUND);
    }

    std::process::exit(match run_convert(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_codes::GENERAL_ERROR
        }
    });
}

fn run_convert(cli: &Cli) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let result = StencilGenerator::generate(&cli.input, &cli.output)?;

    if cli.verbose > 0 {
        println!(
            "Wrote {}: {}x{}, {} edge pixels, {:.2}s",
            cli.output.display(),
            result.width,
            result.height,
            result.edge_pixels,
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
