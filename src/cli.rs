//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// Convert a photograph into a black-and-white stencil outline for tracing
#[derive(Debug, Parser)]
#[command(name = "stencil-gen", version, about)]
pub struct Cli {
    /// Input photograph (any raster format: JPEG, PNG, BMP, ...)
    pub input: PathBuf,

    /// Output stencil path; format inferred from the file extension
    pub output: PathBuf,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
