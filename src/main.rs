//! # mgfPeak Converter
//!
//! A command-line tool for converting MGF peak lists into mgfPeak bundles
//! (linked spectrum/fragment Parquet tables).
//!
//! ## Usage
//!
//! ```bash
//! # Convert an MGF file to a bundle
//! mgfpeak-convert convert input.mgf
//!
//! # Inspect a bundle
//! mgfpeak-convert info input.mgfpeak
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    cli.run()
}
