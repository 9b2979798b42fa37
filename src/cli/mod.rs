use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod info;

/// mgfPeak - MGF to Linked Parquet Tables Converter
#[derive(Parser)]
#[command(name = "mgfpeak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an MGF file to an mgfPeak bundle
    Convert {
        /// Input MGF file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output bundle path (defaults to <stem>.mgfpeak next to the input)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Compression level for ZSTD (1-22, default: 3)
        #[arg(short = 'c', long)]
        compression_level: Option<i32>,

        /// Row group size (rows per Parquet row group)
        #[arg(short = 'r', long)]
        row_group_size: Option<usize>,

        /// Number of spectra between progress reports
        #[arg(long)]
        progress_interval: Option<usize>,

        /// Disable progress reporting
        #[arg(long)]
        no_progress: bool,
    },

    /// Display information about a bundle or a single Parquet table
    Info {
        /// Bundle directory or Parquet file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Dispatch the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert {
                input,
                output,
                config,
                compression_level,
                row_group_size,
                progress_interval,
                no_progress,
            } => convert::run(convert::ConvertArgs {
                input,
                output,
                config,
                compression_level,
                row_group_size,
                progress_interval,
                no_progress,
            }),
            Commands::Info { file } => info::run(&file),
        }
    }
}
