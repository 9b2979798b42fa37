use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mgfpeak::metadata::{RunSummary, SourceFileInfo};
use mgfpeak::mgf::MgfParser;
use mgfpeak::table::assemble;
use mgfpeak::writer::{BundleWriter, CompressionType, WriterConfig};

use super::config::Config;

/// Arguments for the convert command.
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub compression_level: Option<i32>,
    pub row_group_size: Option<usize>,
    pub progress_interval: Option<usize>,
    pub no_progress: bool,
}

/// Convert an MGF file to an mgfPeak bundle.
pub fn run(args: ConvertArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    // Resolve settings: explicit flags win over the config file, the config
    // file wins over built-in defaults.
    let file_config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let compression_level = args
        .compression_level
        .or(file_config.conversion.compression_level)
        .unwrap_or(3);
    let row_group_size = args
        .row_group_size
        .or(file_config.conversion.row_group_size)
        .unwrap_or(100_000);
    let progress_interval = args
        .progress_interval
        .or(file_config.conversion.progress_interval)
        .unwrap_or(1000);

    // Default output: <stem>.mgfpeak next to the input
    let output = args.output.unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        args.input.with_file_name(format!("{}.mgfpeak", stem))
    });

    info!("mgfPeak Converter - MGF to linked tables");
    info!("========================================");
    info!("Input:  {}", args.input.display());
    info!("Output: {}", output.display());
    info!("Compression level: {}", compression_level);
    info!("Row group size: {}", row_group_size);

    let mut parser = MgfParser::new().with_progress_interval(progress_interval);
    if !args.no_progress {
        parser = parser.with_progress(|fraction| {
            info!("Progress: {:.1}%", fraction * 100.0);
        });
    }

    info!("Starting conversion...");
    let parsed = parser
        .parse_file(&args.input)
        .context("MGF parse failed")?;

    let summary = RunSummary::new(parsed.spectra.len(), parsed.fragments.len())
        .with_source_file(SourceFileInfo::from_path(&args.input));

    let tables = assemble(parsed).context("Failed to assemble tables")?;

    let writer_config = WriterConfig {
        compression: CompressionType::Zstd(compression_level),
        row_group_size,
    };
    let writer = BundleWriter::new(&output, writer_config)
        .with_context(|| format!("Failed to create bundle at {}", output.display()))?;
    let stats = writer
        .write(&tables, &summary)
        .context("Failed to write bundle")?;

    info!("Conversion complete!");
    info!("  Spectra converted: {}", stats.spectrum_rows);
    info!("  Total fragments: {}", stats.fragment_rows);
    info!(
        "  Output size: {} bytes ({:.2} MB)",
        stats.bytes_written,
        stats.bytes_written as f64 / 1024.0 / 1024.0
    );

    #[cfg(feature = "colorized_output")]
    println!(
        "{} {}",
        console::style("✓").green().bold(),
        console::style(format!(
            "Wrote {} ({} spectra, {} fragments)",
            output.display(),
            stats.spectrum_rows,
            stats.fragment_rows
        ))
        .bold()
    );

    #[cfg(not(feature = "colorized_output"))]
    println!(
        "Wrote {} ({} spectra, {} fragments)",
        output.display(),
        stats.spectrum_rows,
        stats.fragment_rows
    );

    println!("\nTables can be read with any Parquet-compatible tool:");
    println!(
        "  - Python: pyarrow.parquet.read_table('{}/spectra.parquet').to_pandas()",
        output.display()
    );
    println!(
        "  - DuckDB: SELECT * FROM read_parquet('{}/fragments.parquet')",
        output.display()
    );

    Ok(())
}
