use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use parquet::file::reader::{FileReader, SerializedFileReader};

use mgfpeak::writer::{FRAGMENTS_TABLE_FILE, METADATA_FILE, SPECTRA_TABLE_FILE};

/// Display information about a bundle directory or a single Parquet table.
pub fn run(file: &Path) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    println!("mgfPeak File Information");
    println!("========================");
    println!("File: {}", file.display());
    println!();

    if file.is_dir() {
        print_table_info(&file.join(SPECTRA_TABLE_FILE), "Spectrum table")?;
        print_table_info(&file.join(FRAGMENTS_TABLE_FILE), "Fragment table")?;

        let metadata_path = file.join(METADATA_FILE);
        if metadata_path.is_file() {
            println!("Summary ({}):", METADATA_FILE);
            let json = std::fs::read_to_string(&metadata_path)?;
            println!("{}", json);
        }
    } else {
        print_table_info(file, "Table")?;
    }

    Ok(())
}

fn print_table_info(path: &Path, label: &str) -> Result<()> {
    let file_handle =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = SerializedFileReader::new(file_handle)
        .with_context(|| format!("Failed to read Parquet file {}", path.display()))?;

    let metadata = reader.metadata();
    let file_metadata = metadata.file_metadata();

    println!("{} ({}):", label, path.display());
    println!("  Row groups: {}", metadata.num_row_groups());
    println!("  Total rows: {}", file_metadata.num_rows());

    if let Some(kv_metadata) = file_metadata.key_value_metadata() {
        println!("  Metadata keys:");
        for kv in kv_metadata {
            let value_preview = kv
                .value
                .as_ref()
                .map(|v| {
                    if v.len() > 100 {
                        format!("{}... ({} bytes)", &v[..100], v.len())
                    } else {
                        v.clone()
                    }
                })
                .unwrap_or_else(|| "<null>".to_string());
            println!("    {}: {}", kv.key, value_preview);
        }
    }

    println!("  Schema:");
    for i in 0..file_metadata.schema_descr().num_columns() {
        let col = file_metadata.schema_descr().column(i);
        println!("    {:3}. {} ({})", i + 1, col.name(), col.physical_type());
    }
    println!();

    Ok(())
}
