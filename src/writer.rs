//! Parquet bundle writer.
//!
//! A conversion produces a bundle directory:
//!
//! ```text
//! run_01.mgfpeak/
//! ├── spectra.parquet     # one row per spectrum
//! ├── fragments.parquet   # one row per fragment
//! └── metadata.json       # human-readable conversion summary
//! ```
//!
//! Both Parquet footers carry the format version, the conversion timestamp,
//! and the source-file provenance as key-value metadata, so either table is
//! self-describing on its own.

use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::{debug, info};
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;
use parquet::format::KeyValue;

use arrow::record_batch::RecordBatch;

use crate::metadata::RunSummary;
use crate::schema::{KEY_CONVERSION_TIMESTAMP, KEY_FORMAT_VERSION, KEY_SOURCE_FILE};
use crate::table::MgfTables;

/// File name of the spectrum table inside a bundle.
pub const SPECTRA_TABLE_FILE: &str = "spectra.parquet";

/// File name of the fragment table inside a bundle.
pub const FRAGMENTS_TABLE_FILE: &str = "fragments.parquet";

/// File name of the human-readable summary inside a bundle.
pub const METADATA_FILE: &str = "metadata.json";

/// Errors that can occur while writing a bundle.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the Arrow library during array operations.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error from the Parquet library during file writing.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error serializing the metadata sidecar.
    #[error("metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compression options for bundle tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// ZSTD compression (recommended, best compression ratio).
    Zstd(i32),
    /// Snappy compression (faster, slightly larger files).
    Snappy,
    /// No compression (fastest write, largest files).
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        // ZSTD level 3 is a good balance of speed and compression.
        Self::Zstd(3)
    }
}

impl CompressionType {
    /// Maximum compression (slower write, smallest files).
    pub fn max_compression() -> Self {
        Self::Zstd(22)
    }

    /// Balanced compression (recommended default).
    pub fn balanced() -> Self {
        Self::Zstd(3)
    }

    /// Fast compression (faster write, larger files).
    pub fn fast() -> Self {
        Self::Snappy
    }

    fn to_parquet(self) -> Compression {
        match self {
            Self::Zstd(level) => {
                Compression::ZSTD(ZstdLevel::try_new(level).unwrap_or(ZstdLevel::default()))
            }
            Self::Snappy => Compression::SNAPPY,
            Self::Uncompressed => Compression::UNCOMPRESSED,
        }
    }
}

/// Configuration for the bundle writer.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression type to use for both tables.
    pub compression: CompressionType,

    /// Target row group size (rows per group).
    /// Smaller = better random access, larger = better compression.
    pub row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::default(),
            row_group_size: 100_000,
        }
    }
}

impl WriterConfig {
    /// Configuration optimized for maximum compression.
    pub fn max_compression() -> Self {
        Self {
            compression: CompressionType::max_compression(),
            row_group_size: 500_000,
        }
    }

    /// Configuration optimized for write speed.
    pub fn fast_write() -> Self {
        Self {
            compression: CompressionType::fast(),
            row_group_size: 100_000,
        }
    }
}

/// Statistics from a finished bundle write.
#[derive(Debug, Clone, Default)]
pub struct BundleStats {
    /// Rows written to the spectrum table.
    pub spectrum_rows: usize,
    /// Rows written to the fragment table.
    pub fragment_rows: usize,
    /// Total bytes of the two Parquet files.
    pub bytes_written: u64,
}

impl fmt::Display for BundleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} spectra, {} fragments, {} bytes",
            self.spectrum_rows, self.fragment_rows, self.bytes_written
        )
    }
}

/// Writes [`MgfTables`] as a bundle directory.
pub struct BundleWriter {
    root: PathBuf,
    config: WriterConfig,
}

impl BundleWriter {
    /// Create the bundle directory (and any missing parents).
    pub fn new<P: AsRef<Path>>(root: P, config: WriterConfig) -> Result<Self, WriterError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root, config })
    }

    /// Bundle directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write both tables and the metadata sidecar.
    pub fn write(
        &self,
        tables: &MgfTables,
        summary: &RunSummary,
    ) -> Result<BundleStats, WriterError> {
        let footer = self.footer_metadata(summary)?;

        let mut bytes_written =
            self.write_table(SPECTRA_TABLE_FILE, &tables.spectra, footer.clone())?;
        bytes_written += self.write_table(FRAGMENTS_TABLE_FILE, &tables.fragments, footer)?;

        let metadata_path = self.root.join(METADATA_FILE);
        fs::write(&metadata_path, summary.to_json()?)?;
        debug!("wrote {}", metadata_path.display());

        let stats = BundleStats {
            spectrum_rows: tables.spectra.num_rows(),
            fragment_rows: tables.fragments.num_rows(),
            bytes_written,
        };
        info!("bundle {} finalized: {}", self.root.display(), stats);
        Ok(stats)
    }

    fn write_table(
        &self,
        file_name: &str,
        batch: &RecordBatch,
        footer: Vec<KeyValue>,
    ) -> Result<u64, WriterError> {
        let path = self.root.join(file_name);
        let file = File::create(&path)?;

        let props = WriterProperties::builder()
            .set_compression(self.config.compression.to_parquet())
            .set_max_row_group_size(self.config.row_group_size)
            .set_key_value_metadata(Some(footer))
            .build();

        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
        writer.write(batch)?;
        writer.close()?;

        let bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        debug!("wrote {} ({} rows, {} bytes)", path.display(), batch.num_rows(), bytes);
        Ok(bytes)
    }

    fn footer_metadata(&self, summary: &RunSummary) -> Result<Vec<KeyValue>, serde_json::Error> {
        let mut entries = vec![
            KeyValue {
                key: KEY_FORMAT_VERSION.to_string(),
                value: Some(summary.format_version.clone()),
            },
            KeyValue {
                key: KEY_CONVERSION_TIMESTAMP.to_string(),
                value: Some(summary.created.clone()),
            },
        ];
        if let Some(source) = &summary.source_file {
            entries.push(KeyValue {
                key: KEY_SOURCE_FILE.to_string(),
                value: Some(serde_json::to_string(source)?),
            });
        }
        Ok(entries)
    }
}
