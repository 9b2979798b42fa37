//! Human-readable conversion metadata.
//!
//! Every bundle carries a standalone `metadata.json` so the conversion can
//! be inspected without Parquet tooling. The same source-file payload is
//! embedded in the Parquet footers of both tables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::MGFPEAK_FORMAT_VERSION;

/// Provenance of the source MGF file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFileInfo {
    /// File name without directory components.
    pub name: String,

    /// Full path as given at conversion time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Size in bytes, when it could be probed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl SourceFileInfo {
    /// Create provenance with just a file name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create provenance from a path, probing the file size.
    pub fn from_path(path: &Path) -> Self {
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: Some(path.display().to_string()),
            size_bytes: std::fs::metadata(path).ok().map(|m| m.len()),
        }
    }
}

/// Summary of one conversion, serialized to `metadata.json` in the bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Bundle format version.
    pub format_version: String,

    /// Converter package name.
    pub converter: String,

    /// Converter package version.
    pub converter_version: String,

    /// Conversion timestamp, RFC 3339.
    pub created: String,

    /// Source file provenance, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<SourceFileInfo>,

    /// Rows in the spectrum table.
    pub spectrum_count: usize,

    /// Rows in the fragment table.
    pub fragment_count: usize,
}

impl RunSummary {
    /// Create a summary for a conversion that produced the given row counts.
    pub fn new(spectrum_count: usize, fragment_count: usize) -> Self {
        Self {
            format_version: MGFPEAK_FORMAT_VERSION.to_string(),
            converter: env!("CARGO_PKG_NAME").to_string(),
            converter_version: env!("CARGO_PKG_VERSION").to_string(),
            created: chrono::Utc::now().to_rfc3339(),
            source_file: None,
            spectrum_count,
            fragment_count,
        }
    }

    /// Attach source file provenance.
    pub fn with_source_file(mut self, source_file: SourceFileInfo) -> Self {
        self.source_file = Some(source_file);
        self
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
