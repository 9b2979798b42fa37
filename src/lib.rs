//! # mgfPeak - MGF Spectra as Linked Tables
//!
//! `mgfpeak` ingests mass-spectrometry spectra stored in the MGF (Mascot
//! Generic Format) text convention and converts them into two related
//! tabular structures: one row per spectrum and one row per observed
//! mass/intensity fragment, linked by index ranges.
//!
//! ## Key Features
//!
//! - **Streaming parser**: a single-pass state machine with O(1) memory per
//!   line; output buffers are pre-sized from the input byte length.
//!
//! - **Linked tables**: the spectrum table carries `first_entry`/`last_entry`
//!   ranges into the fragment table, 1-based and inclusive, contiguous and
//!   non-overlapping in declaration order.
//!
//! - **Fail-fast errors**: a malformed numeric field or data line aborts the
//!   whole parse with its 1-based line number; no spectrum is silently
//!   dropped.
//!
//! - **Arrow/Parquet output**: the tables materialize as Arrow record
//!   batches and write to a bundle directory of two Parquet files plus a
//!   human-readable `metadata.json`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mgfpeak::mgf::MgfParser;
//! use mgfpeak::table::assemble;
//!
//! let input = b"BEGIN IONS\nTITLE=A\nPEPMASS=500.25\n100.1 5.0\n200.2 3.0\nEND IONS\n";
//!
//! let parsed = MgfParser::new().parse(&input[..], None)?;
//! assert_eq!(parsed.spectra.len(), 1);
//! assert_eq!(parsed.fragments.len(), 2);
//!
//! let tables = assemble(parsed)?;
//! assert_eq!(tables.spectra.num_rows(), 1);
//! assert_eq!(tables.fragments.num_rows(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reading the Output
//!
//! Bundles are standard Parquet and can be read with any compatible tool:
//!
//! ```python
//! # Python
//! import pyarrow.parquet as pq
//! spectra = pq.read_table("run.mgfpeak/spectra.parquet").to_pandas()
//! fragments = pq.read_table("run.mgfpeak/fragments.parquet").to_pandas()
//! ```
//!
//! ## Architecture
//!
//! - [`mgf`]: line source, state-machine parser, and error types
//! - [`schema`]: Arrow schema definitions for the two tables
//! - [`table`]: assembly of parse results into record batches
//! - [`metadata`]: conversion summary written alongside the tables
//! - [`writer`]: Parquet bundle writer

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod metadata;
pub mod mgf;
pub mod schema;
pub mod table;
pub mod writer;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::metadata::{RunSummary, SourceFileInfo};
    pub use crate::mgf::{FragmentColumns, MgfError, MgfParser, ParsedMgf, SpectrumColumns};
    pub use crate::schema::{
        create_fragment_schema, create_spectrum_schema, fragment_columns, spectrum_columns,
        MGFPEAK_FORMAT_VERSION,
    };
    pub use crate::table::{assemble, MgfTables};
    pub use crate::writer::{BundleStats, BundleWriter, CompressionType, WriterConfig, WriterError};
}
