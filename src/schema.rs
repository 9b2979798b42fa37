//! # mgfPeak Schema Definition
//!
//! Arrow schemas for the two linked tables produced from an MGF file.
//!
//! ## Design Rationale
//!
//! A parsed MGF file is two row-oriented tables joined by an index range:
//! the spectrum table holds one row per `BEGIN IONS`...`END IONS` block, and
//! the fragment table holds one row per observed peak. Each spectrum row
//! carries `first_entry`/`last_entry`, the 1-based inclusive range of the
//! fragment rows it owns. Ranges are contiguous and non-overlapping in
//! spectrum declaration order, so the fragment table needs no key column of
//! its own and compresses well.
//!
//! ## Spectrum table
//!
//! | Column | Type | Description | CV Term |
//! |--------|------|-------------|---------|
//! | title | Utf8 | `TITLE=` value, empty when absent | MS:1000796 |
//! | retention_time | Float64 (nullable) | `RTINSECONDS=` value | MS:1000016 |
//! | pepmass | Float64 (nullable) | `PEPMASS=` precursor m/z | MS:1000744 |
//! | charge | Utf8 | `CHARGE=` value, stored verbatim | MS:1000041 |
//! | scans | Utf8 | `SCANS=` value, stored verbatim | MS:1000797 |
//! | first_entry | Int64 | 1-based index of the first owned fragment row | — |
//! | last_entry | Int64 | 1-based index of the last owned fragment row | — |
//!
//! ## Fragment table
//!
//! | Column | Type | Description | CV Term |
//! |--------|------|-------------|---------|
//! | mz | Float64 | Mass-to-charge ratio | MS:1000040 |
//! | intensity | Float64 | Signal intensity | MS:1000042 |

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

/// HUPO-PSI MS CV namespace prefix.
pub const MS_CV_PREFIX: &str = "MS";

/// mgfPeak format version - follows semantic versioning.
pub const MGFPEAK_FORMAT_VERSION: &str = "1.0.0";

/// File extension for mgfPeak bundle directories.
pub const MGFPEAK_EXTENSION: &str = ".mgfpeak";

/// Metadata key for the format version in the Parquet footer.
pub const KEY_FORMAT_VERSION: &str = "mgfpeak:format_version";

/// Metadata key for source file provenance in the Parquet footer.
pub const KEY_SOURCE_FILE: &str = "mgfpeak:source_file";

/// Metadata key for the conversion timestamp in the Parquet footer.
pub const KEY_CONVERSION_TIMESTAMP: &str = "mgfpeak:conversion_timestamp";

/// Spectrum table column names as constants for type safety.
pub mod spectrum_columns {
    /// `TITLE=` header value.
    pub const TITLE: &str = "title";
    /// `RTINSECONDS=` header value.
    pub const RETENTION_TIME: &str = "retention_time";
    /// `PEPMASS=` precursor m/z.
    pub const PEPMASS: &str = "pepmass";
    /// `CHARGE=` header value, verbatim.
    pub const CHARGE: &str = "charge";
    /// `SCANS=` header value, verbatim.
    pub const SCANS: &str = "scans";
    /// 1-based index of the first owned fragment row.
    pub const FIRST_ENTRY: &str = "first_entry";
    /// 1-based index of the last owned fragment row.
    pub const LAST_ENTRY: &str = "last_entry";
}

/// Fragment table column names as constants for type safety.
pub mod fragment_columns {
    /// Mass-to-charge ratio.
    pub const MZ: &str = "mz";
    /// Signal intensity.
    pub const INTENSITY: &str = "intensity";
}

/// Creates a Field with CV term metadata annotation.
fn field_with_cv(name: &str, data_type: DataType, nullable: bool, cv_accession: &str) -> Field {
    let mut metadata = std::collections::HashMap::new();
    metadata.insert("cv_accession".to_string(), cv_accession.to_string());
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

/// Creates the Arrow schema for the spectrum table.
///
/// # Example
///
/// ```
/// use mgfpeak::schema::create_spectrum_schema;
///
/// let schema = create_spectrum_schema();
/// assert_eq!(schema.fields().len(), 7);
/// ```
pub fn create_spectrum_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(field_with_cv(
        spectrum_columns::TITLE,
        DataType::Utf8,
        false,
        "MS:1000796", // spectrum title
    ));

    builder.push(field_with_cv(
        spectrum_columns::RETENTION_TIME,
        DataType::Float64,
        true,
        "MS:1000016", // scan start time
    ));

    builder.push(field_with_cv(
        spectrum_columns::PEPMASS,
        DataType::Float64,
        true,
        "MS:1000744", // selected ion m/z
    ));

    builder.push(field_with_cv(
        spectrum_columns::CHARGE,
        DataType::Utf8,
        false,
        "MS:1000041", // charge state
    ));

    builder.push(field_with_cv(
        spectrum_columns::SCANS,
        DataType::Utf8,
        false,
        "MS:1000797", // peak list scans
    ));

    // Join columns carry no CV annotation; they are format bookkeeping.
    builder.push(Field::new(
        spectrum_columns::FIRST_ENTRY,
        DataType::Int64,
        false,
    ));

    builder.push(Field::new(
        spectrum_columns::LAST_ENTRY,
        DataType::Int64,
        false,
    ));

    builder.finish()
}

/// Creates the Arrow schema for the fragment table.
///
/// # Example
///
/// ```
/// use mgfpeak::schema::create_fragment_schema;
///
/// let schema = create_fragment_schema();
/// assert_eq!(schema.fields().len(), 2);
/// ```
pub fn create_fragment_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(field_with_cv(
        fragment_columns::MZ,
        DataType::Float64,
        false,
        "MS:1000040", // m/z
    ));

    builder.push(field_with_cv(
        fragment_columns::INTENSITY,
        DataType::Float64,
        false,
        "MS:1000042", // peak intensity
    ));

    builder.finish()
}

/// Shared reference to the spectrum table schema.
pub fn spectrum_schema_ref() -> Arc<Schema> {
    Arc::new(create_spectrum_schema())
}

/// Shared reference to the fragment table schema.
pub fn fragment_schema_ref() -> Arc<Schema> {
    Arc::new(create_fragment_schema())
}
