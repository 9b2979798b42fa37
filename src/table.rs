//! Result assembly: columnar accumulators into linked Arrow record batches.
//!
//! The parser is agnostic of the tabular representation; this module is the
//! collaborator that materializes its raw column sets as two
//! [`RecordBatch`]es joined by the `first_entry`/`last_entry` ranges.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::mgf::{FragmentColumns, ParsedMgf, SpectrumColumns};
use crate::schema::{fragment_schema_ref, spectrum_schema_ref};

/// The two linked tables produced from one parse pass.
#[derive(Debug, Clone)]
pub struct MgfTables {
    /// One row per spectrum; see [`crate::schema::create_spectrum_schema`].
    pub spectra: RecordBatch,
    /// One row per fragment; see [`crate::schema::create_fragment_schema`].
    pub fragments: RecordBatch,
}

/// Materialize a parse result as two linked record batches.
///
/// # Example
///
/// ```
/// use mgfpeak::mgf::MgfParser;
/// use mgfpeak::table::assemble;
///
/// let input = b"BEGIN IONS\nTITLE=A\n100.1 5.0\nEND IONS\n";
/// let parsed = MgfParser::new().parse(&input[..], None)?;
/// let tables = assemble(parsed)?;
///
/// assert_eq!(tables.spectra.num_rows(), 1);
/// assert_eq!(tables.fragments.num_rows(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn assemble(parsed: ParsedMgf) -> Result<MgfTables, ArrowError> {
    Ok(MgfTables {
        spectra: spectrum_batch(parsed.spectra)?,
        fragments: fragment_batch(parsed.fragments)?,
    })
}

/// Build the spectrum table from accumulated spectrum columns.
pub fn spectrum_batch(columns: SpectrumColumns) -> Result<RecordBatch, ArrowError> {
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(columns.title)),
        Arc::new(Float64Array::from(columns.retention_time)),
        Arc::new(Float64Array::from(columns.pepmass)),
        Arc::new(StringArray::from_iter_values(columns.charge)),
        Arc::new(StringArray::from_iter_values(columns.scans)),
        Arc::new(Int64Array::from(columns.first_entry)),
        Arc::new(Int64Array::from(columns.last_entry)),
    ];
    RecordBatch::try_new(spectrum_schema_ref(), arrays)
}

/// Build the fragment table from accumulated fragment columns.
pub fn fragment_batch(columns: FragmentColumns) -> Result<RecordBatch, ArrowError> {
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from(columns.mz)),
        Arc::new(Float64Array::from(columns.intensity)),
    ];
    RecordBatch::try_new(fragment_schema_ref(), arrays)
}

#[cfg(test)]
mod tests {
    use arrow::array::{Array, AsArray};
    use arrow::datatypes::{Float64Type, Int64Type};

    use super::*;
    use crate::mgf::MgfParser;
    use crate::schema::spectrum_columns;

    fn tables(input: &str) -> MgfTables {
        let parsed = MgfParser::new().parse(input.as_bytes(), None).unwrap();
        assemble(parsed).unwrap()
    }

    #[test]
    fn test_assembles_linked_batches() {
        let tables = tables(
            "BEGIN IONS\nTITLE=A\nPEPMASS=500.25\n100.1 5.0\n200.2 3.0\nEND IONS\n\
             BEGIN IONS\n300.3 1.0\nEND IONS\n",
        );

        assert_eq!(tables.spectra.num_rows(), 2);
        assert_eq!(tables.fragments.num_rows(), 3);

        let first = tables
            .spectra
            .column_by_name(spectrum_columns::FIRST_ENTRY)
            .unwrap()
            .as_primitive::<Int64Type>();
        let last = tables
            .spectra
            .column_by_name(spectrum_columns::LAST_ENTRY)
            .unwrap()
            .as_primitive::<Int64Type>();
        assert_eq!(first.values().to_vec(), vec![1, 3]);
        assert_eq!(last.values().to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_missing_numeric_fields_become_nulls() {
        let tables = tables("BEGIN IONS\nTITLE=A\nEND IONS\n");

        let rt = tables
            .spectra
            .column_by_name(spectrum_columns::RETENTION_TIME)
            .unwrap()
            .as_primitive::<Float64Type>();
        assert!(rt.is_null(0));

        let pepmass = tables
            .spectra
            .column_by_name(spectrum_columns::PEPMASS)
            .unwrap()
            .as_primitive::<Float64Type>();
        assert!(pepmass.is_null(0));
    }

    #[test]
    fn test_empty_parse_assembles_empty_batches() {
        let tables = tables("");

        assert_eq!(tables.spectra.num_rows(), 0);
        assert_eq!(tables.fragments.num_rows(), 0);
    }
}
