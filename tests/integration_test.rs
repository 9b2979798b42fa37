//! Integration tests for mgfPeak
//!
//! These tests verify the full pipeline from MGF text on disk to Parquet
//! tables read back with an independent reader.

use std::fs::File;

use parquet::file::reader::{FileReader, SerializedFileReader};
use tempfile::tempdir;

use mgfpeak::metadata::{RunSummary, SourceFileInfo};
use mgfpeak::mgf::MgfParser;
use mgfpeak::schema::{KEY_FORMAT_VERSION, KEY_SOURCE_FILE, MGFPEAK_FORMAT_VERSION};
use mgfpeak::table::assemble;
use mgfpeak::writer::{
    BundleWriter, WriterConfig, FRAGMENTS_TABLE_FILE, METADATA_FILE, SPECTRA_TABLE_FILE,
};

fn sample_mgf(num_spectra: usize, fragments_per_spectrum: usize) -> String {
    let mut text = String::new();
    for i in 0..num_spectra {
        text.push_str("BEGIN IONS\n");
        text.push_str(&format!("TITLE=scan {}\n", i + 1));
        text.push_str(&format!("PEPMASS={:.4} 12345.6\n", 400.0 + i as f64));
        text.push_str("CHARGE=2+\n");
        text.push_str(&format!("SCANS={}\n", i + 1));
        text.push_str(&format!("RTINSECONDS={:.2}\n", (i + 1) as f64 * 0.5));
        for j in 0..fragments_per_spectrum {
            text.push_str(&format!(
                "{:.4} {:.1}\n",
                100.0 + j as f64 * 10.0,
                1000.0 + j as f64
            ));
        }
        text.push_str("END IONS\n");
    }
    text
}

/// Test the complete parse-assemble-write-read cycle
#[test]
fn test_mgf_to_bundle_cycle() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("run.mgf");
    let output = dir.path().join("run.mgfpeak");

    std::fs::write(&input, sample_mgf(25, 40)).unwrap();

    let parsed = MgfParser::new().parse_file(&input).unwrap();
    assert_eq!(parsed.spectra.len(), 25);
    assert_eq!(parsed.fragments.len(), 25 * 40);

    let summary = RunSummary::new(parsed.spectra.len(), parsed.fragments.len())
        .with_source_file(SourceFileInfo::from_path(&input));
    let tables = assemble(parsed).unwrap();

    let writer = BundleWriter::new(&output, WriterConfig::default()).unwrap();
    let stats = writer.write(&tables, &summary).unwrap();
    assert_eq!(stats.spectrum_rows, 25);
    assert_eq!(stats.fragment_rows, 1000);

    // Read both tables back with the plain Parquet reader
    let spectra_file = File::open(output.join(SPECTRA_TABLE_FILE)).unwrap();
    let spectra_reader = SerializedFileReader::new(spectra_file).unwrap();
    let spectra_meta = spectra_reader.metadata().file_metadata();
    assert_eq!(spectra_meta.num_rows(), 25);
    assert_eq!(spectra_meta.schema_descr().num_columns(), 7);

    let fragments_file = File::open(output.join(FRAGMENTS_TABLE_FILE)).unwrap();
    let fragments_reader = SerializedFileReader::new(fragments_file).unwrap();
    let fragments_meta = fragments_reader.metadata().file_metadata();
    assert_eq!(fragments_meta.num_rows(), 1000);
    assert_eq!(fragments_meta.schema_descr().num_columns(), 2);

    // Both footers carry the format version and source provenance
    for reader in [&spectra_reader, &fragments_reader] {
        let kv = reader
            .metadata()
            .file_metadata()
            .key_value_metadata()
            .unwrap();
        let version = kv.iter().find(|kv| kv.key == KEY_FORMAT_VERSION).unwrap();
        assert_eq!(version.value.as_deref(), Some(MGFPEAK_FORMAT_VERSION));

        let source = kv.iter().find(|kv| kv.key == KEY_SOURCE_FILE).unwrap();
        let source: SourceFileInfo =
            serde_json::from_str(source.value.as_deref().unwrap()).unwrap();
        assert_eq!(source.name, "run.mgf");
    }

    // The sidecar parses back into a RunSummary
    let json = std::fs::read_to_string(output.join(METADATA_FILE)).unwrap();
    let back: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.spectrum_count, 25);
    assert_eq!(back.fragment_count, 1000);
}

/// Test writing an empty parse result
#[test]
fn test_empty_input_produces_empty_bundle() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.mgf");
    let output = dir.path().join("empty.mgfpeak");

    std::fs::write(&input, "").unwrap();

    let parsed = MgfParser::new().parse_file(&input).unwrap();
    let summary = RunSummary::new(parsed.spectra.len(), parsed.fragments.len());
    let tables = assemble(parsed).unwrap();

    let writer = BundleWriter::new(&output, WriterConfig::default()).unwrap();
    let stats = writer.write(&tables, &summary).unwrap();

    assert_eq!(stats.spectrum_rows, 0);
    assert_eq!(stats.fragment_rows, 0);

    let file = File::open(output.join(SPECTRA_TABLE_FILE)).unwrap();
    let reader = SerializedFileReader::new(file).unwrap();
    assert_eq!(reader.metadata().file_metadata().num_rows(), 0);
}

/// Parsing the same file twice yields identical results
#[test]
fn test_reparse_is_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("run.mgf");
    std::fs::write(&input, sample_mgf(10, 15)).unwrap();

    let first = MgfParser::new().parse_file(&input).unwrap();
    let second = MgfParser::new().parse_file(&input).unwrap();

    assert_eq!(first, second);
}

/// A malformed field fails the whole conversion with no output
#[test]
fn test_malformed_input_produces_no_bundle() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.mgf");
    std::fs::write(
        &input,
        "BEGIN IONS\nTITLE=ok\nRTINSECONDS=notanumber\n100.0 1.0\nEND IONS\n",
    )
    .unwrap();

    let err = MgfParser::new().parse_file(&input).unwrap_err();
    assert!(err.to_string().contains("RTINSECONDS"));
    assert!(err.to_string().contains("line 3"));
}
