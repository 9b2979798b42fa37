//! Error types for MGF parsing.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while parsing an MGF file.
///
/// All malformed-content errors are fatal to the whole parse: no partial
/// result is returned and no row is skipped. Silently dropping spectra would
/// corrupt downstream analysis, so the parser stops at the first bad line and
/// reports its 1-based number.
#[derive(Debug, thiserror::Error)]
pub enum MgfError {
    /// The input file could not be opened.
    #[error("cannot open source {}: {source}", path.display())]
    CannotOpenSource {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Up-front reservation of the output buffers failed.
    #[error("cannot allocate parse buffers: {0}")]
    CannotAllocate(#[from] TryReserveError),

    /// I/O error while reading lines.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A recognized numeric header field's value did not parse as a number.
    #[error("malformed {field} value on line {line}")]
    MalformedField {
        /// 1-based input line number.
        line: u64,
        /// Header key whose value failed to parse.
        field: &'static str,
    },

    /// A numeric-looking data line had fewer than two parseable columns.
    #[error("malformed fragment on line {line}: expected two numeric columns")]
    MalformedFragment {
        /// 1-based input line number.
        line: u64,
    },

    /// The host requested cancellation via the abort flag.
    #[error("parse aborted")]
    Aborted,
}
