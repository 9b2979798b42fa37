//! MGF (Mascot Generic Format) streaming parser.
//!
//! MGF is a line-oriented plain-text convention for tandem mass-spectrometry
//! spectra. Each spectrum is a `BEGIN IONS`...`END IONS` block: header keys
//! of the form `KEY=value`, followed by data lines holding an m/z and an
//! intensity separated by whitespace:
//!
//! ```text
//! BEGIN IONS
//! TITLE=scan 42
//! PEPMASS=500.25 12345.6
//! CHARGE=2+
//! 100.1 5.0
//! 200.2 3.0
//! END IONS
//! ```
//!
//! [`MgfParser`] turns such text into two linked column sets in a single
//! pass: one row per spectrum and one row per fragment, joined by the
//! spectra's `first_entry`/`last_entry` index ranges. See [`ParsedMgf`].

mod columns;
mod error;
mod line_source;
mod parser;


pub use columns::{FragmentColumns, ParsedMgf, SpectrumColumns};
pub use error::MgfError;
pub use line_source::LineSource;
pub use parser::{MgfParser, ProgressFn};
