//! Streaming state-machine parser for MGF spectra.
//!
//! The parser consumes one line at a time and never looks ahead, so memory
//! use is bounded by the longest single line plus the accumulated output
//! columns. A line can be classified under one state, rejected, and handed
//! to another state without being consumed: a digit-leading line seen while
//! reading header keys is re-dispatched as fragment data, and a non-digit
//! line seen while reading fragments (typically `END IONS`) is re-dispatched
//! under the header rules.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::warn;

use super::columns::ParsedMgf;
use super::error::MgfError;
use super::line_source::LineSource;

/// Parse state: waiting for a block, reading header keys, or reading peaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Header,
    Fragments,
}

/// How often the abort flag is polled, in lines.
const ABORT_CHECK_INTERVAL: u64 = 4096;

/// Progress callback; receives fractional completion in `[0, 1]`.
pub type ProgressFn = Box<dyn FnMut(f64) + Send>;

/// Streaming MGF parser.
///
/// Recognizes the six standard header fields (`TITLE`, `RTINSECONDS`,
/// `CHARGE`, `SCANS`, `PEPMASS` plus the `BEGIN IONS`/`END IONS` block
/// markers); unrecognized keys are ignored. Header keys may appear in any
/// order, and the last occurrence of a key wins.
///
/// If the input ends inside a block that was never closed by `END IONS`,
/// the partial spectrum is kept: fragments staged so far are appended and
/// `last_entry` is set from them.
///
/// # Example
///
/// ```
/// use mgfpeak::mgf::MgfParser;
///
/// let input = b"BEGIN IONS\nTITLE=A\nPEPMASS=500.25\n100.1 5.0\n200.2 3.0\nEND IONS\n";
/// let parsed = MgfParser::new().parse(&input[..], None)?;
///
/// assert_eq!(parsed.spectra.len(), 1);
/// assert_eq!(parsed.spectra.title[0], "A");
/// assert_eq!(parsed.spectra.pepmass[0], Some(500.25));
/// assert_eq!(parsed.spectra.first_entry[0], 1);
/// assert_eq!(parsed.spectra.last_entry[0], 2);
/// assert_eq!(parsed.fragments.mz, vec![100.1, 200.2]);
/// # Ok::<(), mgfpeak::mgf::MgfError>(())
/// ```
pub struct MgfParser {
    progress: Option<ProgressFn>,
    progress_interval: usize,
    abort: Option<Arc<AtomicBool>>,
}

impl Default for MgfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MgfParser {
    /// Create a parser with no progress reporting and no abort flag.
    pub fn new() -> Self {
        Self {
            progress: None,
            progress_interval: 1000,
            abort: None,
        }
    }

    /// Install a progress callback, invoked once per
    /// [`progress_interval`](Self::with_progress_interval) completed spectra
    /// with the fraction of input bytes consumed. Purely observational: it
    /// never alters the parse result.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Set how many spectra are completed between progress callbacks.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Install a cooperative abort flag, polled between line reads at a
    /// coarse granularity. When set, the parse returns
    /// [`MgfError::Aborted`] instead of a result.
    pub fn with_abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    /// Parse an MGF file from disk.
    ///
    /// The file size is probed up front and used to pre-size the output
    /// columns.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ParsedMgf, MgfError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MgfError::CannotOpenSource {
            path: path.to_path_buf(),
            source,
        })?;
        let size_hint = file.metadata().ok().map(|m| m.len());
        self.parse(BufReader::with_capacity(64 * 1024, file), size_hint)
    }

    /// Parse MGF text from any buffered reader.
    ///
    /// `size_hint` is the total input byte length when known; it only
    /// affects buffer pre-sizing and progress fractions, never the result.
    pub fn parse<R: BufRead>(
        &mut self,
        reader: R,
        size_hint: Option<u64>,
    ) -> Result<ParsedMgf, MgfError> {
        let mut lines = LineSource::new(reader);
        let mut out = ParsedMgf::with_size_hint(size_hint)?;

        // Fragments are staged per spectrum and appended to the global
        // sequence when the block closes.
        let mut pending_mz: Vec<f64> = Vec::new();
        let mut pending_intensity: Vec<f64> = Vec::new();
        let mut state = State::Idle;

        loop {
            if let Some(flag) = &self.abort {
                if lines.line_number() % ABORT_CHECK_INTERVAL == 0 && flag.load(Ordering::Relaxed)
                {
                    return Err(MgfError::Aborted);
                }
            }
            if !lines.advance()? {
                break;
            }
            let line = lines.current();

            // Classify the line, re-dispatching across states without
            // consuming further input.
            loop {
                match state {
                    State::Idle => {
                        if line == "BEGIN IONS" {
                            out.spectra.begin(out.fragments.len());
                            pending_mz.clear();
                            pending_intensity.clear();
                            state = State::Header;
                        }
                        break;
                    }
                    State::Header => {
                        if let Some(rest) = line.strip_prefix("TITLE=") {
                            out.spectra.set_title(rest);
                        } else if let Some(rest) = line.strip_prefix("RTINSECONDS=") {
                            let value =
                                parse_leading_f64(rest).ok_or(MgfError::MalformedField {
                                    line: lines.line_number(),
                                    field: "RTINSECONDS",
                                })?;
                            out.spectra.set_retention_time(value);
                        } else if let Some(rest) = line.strip_prefix("CHARGE=") {
                            out.spectra.set_charge(rest);
                        } else if let Some(rest) = line.strip_prefix("SCANS=") {
                            out.spectra.set_scans(rest);
                        } else if let Some(rest) = line.strip_prefix("PEPMASS=") {
                            // Only the leading token; a second column such as
                            // a precursor intensity annotation is ignored.
                            let value =
                                parse_leading_f64(rest).ok_or(MgfError::MalformedField {
                                    line: lines.line_number(),
                                    field: "PEPMASS",
                                })?;
                            out.spectra.set_pepmass(value);
                        } else if starts_with_digit(line) {
                            // Same line is fragment data; reclassify it.
                            state = State::Fragments;
                            continue;
                        } else if line == "END IONS" {
                            out.close_spectrum(&mut pending_mz, &mut pending_intensity);
                            state = State::Idle;
                            self.report_progress(
                                lines.bytes_read(),
                                size_hint,
                                out.spectra.len(),
                            );
                        }
                        // Anything else is an unrecognized header key.
                        break;
                    }
                    State::Fragments => {
                        if starts_with_digit(line) {
                            let (mz, intensity) =
                                parse_fragment(line).ok_or(MgfError::MalformedFragment {
                                    line: lines.line_number(),
                                })?;
                            pending_mz.push(mz);
                            pending_intensity.push(intensity);
                            break;
                        }
                        // Not a data line; hand it back to the header rules
                        // (it may be END IONS).
                        state = State::Header;
                    }
                }
            }
        }

        if state != State::Idle {
            warn!(
                "input ended inside a spectrum block on line {}; keeping partial spectrum",
                lines.line_number()
            );
            out.close_spectrum(&mut pending_mz, &mut pending_intensity);
        }

        if let Some(callback) = self.progress.as_mut() {
            callback(1.0);
        }

        Ok(out)
    }

    fn report_progress(&mut self, bytes_read: u64, size_hint: Option<u64>, spectra: usize) {
        if spectra % self.progress_interval != 0 {
            return;
        }
        if let Some(callback) = self.progress.as_mut() {
            let fraction = match size_hint {
                Some(total) if total > 0 => (bytes_read as f64 / total as f64).min(1.0),
                _ => 0.0,
            };
            callback(fraction);
        }
    }
}

fn starts_with_digit(line: &str) -> bool {
    line.as_bytes().first().map_or(false, |b| b.is_ascii_digit())
}

/// Parse the first whitespace-delimited token as an `f64`.
///
/// Accepts standard decimal and scientific notation; trailing tokens are
/// ignored.
fn parse_leading_f64(text: &str) -> Option<f64> {
    text.split_ascii_whitespace().next()?.parse().ok()
}

/// Parse the first two whitespace-delimited tokens of a data line.
fn parse_fragment(line: &str) -> Option<(f64, f64)> {
    let mut tokens = line.split_ascii_whitespace();
    let mz = tokens.next()?.parse().ok()?;
    let intensity = tokens.next()?.parse().ok()?;
    Some((mz, intensity))
}
