//! Buffered line source with platform-independent line endings.

use std::io::{self, BufRead};

/// Pull-based line reader over any [`BufRead`].
///
/// Each line is exposed with the trailing `\n` (and `\r`, if present)
/// removed, so downstream comparisons behave identically for LF and CRLF
/// inputs. The internal buffer grows to fit lines of any length; end of
/// input is reported distinctly from read errors.
///
/// # Example
///
/// ```
/// use mgfpeak::mgf::LineSource;
///
/// let mut lines = LineSource::new(&b"BEGIN IONS\r\nEND IONS\n"[..]);
/// assert_eq!(lines.next_line().unwrap(), Some("BEGIN IONS"));
/// assert_eq!(lines.next_line().unwrap(), Some("END IONS"));
/// assert_eq!(lines.next_line().unwrap(), None);
/// assert_eq!(lines.line_number(), 2);
/// ```
pub struct LineSource<R> {
    reader: R,
    buf: String,
    line_number: u64,
    bytes_read: u64,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::with_capacity(1024),
            line_number: 0,
            bytes_read: 0,
        }
    }

    /// Advance to the next line. Returns `false` at end of input.
    pub fn advance(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.bytes_read += n as u64;
        self.line_number += 1;
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    /// The current line, without its terminator.
    ///
    /// Empty until the first successful [`advance`](Self::advance).
    pub fn current(&self) -> &str {
        &self.buf
    }

    /// Advance and return the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        Ok(if self.advance()? {
            Some(self.current())
        } else {
            None
        })
    }

    /// 1-based number of the most recently returned line.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Raw bytes consumed so far, including line terminators.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
