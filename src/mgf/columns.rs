//! Columnar accumulators filled by the parser.
//!
//! Both structures are struct-of-arrays: every field is one column, and the
//! row at a given index is spread across all columns. This is the shape the
//! result assembler consumes directly when building Arrow record batches.

use std::collections::TryReserveError;
use std::ops::Range;

/// Per-spectrum metadata, one row per `BEGIN IONS`...`END IONS` block.
///
/// `first_entry`/`last_entry` are 1-based inclusive indices into the global
/// fragment sequence. An empty spectrum has `last_entry == first_entry - 1`.
/// Ranges across spectra are contiguous and non-overlapping in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrumColumns {
    /// `TITLE=` value, empty string when absent.
    pub title: Vec<String>,
    /// `RTINSECONDS=` value, `None` when absent.
    pub retention_time: Vec<Option<f64>>,
    /// `PEPMASS=` leading numeric token, `None` when absent.
    pub pepmass: Vec<Option<f64>>,
    /// `CHARGE=` value stored verbatim, empty string when absent.
    pub charge: Vec<String>,
    /// `SCANS=` value stored verbatim, empty string when absent.
    pub scans: Vec<String>,
    /// 1-based index of the spectrum's first fragment row.
    pub first_entry: Vec<i64>,
    /// 1-based index of the spectrum's last fragment row.
    pub last_entry: Vec<i64>,
}

impl SpectrumColumns {
    /// Number of spectra accumulated so far.
    pub fn len(&self) -> usize {
        self.title.len()
    }

    /// Whether no spectra have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.title.try_reserve(additional)?;
        self.retention_time.try_reserve(additional)?;
        self.pepmass.try_reserve(additional)?;
        self.charge.try_reserve(additional)?;
        self.scans.try_reserve(additional)?;
        self.first_entry.try_reserve(additional)?;
        self.last_entry.try_reserve(additional)?;
        Ok(())
    }

    /// Open a new spectrum with default fields and an empty fragment range.
    pub(crate) fn begin(&mut self, fragments_so_far: usize) {
        let first = fragments_so_far as i64 + 1;
        self.title.push(String::new());
        self.retention_time.push(None);
        self.pepmass.push(None);
        self.charge.push(String::new());
        self.scans.push(String::new());
        self.first_entry.push(first);
        self.last_entry.push(first - 1);
    }

    /// Set `last_entry` of the open spectrum from its fragment count.
    pub(crate) fn close(&mut self, fragments: i64) {
        let first = self.first_entry.last().copied().unwrap_or(1);
        if let Some(last) = self.last_entry.last_mut() {
            *last = first + fragments - 1;
        }
    }

    pub(crate) fn set_title(&mut self, value: &str) {
        if let Some(slot) = self.title.last_mut() {
            value.clone_into(slot);
        }
    }

    pub(crate) fn set_retention_time(&mut self, value: f64) {
        if let Some(slot) = self.retention_time.last_mut() {
            *slot = Some(value);
        }
    }

    pub(crate) fn set_pepmass(&mut self, value: f64) {
        if let Some(slot) = self.pepmass.last_mut() {
            *slot = Some(value);
        }
    }

    pub(crate) fn set_charge(&mut self, value: &str) {
        if let Some(slot) = self.charge.last_mut() {
            value.clone_into(slot);
        }
    }

    pub(crate) fn set_scans(&mut self, value: &str) {
        if let Some(slot) = self.scans.last_mut() {
            value.clone_into(slot);
        }
    }
}

/// Observed fragments, globally sequenced across all spectra.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentColumns {
    /// Mass-to-charge ratios.
    pub mz: Vec<f64>,
    /// Signal intensities.
    pub intensity: Vec<f64>,
}

impl FragmentColumns {
    /// Number of fragments accumulated so far.
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    /// Whether no fragments have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }
}

/// Complete result of one parse pass: the two linked column sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMgf {
    /// One row per spectrum.
    pub spectra: SpectrumColumns,
    /// One row per fragment, owned by the spectra via their index ranges.
    pub fragments: FragmentColumns,
}

impl ParsedMgf {
    /// Pre-size the output columns from an input byte-length hint.
    ///
    /// A data line is rarely shorter than 16 bytes and a spectrum block
    /// rarely shorter than 256, so those ratios bound the row counts from
    /// above without wild overshoot. Reservation failure is reported before
    /// any parsing happens.
    pub(crate) fn with_size_hint(size_hint: Option<u64>) -> Result<Self, TryReserveError> {
        let mut out = Self::default();
        if let Some(bytes) = size_hint {
            let fragment_rows = (bytes / 16) as usize;
            let spectrum_rows = (bytes / 256) as usize;
            out.fragments.mz.try_reserve(fragment_rows)?;
            out.fragments.intensity.try_reserve(fragment_rows)?;
            out.spectra.try_reserve(spectrum_rows)?;
        }
        Ok(out)
    }

    /// Append the staged fragments of the open spectrum to the global
    /// sequence and finalize its `last_entry`.
    pub(crate) fn close_spectrum(&mut self, mz: &mut Vec<f64>, intensity: &mut Vec<f64>) {
        let count = mz.len() as i64;
        self.fragments.mz.append(mz);
        self.fragments.intensity.append(intensity);
        self.spectra.close(count);
    }

    /// 0-based slice range of the fragments owned by spectrum `index`,
    /// or `None` if the index is out of bounds.
    pub fn fragment_range(&self, index: usize) -> Option<Range<usize>> {
        let first = *self.spectra.first_entry.get(index)?;
        let last = *self.spectra.last_entry.get(index)?;
        Some((first - 1) as usize..last.max(first - 1) as usize)
    }
}
