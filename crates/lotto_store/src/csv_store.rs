//! CSV-backed history store.
//!
//! The data file is the scraper-format CSV described in [`record`]. Two
//! loading paths exist:
//!
//! - **Strict**: rows whose first column is an ISO date are read by
//!   position. These become dated [`DrawRecord`]s.
//! - **Tolerant fallback**: for anything else, integers are scavenged
//!   across the cells (skipping date-shaped tokens) and the first
//!   `white_count + 1` are taken as whites plus red. This path recovers
//!   draws from hand-edited or legacy files; it feeds the exclusion set
//!   only, since such rows carry no reliable date.
//!
//! Every row is validated against the rules before use; failures are
//! logged and skipped, never fatal.
//!
//! [`record`]: crate::record

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lotto_core::types::{Draw, Rules};

use crate::error::StoreError;
use crate::record::DrawRecord;

/// A history store bound to one CSV data file.
pub struct HistoryStore {
    path: PathBuf,
    rules: Rules,
}

impl HistoryStore {
    /// Creates a store for the given data file and rules.
    pub fn new(path: impl Into<PathBuf>, rules: Rules) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }

    /// Returns the data file path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the rules records are validated against.
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns `true` when the data file exists on disk.
    #[inline]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads all strictly-parseable dated records, skipping anything else.
    pub fn load_records(&self) -> Result<Vec<DrawRecord>, StoreError> {
        let mut reader = self.reader()?;
        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| StoreError::csv(&self.path, e))?;
            if is_blank(&row) || is_header(&row) {
                continue;
            }
            match parse_strict(&row, &self.rules) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(line = index + 1, "skipping row without a dated strict parse")
                }
            }
        }
        Ok(records)
    }

    /// Loads the validated exclusion set for the generator.
    ///
    /// Accepts both strict rows and tolerant-fallback rows; every draw in
    /// the returned set has passed [`Rules::validate`].
    pub fn load_history(&self) -> Result<HashSet<Draw>, StoreError> {
        let mut reader = self.reader()?;
        let mut draws = HashSet::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| StoreError::csv(&self.path, e))?;
            if is_blank(&row) || is_header(&row) {
                continue;
            }
            let draw = parse_strict(&row, &self.rules)
                .and_then(|r| r.to_draw(&self.rules).ok())
                .or_else(|| parse_fallback(&row, &self.rules));
            match draw {
                Some(draw) => {
                    draws.insert(draw);
                }
                None => tracing::warn!(line = index + 1, "skipping malformed history row"),
            }
        }
        Ok(draws)
    }

    /// Counts the non-blank, non-header rows of the data file.
    pub fn row_count(&self) -> Result<usize, StoreError> {
        let mut reader = self.reader()?;
        let mut count = 0;
        for row in reader.records() {
            let row = row.map_err(|e| StoreError::csv(&self.path, e))?;
            if !is_blank(&row) && !is_header(&row) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Appends one record, creating the file (and its header) if absent.
    pub fn append_record(&self, record: &DrawRecord) -> Result<(), StoreError> {
        let fresh = !self.path.exists();
        if fresh {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| StoreError::io(&self.path, e))?;
                }
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if fresh {
            writer
                .write_record(DrawRecord::header(&self.rules))
                .map_err(|e| StoreError::csv(&self.path, e))?;
        }
        writer
            .write_record(record.to_row())
            .map_err(|e| StoreError::csv(&self.path, e))?;
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }

    /// Returns the record with the most recent date, if any.
    pub fn latest(&self) -> Result<Option<DrawRecord>, StoreError> {
        let records = self.load_records()?;
        Ok(records.into_iter().max_by_key(|r| r.date))
    }

    /// Rewrites the rows sorted by date into a sibling `<stem>_sorted.csv`
    /// file, returning the path written.
    pub fn write_sorted(&self, descending: bool) -> Result<PathBuf, StoreError> {
        let mut records = self.load_records()?;
        records.sort_by_key(|r| r.date);
        if descending {
            records.reverse();
        }

        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("history");
        let out_path = self.path.with_file_name(format!("{}_sorted.csv", stem));

        let mut writer =
            csv::Writer::from_path(&out_path).map_err(|e| StoreError::csv(&out_path, e))?;
        writer
            .write_record(DrawRecord::header(&self.rules))
            .map_err(|e| StoreError::csv(&out_path, e))?;
        for record in &records {
            writer
                .write_record(record.to_row())
                .map_err(|e| StoreError::csv(&out_path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(&out_path, e))?;
        Ok(out_path)
    }

    fn reader(&self) -> Result<csv::Reader<std::fs::File>, StoreError> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| StoreError::csv(&self.path, e))
    }
}

/// True when every cell of the row is empty or whitespace.
fn is_blank(row: &csv::StringRecord) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// True when the row is the column-name header.
fn is_header(row: &csv::StringRecord) -> bool {
    row.get(0)
        .map(|c| c.trim().eq_ignore_ascii_case("date"))
        .unwrap_or(false)
}

/// True when the string is an ISO `YYYY-MM-DD` date.
fn looks_like_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
}

/// Extracts every run of digits that fits in a `u16`.
fn ints_in(s: &str) -> Vec<u16> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            if let Ok(n) = current.parse::<u16>() {
                out.push(n);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(n) = current.parse::<u16>() {
            out.push(n);
        }
    }
    out
}

/// Strict column parse: ISO date first, then whites, red, and the optional
/// annotation columns. Validation happens inside [`DrawRecord::new`].
fn parse_strict(row: &csv::StringRecord, rules: &Rules) -> Option<DrawRecord> {
    let date = NaiveDate::parse_from_str(row.get(0)?.trim(), "%Y-%m-%d").ok()?;
    let wc = rules.white_count();

    let mut whites = Vec::with_capacity(wc);
    for i in 1..=wc {
        whites.push(row.get(i)?.trim().parse::<u16>().ok()?);
    }
    let red = row.get(wc + 1)?.trim().parse::<u16>().ok()?;

    let mut record = DrawRecord::new(date, &whites, red, rules).ok()?;
    if let Some(pp) = row.get(wc + 2).map(str::trim).filter(|s| !s.is_empty()) {
        record = record.with_power_play(pp);
    }
    if let Some(url) = row.get(wc + 3).map(str::trim).filter(|s| !s.is_empty()) {
        record = record.with_source_url(url);
    }
    Some(record)
}

/// Tolerant parse: scavenge integers across the cells (skipping date-shaped
/// tokens) and take the first `white_count + 1` as whites plus red.
fn parse_fallback(row: &csv::StringRecord, rules: &Rules) -> Option<Draw> {
    let mut ints = Vec::new();
    for cell in row.iter() {
        if looks_like_iso_date(cell) {
            continue;
        }
        ints.extend(ints_in(cell));
    }

    let wc = rules.white_count();
    if ints.len() < wc + 1 {
        return None;
    }
    let mut whites: Vec<u16> = ints[..wc].to_vec();
    whites.sort_unstable();
    whites.dedup();
    if whites.len() != wc {
        return None;
    }
    let red = ints[wc];
    Draw::new(&whites, red, rules).ok()
}
