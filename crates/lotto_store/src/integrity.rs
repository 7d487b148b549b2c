//! Structural integrity check of the data file.
//!
//! Verifies the header, per-row parseability, number ranges (via the
//! rules) and date uniqueness, and reports everything found instead of
//! stopping at the first problem.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::csv_store::HistoryStore;
use crate::error::StoreError;
use crate::record::DrawRecord;

/// One problematic row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowProblem {
    /// 1-based row number in the file.
    pub line: usize,
    /// Human-readable description of what is wrong.
    pub reason: String,
}

/// Result of checking a data file.
#[derive(Clone, Debug, Default)]
pub struct IntegrityReport {
    /// Number of non-blank data rows examined.
    pub data_rows: usize,
    /// Whether the first row is the expected header.
    pub header_ok: bool,
    /// Dates that appear on more than one row.
    pub duplicate_dates: Vec<NaiveDate>,
    /// Rows that failed to parse or validate.
    pub problems: Vec<RowProblem>,
}

impl IntegrityReport {
    /// Returns `true` when nothing objectionable was found.
    pub fn is_clean(&self) -> bool {
        self.header_ok && self.duplicate_dates.is_empty() && self.problems.is_empty()
    }
}

/// Checks the store's data file and reports its findings.
///
/// Returns an error only when the file cannot be read at all; content
/// problems land in the report.
pub fn check(store: &HistoryStore) -> Result<IntegrityReport, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(store.path())
        .map_err(|e| StoreError::csv(store.path(), e))?;

    let rules = *store.rules();
    let expected_header = DrawRecord::header(&rules);
    let mut report = IntegrityReport::default();
    let mut seen_dates: HashSet<NaiveDate> = HashSet::new();
    let mut duplicates: Vec<NaiveDate> = Vec::new();
    let mut first_row = true;

    for (index, row) in reader.records().enumerate() {
        let line = index + 1;
        let row = row.map_err(|e| StoreError::csv(store.path(), e))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        if first_row {
            first_row = false;
            let header: Vec<&str> = row.iter().map(str::trim).collect();
            report.header_ok = header == expected_header;
            if report.header_ok {
                continue;
            }
            // Not a header: fall through and treat it as data.
        }

        report.data_rows += 1;
        match parse_row(&row, &rules) {
            Ok(record) => {
                if !seen_dates.insert(record.date) && !duplicates.contains(&record.date) {
                    duplicates.push(record.date);
                }
            }
            Err(reason) => report.problems.push(RowProblem { line, reason }),
        }
    }

    report.duplicate_dates = duplicates;
    Ok(report)
}

fn parse_row(row: &csv::StringRecord, rules: &lotto_core::types::Rules) -> Result<DrawRecord, String> {
    let wc = rules.white_count();
    if row.len() < wc + 2 {
        return Err(format!("expected at least {} columns, got {}", wc + 2, row.len()));
    }
    let date_cell = row.get(0).unwrap_or_default().trim();
    let date = NaiveDate::parse_from_str(date_cell, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}'", date_cell))?;

    let mut whites = Vec::with_capacity(wc);
    for i in 1..=wc {
        let cell = row.get(i).unwrap_or_default().trim();
        whites.push(
            cell.parse::<u16>()
                .map_err(|_| format!("invalid white number '{}'", cell))?,
        );
    }
    let red_cell = row.get(wc + 1).unwrap_or_default().trim();
    let red = red_cell
        .parse::<u16>()
        .map_err(|_| format!("invalid red number '{}'", red_cell))?;

    DrawRecord::new(date, &whites, red, rules).map_err(|e| e.to_string())
}
