//! # lotto_store: Flat-File History Storage
//!
//! Storage layer over a CSV data file of historical draws. Provides:
//! - `record`: the dated draw record type and its CSV row format
//! - `csv_store`: reading, appending and rewriting the data file, plus
//!   the tolerant history-set loader used to feed the generator
//! - `schedule`: the Powerball draw calendar (scheduled and missing dates)
//! - `integrity`: a structural check of the data file
//!
//! Malformed rows in the data file are never fatal: the loaders validate
//! every row against the rules and skip (with a warning) anything that
//! does not parse, so the generator only ever sees valid draws.

pub mod csv_store;
pub mod error;
pub mod integrity;
pub mod record;
pub mod schedule;

pub use csv_store::HistoryStore;
pub use error::StoreError;
pub use record::DrawRecord;
