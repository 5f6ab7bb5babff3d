//! All error types for the locsheet crate.
//!
//! These are returned from all fallible operations (parsing, alignment
//! checks, exporting, importing). Every detected inconsistency aborts the
//! current run before any output file is written.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("language `{language}` has {values} values but the key file has {keys} keys")]
    Alignment {
        language: String,
        values: usize,
        keys: usize,
    },

    #[error("sheet row {row} has {found} columns, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("missing source: {0}")]
    MissingSource(String),

    #[error("invalid sheet: {0}")]
    InvalidSheet(String),
}
