#![forbid(unsafe_code)]
//! Round-trip converter between per-language localization text files and a
//! single spreadsheet-style sheet.
//!
//! Translators edit one CSV where rows are keys and columns are languages;
//! the runtime consumes one text file per language plus a shared key file.
//! [`workspace::export_sheet`] produces the sheet from a localization
//! directory, and [`workspace::import_sheet`] regenerates the text files
//! from an edited sheet, sorted by key so repeated round trips converge to
//! the same on-disk order.
//!
//! Multi-line values survive both single-line-per-record formats through
//! the [`escape`] codec, which substitutes a sentinel token for literal
//! newlines on disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locsheet::workspace::{self, DEFAULT_SHEET_FILE};
//!
//! let keys = workspace::export_sheet(".", DEFAULT_SHEET_FILE)?;
//! println!("exported {keys} keys");
//!
//! let keys = workspace::import_sheet(".", DEFAULT_SHEET_FILE)?;
//! println!("imported {keys} keys");
//! # Ok::<(), locsheet::Error>(())
//! ```

pub mod error;
pub mod escape;
pub mod formats;
pub mod traits;
pub mod types;
pub mod workspace;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{LinesFormat, SheetFormat},
    types::{Dataset, Language},
    workspace::{DEFAULT_SHEET_FILE, KEYS_FILE, export_sheet, import_sheet, read_workspace},
};
