//! On-disk representations: per-language line files and the sheet.
//!
//! Both formats hold the decoded in-memory form of their values; the
//! sentinel-token escaping (see [`crate::escape`]) is applied at the
//! read/write boundary so neither representation ever stores a literal
//! newline inside a record line.

pub mod lines;
pub mod sheet;

// Reexporting the formats for easier access
pub use lines::Format as LinesFormat;
pub use sheet::{Format as SheetFormat, Row};
