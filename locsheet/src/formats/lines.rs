//! Support for the per-language text files and the key file.
//!
//! One value per line, UTF-8, positionally aligned to the key sequence.
//! On disk every value is a single line with literal newlines replaced by
//! the sentinel token; in memory the values are decoded.
use std::io::{BufRead, Write};

use crate::{error::Error, escape, traits::Parser};

/// A parsed line file: the decoded values in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub values: Vec<String>,
}

impl Format {
    /// Creates a line file holding the given decoded values.
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl Parser for Format {
    /// Parse from any reader, in a single pass over the contents.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;

        let mut lines: Vec<&str> = contents.split('\n').collect();
        // The terminating newline of a well-formed file produces one empty
        // trailing element; dropping only that element keeps a
        // legitimately-empty last value ("a\n\n" still yields ["a", ""]).
        if lines.last() == Some(&"") {
            lines.pop();
        }

        Ok(Format {
            values: lines
                .iter()
                .map(|line| escape::decode(line.trim()))
                .collect(),
        })
    }

    /// Write to any writer (file, memory, etc.), one encoded value per line.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for value in &self.values {
            writeln!(writer, "{}", escape::encode(value))?;
        }
        Ok(())
    }
}
