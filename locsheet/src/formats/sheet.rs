//! Support for the localization sheet: a CSV table whose rows are keys
//! and whose columns are languages.
//!
//! The header row is `Keys,<lang1>,<lang2>,...`; every cell is stored in
//! escaped single-line form, with standard CSV quoting for embedded
//! delimiters. In memory the cells are decoded.
use std::io::{BufRead, Write};

use crate::{
    error::Error,
    escape,
    traits::Parser,
    types::{Dataset, Language},
};

/// Label of the key column in the sheet header.
pub const KEY_COLUMN: &str = "Keys";

/// One sheet row: a key and one decoded value per language column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub values: Vec<String>,
}

/// A parsed sheet: the language column order plus the rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub languages: Vec<String>,
    pub rows: Vec<Row>,
}

impl Parser for Format {
    /// Parse from any reader.
    ///
    /// Every data row must match the header's column count; a mismatch is
    /// reported as [`Error::MalformedRow`] with the 1-based row number
    /// (the header is row 1).
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = rdr.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(Error::InvalidSheet("missing header row".to_string())),
        };
        // Column 0 holds the key-column label, which is not data.
        let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, record) in records.enumerate() {
            let record = record?;
            let row_number = index + 2;
            if record.len() != header.len() {
                return Err(Error::MalformedRow {
                    row: row_number,
                    expected: header.len(),
                    found: record.len(),
                });
            }

            // A quoted cell may contain a literal newline; decoding the
            // token and keeping literal newlines as-is normalizes both
            // spellings to the same in-memory value.
            let mut cells = record.iter().map(escape::decode);
            let key = cells.next().unwrap_or_default();
            rows.push(Row {
                key,
                values: cells.collect(),
            });
        }

        Ok(Format { languages, rows })
    }

    /// Write to any writer (file, memory, etc.), every cell encoded.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);

        let mut header = vec![KEY_COLUMN.to_string()];
        header.extend(self.languages.iter().cloned());
        wtr.write_record(&header)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(1 + row.values.len());
            record.push(escape::encode(&row.key));
            record.extend(row.values.iter().map(|value| escape::encode(value)));
            wtr.write_record(&record)?;
        }

        wtr.flush().map_err(Error::Io)?;
        Ok(())
    }
}

/// Export direction: the dataset's keys stay in their current order and
/// language columns follow the dataset's language order. Callers must
/// have checked alignment first.
impl From<&Dataset> for Format {
    fn from(dataset: &Dataset) -> Self {
        Format {
            languages: dataset
                .languages
                .iter()
                .map(|language| language.name.clone())
                .collect(),
            rows: dataset
                .keys
                .iter()
                .enumerate()
                .map(|(i, key)| Row {
                    key: key.clone(),
                    values: dataset
                        .languages
                        .iter()
                        .map(|language| language.values[i].clone())
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Import direction. Infallible because the parser already enforced that
/// every row matches the header's column count, so the resulting dataset
/// is aligned by construction.
impl From<Format> for Dataset {
    fn from(sheet: Format) -> Self {
        let mut keys = Vec::with_capacity(sheet.rows.len());
        let mut languages: Vec<Language> = sheet
            .languages
            .into_iter()
            .map(|name| Language {
                name,
                values: Vec::new(),
            })
            .collect();

        for row in sheet.rows {
            keys.push(row.key);
            for (language, value) in languages.iter_mut().zip(row.values) {
                language.values.push(value);
            }
        }

        Dataset { keys, languages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_header_establishes_language_order() {
        let sheet = Format::from_reader(Cursor::new("Keys,En,Tr\nhello,Hello,Merhaba\n")).unwrap();
        assert_eq!(sheet.languages, vec!["En", "Tr"]);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].key, "hello");
        assert_eq!(sheet.rows[0].values, vec!["Hello", "Merhaba"]);
    }

    #[test]
    fn test_parse_header_only_sheet() {
        let sheet = Format::from_reader(Cursor::new("Keys,En\n")).unwrap();
        assert_eq!(sheet.languages, vec!["En"]);
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_parse_empty_input_is_invalid() {
        match Format::from_reader(Cursor::new("")) {
            Err(Error::InvalidSheet(_)) => {}
            other => panic!("expected invalid sheet error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_short_row_naming_row_number() {
        let result = Format::from_reader(Cursor::new("Keys,En,Tr\nhello,Hello\n"));
        match result {
            Err(Error::MalformedRow {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_long_row() {
        let result = Format::from_reader(Cursor::new("Keys,En\na,A\nb,B,extra\n"));
        match result {
            Err(Error::MalformedRow { row, .. }) => assert_eq!(row, 3),
            other => panic!("expected malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_trims_and_decodes_cells() {
        let sheet =
            Format::from_reader(Cursor::new("Keys, En\nhello, Hello<line_break>World\n")).unwrap();
        assert_eq!(sheet.languages, vec!["En"]);
        assert_eq!(sheet.rows[0].values, vec!["Hello\nWorld"]);
    }

    #[test]
    fn test_parse_quoted_cell_with_literal_newline() {
        // A translator's spreadsheet tool may emit a quoted multi-line
        // cell instead of the token; both decode to the same value.
        let sheet = Format::from_reader(Cursor::new("Keys,En\nhello,\"Hello\nWorld\"\n")).unwrap();
        assert_eq!(sheet.rows[0].values, vec!["Hello\nWorld"]);
    }

    #[test]
    fn test_write_emits_header_and_encoded_cells() {
        let sheet = Format {
            languages: vec!["En".to_string()],
            rows: vec![Row {
                key: "greeting".to_string(),
                values: vec!["Hello\nWorld".to_string()],
            }],
        };

        let mut output = Vec::new();
        sheet.to_writer(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Keys,En\ngreeting,Hello<line_break>World\n"
        );
    }

    #[test]
    fn test_write_quotes_embedded_delimiters() {
        let sheet = Format {
            languages: vec!["En".to_string()],
            rows: vec![Row {
                key: "greeting".to_string(),
                values: vec!["Hello, World!".to_string()],
            }],
        };

        let mut output = Vec::new();
        sheet.to_writer(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Keys,En\ngreeting,\"Hello, World!\"\n"
        );
    }

    #[test]
    fn test_dataset_round_trip_through_sheet() {
        let dataset = Dataset {
            keys: vec!["bye".to_string(), "hello".to_string()],
            languages: vec![
                Language {
                    name: "En".to_string(),
                    values: vec!["Goodbye".to_string(), "Hello".to_string()],
                },
                Language {
                    name: "Tr".to_string(),
                    values: vec!["Güle güle".to_string(), "Merhaba".to_string()],
                },
            ],
        };

        let mut output = Vec::new();
        Format::from(&dataset).to_writer(&mut output).unwrap();
        let reparsed = Format::from_reader(Cursor::new(output)).unwrap();
        assert_eq!(Dataset::from(reparsed), dataset);
    }

    #[test]
    fn test_sheet_to_dataset_transposes_columns() {
        let sheet = Format::from_reader(Cursor::new(
            "Keys,En,Tr\nhello,Hello,Merhaba\nbye,Goodbye,Güle güle\n",
        ))
        .unwrap();
        let dataset = Dataset::from(sheet);

        assert_eq!(dataset.keys, vec!["hello", "bye"]);
        assert_eq!(dataset.languages[0].name, "En");
        assert_eq!(dataset.languages[0].values, vec!["Hello", "Goodbye"]);
        assert_eq!(dataset.languages[1].name, "Tr");
        assert_eq!(dataset.languages[1].values, vec!["Merhaba", "Güle güle"]);
        assert!(dataset.check_alignment().is_ok());
    }
}
