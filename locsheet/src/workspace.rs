//! Directory-level discovery and the export/import entry points.
//!
//! A localization directory holds `_keys.txt` (one key per line), one
//! `<language>.txt` per language, and optionally the generated sheet.
//! File names starting with `_` are reserved and never treated as
//! languages.

use std::{
    fs,
    path::Path,
};

use crate::{
    error::Error,
    formats::{LinesFormat, SheetFormat},
    traits::Parser,
    types::{Dataset, Language},
};

/// File holding the key sequence, one key per line.
pub const KEYS_FILE: &str = "_keys.txt";

/// Sheet file name used when the caller does not supply one.
pub const DEFAULT_SHEET_FILE: &str = "localization_sheet.csv";

/// Reads the key file and every language file in `dir` into a [`Dataset`].
///
/// Language files are `*.txt` files whose stems do not start with `_`;
/// the stem is the language name. Discovered names are sorted before
/// column order is assigned, so the result never depends on directory
/// iteration order. Key order is taken from the key file as-is.
///
/// Returns [`Error::MissingSource`] if the key file is absent; a language
/// file simply not existing is the normal no-such-language case.
pub fn read_workspace<P: AsRef<Path>>(dir: P) -> Result<Dataset, Error> {
    let dir = dir.as_ref();

    let keys_path = dir.join(KEYS_FILE);
    if !keys_path.is_file() {
        return Err(Error::MissingSource(keys_path.display().to_string()));
    }
    let keys = LinesFormat::read_from(&keys_path)?.values;

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        if let Some(name) = language_name(&entry?.path()) {
            names.push(name);
        }
    }
    names.sort();

    let mut languages = Vec::with_capacity(names.len());
    for name in names {
        let values = LinesFormat::read_from(dir.join(format!("{name}.txt")))?.values;
        languages.push(Language { name, values });
    }

    Ok(Dataset { keys, languages })
}

/// Returns the language name for `path` if it is a language file.
fn language_name(path: &Path) -> Option<String> {
    if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.starts_with('_') {
        return None;
    }
    Some(stem.to_string())
}

/// Exports the localization files in `dir` to a sheet named `sheet_name`
/// inside `dir`, and returns the number of keys written.
///
/// Key order and language column order are exactly what
/// [`read_workspace`] produced; export never sorts keys. Alignment is
/// checked before the sheet file is created, so a mismatched language
/// leaves the directory untouched.
pub fn export_sheet<P: AsRef<Path>>(dir: P, sheet_name: &str) -> Result<usize, Error> {
    let dir = dir.as_ref();

    let dataset = read_workspace(dir)?;
    dataset.check_alignment()?;

    SheetFormat::from(&dataset).write_to(dir.join(sheet_name))?;
    Ok(dataset.key_count())
}

/// Imports the sheet named `sheet_name` from `dir`, regenerating the key
/// file and one text file per language inside `dir`, all sorted by key.
/// Returns the number of keys written.
///
/// The sheet is parsed completely before any output file is created, so
/// a malformed sheet leaves the directory untouched.
pub fn import_sheet<P: AsRef<Path>>(dir: P, sheet_name: &str) -> Result<usize, Error> {
    let dir = dir.as_ref();

    let sheet_path = dir.join(sheet_name);
    if !sheet_path.is_file() {
        return Err(Error::MissingSource(sheet_path.display().to_string()));
    }

    let mut dataset = Dataset::from(SheetFormat::read_from(&sheet_path)?);
    dataset.sort_by_key();

    LinesFormat::new(dataset.keys.clone()).write_to(dir.join(KEYS_FILE))?;
    for language in &dataset.languages {
        LinesFormat::new(language.values.clone())
            .write_to(dir.join(format!("{}.txt", language.name)))?;
    }

    Ok(dataset.key_count())
}
