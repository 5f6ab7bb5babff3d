//! Core types for locsheet: the in-memory dataset built for one
//! conversion pass and discarded afterwards.
//!
//! Values held in memory are always decoded (literal newlines);
//! encoding to the single-line on-disk form happens at the format
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One language's translations, positionally aligned to the dataset's
/// keys: index `i` of `values` is the translation for key index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    /// Language identifier, derived from the file stem or column name.
    pub name: String,

    /// Decoded translation values in key order.
    pub values: Vec<String>,
}

/// The full in-memory object for one conversion pass: an ordered key
/// sequence plus one value sequence per language.
///
/// Language order is discovery order (sorted file names on export,
/// column order on import). The alignment invariant — every language
/// carries exactly one value per key — is enforced by
/// [`Dataset::check_alignment`] before any output is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dataset {
    pub keys: Vec<String>,
    pub languages: Vec<Language>,
}

impl Dataset {
    /// Creates a new, empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the dataset.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Finds a language by name, if present.
    pub fn language(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// Verifies that every language carries exactly one value per key.
    ///
    /// Returns [`Error::Alignment`] naming the first offending language
    /// and the two counts.
    pub fn check_alignment(&self) -> Result<(), Error> {
        for language in &self.languages {
            if language.values.len() != self.keys.len() {
                return Err(Error::Alignment {
                    language: language.name.clone(),
                    values: language.values.len(),
                    keys: self.keys.len(),
                });
            }
        }
        Ok(())
    }

    /// Sorts the keys ascending and applies the same permutation to every
    /// language's value sequence, so index `i` stays aligned across all of
    /// them. This is the ordering policy applied on import; export never
    /// reorders anything.
    ///
    /// The sort is lexicographic and stable: duplicate keys keep their
    /// relative order. Callers must have established alignment first.
    pub fn sort_by_key(&mut self) {
        let mut order: Vec<usize> = (0..self.keys.len()).collect();
        order.sort_by(|&a, &b| self.keys[a].cmp(&self.keys[b]));

        self.keys = order.iter().map(|&i| self.keys[i].clone()).collect();
        for language in &mut self.languages {
            language.values = order.iter().map(|&i| language.values[i].clone()).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(keys: &[&str], languages: &[(&str, &[&str])]) -> Dataset {
        Dataset {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            languages: languages
                .iter()
                .map(|(name, values)| Language {
                    name: name.to_string(),
                    values: values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_check_alignment_accepts_matching_lengths() {
        let data = dataset(&["a", "b"], &[("En", &["A", "B"]), ("Tr", &["1", "2"])]);
        assert!(data.check_alignment().is_ok());
    }

    #[test]
    fn test_check_alignment_accepts_empty_dataset() {
        assert!(Dataset::new().check_alignment().is_ok());
    }

    #[test]
    fn test_check_alignment_names_offending_language() {
        let data = dataset(&["a", "b", "c"], &[("En", &["A", "B", "C"]), ("Tr", &["1", "2"])]);
        match data.check_alignment() {
            Err(Error::Alignment {
                language,
                values,
                keys,
            }) => {
                assert_eq!(language, "Tr");
                assert_eq!(values, 2);
                assert_eq!(keys, 3);
            }
            other => panic!("expected alignment error, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_by_key_permutes_all_languages() {
        let mut data = dataset(
            &["b", "a", "c"],
            &[("En", &["B", "A", "C"]), ("Tr", &["2", "1", "3"])],
        );
        data.sort_by_key();

        assert_eq!(data.keys, vec!["a", "b", "c"]);
        assert_eq!(data.languages[0].values, vec!["A", "B", "C"]);
        assert_eq!(data.languages[1].values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_by_key_is_stable_for_duplicate_keys() {
        let mut data = dataset(&["b", "a", "a"], &[("En", &["B", "first", "second"])]);
        data.sort_by_key();

        assert_eq!(data.keys, vec!["a", "a", "b"]);
        assert_eq!(data.languages[0].values, vec!["first", "second", "B"]);
    }

    #[test]
    fn test_sort_by_key_on_empty_dataset() {
        let mut data = Dataset::new();
        data.sort_by_key();
        assert_eq!(data, Dataset::new());
    }

    #[test]
    fn test_language_lookup_by_name() {
        let data = dataset(&["a"], &[("En", &["A"]), ("Tr", &["1"])]);
        assert_eq!(data.language("Tr").unwrap().values, vec!["1"]);
        assert!(data.language("De").is_none());
    }
}
