use crate::words::Locale;
use std::collections::HashMap;

/// Dictionary-backed lemma lookup for one locale.
///
/// Reduces inflected surface forms to their canonical dictionary form.
/// Surface forms without a dictionary entry pass through unchanged.
#[derive(Debug)]
pub struct Lemmatizer {
    entries: HashMap<String, String>,
}

impl Lemmatizer {
    /// Build a lemmatizer from the embedded dictionary for the given locale
    pub fn for_locale(locale: Locale) -> Self {
        Self::from_tsv(locale.lemma_source())
    }

    /// Parse a tab-separated `surface<TAB>lemma` dictionary.
    ///
    /// Lines starting with `#` and lines without a tab are ignored.
    pub fn from_tsv(source: &str) -> Self {
        let mut entries = HashMap::new();
        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((surface, lemma)) = line.split_once('\t') {
                entries.insert(
                    surface.trim().to_lowercase(),
                    lemma.trim().to_lowercase(),
                );
            }
        }
        ::log::debug!("Loaded {} lemma dictionary entries", entries.len());
        Self { entries }
    }

    /// Look up the lemma for a surface form, passing unknown forms through
    pub fn lemma<'a>(&'a self, word: &'a str) -> &'a str {
        self.entries.get(word).map(String::as_str).unwrap_or(word)
    }

    /// Number of dictionary entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
