pub mod lemma;
pub mod normalize;
pub mod stopwords;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Locale for stopword selection and lemma lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Hungarian
    Hu,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Hu
    }
}

impl Locale {
    /// Embedded general stopword list for this locale
    pub fn stopword_source(&self) -> &'static str {
        match self {
            Locale::Hu => include_str!("../../data/stopwords_hu.txt"),
        }
    }

    /// Embedded lemma dictionary for this locale
    pub fn lemma_source(&self) -> &'static str {
        match self {
            Locale::Hu => include_str!("../../data/lemmas_hu.tsv"),
        }
    }

    /// URL of the remote category listing of linking words for this locale
    pub fn linking_word_listing_url(&self) -> &'static str {
        match self {
            Locale::Hu => {
                "https://hu.wiktionary.org/wiki/Kateg%C3%B3ria:magyar_k%C3%B6t%C5%91sz%C3%B3k"
            }
        }
    }

    /// Fixed supplemental list of high-frequency particles and pronouns
    /// that the category listing does not cover
    pub fn supplemental_words(&self) -> &'static [&'static str] {
        match self {
            Locale::Hu => &[
                "a", "az", "be", "ki", "le", "fel", "össze", "vissza", "egy", "már", "még", "el",
                "meg", "ami", "aki", "ez",
            ],
        }
    }
}
