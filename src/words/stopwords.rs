use crate::words::Locale;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Immutable set of function words to exclude from word counting.
///
/// Built once per session from three sources: a remote category listing of
/// linking words, a fixed supplemental list of particles and pronouns, and
/// the built-in general stopword list for the locale. If the remote listing
/// is unreachable the build degrades to the supplemental and built-in lists
/// only; the degraded set is deterministic across runs and the failure is
/// logged as a warning.
#[derive(Debug)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build the full stopword set for a locale, fetching the remote
    /// linking-word listing from `listing_url`
    pub async fn build(locale: Locale, listing_url: &str) -> Self {
        let mut words = Self::offline(locale).words;

        match fetch_linking_words(listing_url).await {
            Ok(remote) => {
                ::log::info!("Fetched {} linking words from {}", remote.len(), listing_url);
                words.extend(remote);
            }
            Err(e) => {
                ::log::warn!(
                    "Linking-word listing unreachable ({}); continuing with built-in lists only",
                    e
                );
            }
        }

        Self { words }
    }

    /// Build only from the embedded lists, with no network access
    pub fn offline(locale: Locale) -> Self {
        let mut words: HashSet<String> = builtin_stopwords(locale).collect();
        words.extend(
            locale
                .supplemental_words()
                .iter()
                .map(|w| w.to_lowercase()),
        );
        Self { words }
    }

    /// Build a set from an explicit word list (used by tests)
    pub fn from_words<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// An empty set
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Whether `word` is a stopword. Lookup expects lowercase input.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse the built-in stopword list for a locale.
///
/// The Hungarian source list predates proper ő support and stores it as õ;
/// the substitution here is a data-quality fix for that one source, not a
/// general transliteration.
fn builtin_stopwords(locale: Locale) -> impl Iterator<Item = String> {
    locale
        .stopword_source()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.replace('õ', "ő").to_lowercase())
}

/// Fetch the remote category listing and pull out the listed words
async fn fetch_linking_words(listing_url: &str) -> Result<Vec<String>, reqwest::Error> {
    let body = reqwest::get(listing_url).await?.text().await?;
    Ok(parse_category_listing(&body))
}

/// Extract the member words from a category listing page.
///
/// The listing renders its members as `li` items inside
/// `div.mw-category-group` blocks.
pub fn parse_category_listing(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let group_selector = Selector::parse("div.mw-category-group li").unwrap();

    doc.select(&group_selector)
        .map(|li| li.text().collect::<String>().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
