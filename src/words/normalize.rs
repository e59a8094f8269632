use crate::words::lemma::Lemmatizer;
use crate::words::stopwords::StopwordSet;

/// Punctuation and quote characters stripped from candidate words
const STRIP_CHARS: &[char] = &['„', ',', '"', ';', '.', '-', '!', '?', '”'];

/// Normalizes raw article text into a filtered, lemmatized token sequence.
///
/// Steps, in order: split on whitespace, strip punctuation and quote
/// characters, lowercase, drop anything that is not purely alphabetic,
/// reduce to the dictionary lemma, drop stopwords. The output is a sequence,
/// not a set: repeated words stay repeated so the caller can count them.
///
/// This function is pure; it needs no browser session and no network.
pub fn normalize(raw: &str, lemmas: &Lemmatizer, stopwords: &StopwordSet) -> Vec<String> {
    raw.split_whitespace()
        .filter_map(|candidate| normalize_word(candidate, lemmas, stopwords))
        .collect()
}

/// Normalizes a single whitespace-delimited candidate.
///
/// Returns `None` when the candidate is rejected (non-alphabetic residue,
/// empty after stripping, or a stopword).
fn normalize_word(
    candidate: &str,
    lemmas: &Lemmatizer,
    stopwords: &StopwordSet,
) -> Option<String> {
    let stripped: String = candidate
        .chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect::<String>()
        .to_lowercase();

    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return None;
    }

    let token = lemmas.lemma(&stripped).to_string();

    if stopwords.contains(&token) {
        return None;
    }

    Some(token)
}
