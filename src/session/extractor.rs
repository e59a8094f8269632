use crate::config::Selectors;
use crate::session::browser::{Browser, BrowserError};
use crate::words::lemma::Lemmatizer;
use crate::words::normalize::normalize;
use crate::words::stopwords::StopwordSet;

/// What one article visit produced.
///
/// Every field is independently optional: a missing DOM element defaults the
/// field and never aborts extraction of the others. Content is normalized on
/// the way in; the record never holds raw text.
#[derive(Debug, Default)]
pub struct ArticleRecord {
    pub author: Option<String>,
    pub date: Option<String>,
    pub share_count: u64,
    pub content_tokens: Vec<String>,
}

/// Extract the four article fields from the currently open page.
///
/// Only a fatal session error propagates; element-level absence or
/// staleness is logged and defaulted per field.
pub async fn extract<B: Browser>(
    browser: &mut B,
    selectors: &Selectors,
    lemmas: &Lemmatizer,
    stopwords: &StopwordSet,
) -> Result<ArticleRecord, BrowserError> {
    let mut record = ArticleRecord::default();

    record.date = match browser.element_text(&selectors.date).await {
        Ok(text) => Some(text),
        Err(e) if e.is_fatal() => return Err(e),
        Err(_) => {
            ::log::info!("No date found");
            None
        }
    };

    record.share_count = match browser.element_text(&selectors.share).await {
        Ok(text) => parse_share_count(&text),
        Err(e) if e.is_fatal() => return Err(e),
        Err(_) => {
            ::log::info!("No share info");
            0
        }
    };

    record.content_tokens = match browser.element_text(&selectors.content).await {
        Ok(text) => normalize(&text, lemmas, stopwords),
        Err(e) if e.is_fatal() => return Err(e),
        Err(_) => {
            ::log::info!("No identifiable content");
            Vec::new()
        }
    };

    record.author = extract_author(browser, selectors).await?;

    Ok(record)
}

/// Read the author byline, with one retry for a stale element handle.
///
/// The byline re-renders late on some articles, so the handle found at
/// discovery can be stale by the time it is read. On staleness the element
/// is scrolled into view and fetched once more before giving up.
async fn extract_author<B: Browser>(
    browser: &mut B,
    selectors: &Selectors,
) -> Result<Option<String>, BrowserError> {
    match browser.element_text(&selectors.author).await {
        Ok(text) => Ok(Some(text)),
        Err(BrowserError::Stale(_)) => {
            ::log::info!("Stale author element; scrolling into view and retrying");
            if let Err(e) = browser.scroll_into_view(&selectors.author).await {
                if e.is_fatal() {
                    return Err(e);
                }
            }
            match browser.element_text(&selectors.author).await {
                Ok(text) => Ok(Some(text)),
                Err(e) if e.is_fatal() => Err(e),
                Err(_) => {
                    ::log::info!("Author still unreadable after retry");
                    Ok(None)
                }
            }
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(_) => {
            ::log::info!("No author found");
            Ok(None)
        }
    }
}

/// Parse a share-count widget text leniently.
///
/// The widget renders the count inside surrounding label text, or renders
/// blank when nobody has shared yet; anything unparseable counts as 0.
fn parse_share_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
