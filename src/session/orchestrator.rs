use crate::config::ScraperConfig;
use crate::session::browser::{Browser, BrowserError};
use crate::session::extractor::{self, ArticleRecord};
use crate::session::navigator::NavigationController;
use crate::words::lemma::Lemmatizer;
use crate::words::stopwords::StopwordSet;
use std::collections::{HashMap, HashSet};

/// Running word-occurrence counts for one session. Counts only ever grow.
pub type WordCounts = HashMap<String, u64>;

/// One end-to-end scraping run over a single browser session.
///
/// Owns the navigation controller for its whole lifetime; the browser is
/// released on every exit path, including fatal ones.
pub struct Session<B: Browser> {
    nav: NavigationController<B>,
    config: ScraperConfig,
}

impl<B: Browser> Session<B> {
    pub fn new(browser: B, config: ScraperConfig) -> Self {
        let nav = NavigationController::new(browser, &config.start_url, config.settle_delay());
        Self { nav, config }
    }

    /// Run the full pipeline: build stopwords, visit every front-page
    /// article, and return the accumulated word counts.
    pub async fn run(self) -> Result<WordCounts, BrowserError> {
        let stopwords = StopwordSet::build(
            self.config.locale,
            self.config.locale.linking_word_listing_url(),
        )
        .await;
        self.run_with(stopwords).await
    }

    /// Run with an already-built stopword set.
    ///
    /// Per-article failures are logged and skipped; only a fatal browser
    /// error aborts, and even then the browser is released before returning.
    pub async fn run_with(mut self, stopwords: StopwordSet) -> Result<WordCounts, BrowserError> {
        let outcome = self.visit_articles(&stopwords).await;

        if let Err(e) = self.nav.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }

        outcome
    }

    async fn visit_articles(&mut self, stopwords: &StopwordSet) -> Result<WordCounts, BrowserError> {
        let locale = self.config.locale;
        let lemmas = Lemmatizer::for_locale(locale);

        // Coarser second filter applied when folding tokens into the
        // aggregate, on top of the normalizer's stopword filtering
        let linking_words: HashSet<String> = locale
            .supplemental_words()
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        self.nav.open().await?;
        let consent_text = self.config.consent_text.clone();
        self.nav
            .accept_consent(&consent_text, self.config.element_timeout())
            .await?;

        let title_selector = self.config.selectors.article_title.clone();
        ::log::info!("Looking for articles on the front page");
        let titles = match self.nav.browser_mut().all_element_texts(&title_selector).await {
            Ok(titles) => titles,
            Err(e) if e.is_fatal() => return Err(e),
            Err(_) => {
                ::log::warn!("No article links found on the front page");
                Vec::new()
            }
        };
        ::log::info!("Found {} front-page articles", titles.len());

        let mut counts = WordCounts::new();

        for (index, title) in titles.iter().enumerate() {
            // Each back-navigation may re-render the front page, so the
            // article is re-located by position instead of holding a handle
            // from the original enumeration.
            if let Err(e) = self.nav.open_article(&title_selector, index).await {
                if e.is_fatal() {
                    return Err(e);
                }
                ::log::warn!("Skipping article {} ({}): {}", index, title, e);
                continue;
            }

            // Give late-rendered article bodies a bounded chance to appear;
            // a timeout here is soft and extraction defaults the field
            let content_selector = self.config.selectors.content.clone();
            self.nav
                .wait_for_element(&content_selector, self.config.element_timeout())
                .await;

            let record = extractor::extract(
                self.nav.browser_mut(),
                &self.config.selectors,
                &lemmas,
                stopwords,
            )
            .await?;

            log_article(index, title, &record);
            fold_tokens(&mut counts, &record, &linking_words);

            self.nav.return_home().await?;
        }

        ::log::info!(
            "Done scraping: {} distinct words across {} articles",
            counts.len(),
            titles.len()
        );
        Ok(counts)
    }
}

/// Fold one article's content tokens into the running counter,
/// dropping linking words
fn fold_tokens(counts: &mut WordCounts, record: &ArticleRecord, linking_words: &HashSet<String>) {
    for token in &record.content_tokens {
        if linking_words.contains(token) {
            continue;
        }
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
}

fn log_article(index: usize, title: &str, record: &ArticleRecord) {
    ::log::info!(
        "Article {} ({}): author={}, date={}, shares={}, {} tokens",
        index,
        title,
        record.author.as_deref().unwrap_or("-"),
        record.date.as_deref().unwrap_or("-"),
        record.share_count,
        record.content_tokens.len()
    );
}
