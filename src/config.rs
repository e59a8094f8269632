use crate::words::Locale;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for one scraping session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Front-page URL to scrape
    pub start_url: String,

    /// Locale for stopword selection and lemma lookup
    #[serde(default)]
    pub locale: Locale,

    /// Fixed settle delay in seconds applied after navigation actions,
    /// giving the page time to render dynamic content
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,

    /// Bounded timeout in seconds when polling for an optional element
    #[serde(default = "default_element_timeout_secs")]
    pub element_timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory where word-count snapshots are written
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,

    /// Text of the consent-acceptance control on the landing page
    #[serde(default = "default_consent_text")]
    pub consent_text: String,

    /// DOM selectors for the front page and article fields
    #[serde(default)]
    pub selectors: Selectors,
}

/// CSS selectors for the elements the scraper reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Front-page article title links
    #[serde(default = "default_article_title")]
    pub article_title: String,

    /// Author byline inside an article
    #[serde(default = "default_author")]
    pub author: String,

    /// Original publication date inside an article
    #[serde(default = "default_date")]
    pub date: String,

    /// Share-count widget inside an article
    #[serde(default = "default_share")]
    pub share: String,

    /// Article body content
    #[serde(default = "default_content")]
    pub content: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            article_title: default_article_title(),
            author: default_author(),
            date: default_date(),
            share: default_share(),
            content: default_content(),
        }
    }
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            locale: Locale::default(),
            settle_delay_secs: default_settle_delay_secs(),
            element_timeout_secs: default_element_timeout_secs(),
            webdriver_url: default_webdriver_url(),
            snapshot_dir: default_snapshot_dir(),
            consent_text: default_consent_text(),
            selectors: Selectors::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Settle delay as a `Duration`
    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    /// Element-poll timeout as a `Duration`
    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }
}

/// Default settle delay in seconds
fn default_settle_delay_secs() -> u64 {
    5
}

/// Default element-poll timeout in seconds
fn default_element_timeout_secs() -> u64 {
    10
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default snapshot output directory
fn default_snapshot_dir() -> String {
    "wordfreq_data".to_string()
}

/// Default consent-control text
fn default_consent_text() -> String {
    "ELFOGADOM".to_string()
}

fn default_article_title() -> String {
    ".cl-title".to_string()
}

fn default_author() -> String {
    ".author__name".to_string()
}

fn default_date() -> String {
    ".history--original".to_string()
}

fn default_share() -> String {
    ".share-network-facebook".to_string()
}

fn default_content() -> String {
    ".article-html-content".to_string()
}
