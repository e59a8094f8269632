// Re-export modules
pub mod config;
pub mod session;
pub mod snapshot;
pub mod trend;
pub mod words;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use session::{Session, WordCounts};
pub use words::Locale;

use session::WebClient;
use std::error::Error;

/// Builder for one front-page sampling run.
///
/// Connects to a WebDriver server, drives a single browser session over the
/// configured front page, and returns the accumulated word counts.
pub struct Sampler {
    config: ScraperConfig,
}

impl Sampler {
    /// Create a new sampler for the given front-page URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: ScraperConfig::new(start_url),
        }
    }

    /// Set the locale used for stopwords and lemmatization
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Set the settle delay in seconds applied after navigation actions
    pub fn with_settle_delay(mut self, seconds: u64) -> Self {
        self.config.settle_delay_secs = seconds;
        self
    }

    /// Set the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Run the sampling session and return the word-count aggregate
    pub async fn run(mut self) -> Result<WordCounts, Box<dyn Error>> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        let browser = WebClient::connect(&self.config.webdriver_url).await?;
        let session = Session::new(browser, self.config);
        Ok(session.run().await?)
    }
}
