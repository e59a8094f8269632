use crate::session::browser::{Browser, BrowserError};
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Poll interval for bounded element waits
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Neutral locations a browser can report after a failed back-navigation
const BLANK_LOCATIONS: &[&str] = &["data:,", "about:blank"];

/// Navigation states of one scraping session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Session created, nothing loaded yet
    Init,
    /// Landing page loaded, consent banner may be up
    ConsentPending,
    /// On the front page
    Home,
    /// Inside one article
    ArticleOpen,
    /// Browser released; terminal
    Closed,
}

/// Drives the browser through the session state machine.
///
/// `Init → ConsentPending → Home → ArticleOpen → Home … → Closed`. Every
/// navigation is followed by a fixed settle delay for dynamic rendering;
/// element presence is awaited with a bounded poll whose timeout is a soft
/// failure for optional elements.
pub struct NavigationController<B: Browser> {
    browser: Option<B>,
    home_url: String,
    settle: Duration,
    state: NavState,
}

impl<B: Browser> NavigationController<B> {
    pub fn new(browser: B, home_url: &str, settle: Duration) -> Self {
        Self {
            browser: Some(browser),
            home_url: home_url.to_string(),
            settle,
            state: NavState::Init,
        }
    }

    /// Current navigation state
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Mutable access to the underlying browser, for extraction
    pub fn browser_mut(&mut self) -> &mut B {
        self.browser.as_mut().expect("session already closed")
    }

    /// `Init → ConsentPending`: load the landing URL and let it render
    pub async fn open(&mut self) -> Result<(), BrowserError> {
        let home = self.home_url.clone();
        ::log::info!("Opening {}", home);
        self.browser_mut().goto(&home).await?;
        self.settle_wait().await;
        self.state = NavState::ConsentPending;
        Ok(())
    }

    /// `ConsentPending → Home`: activate the consent control if present.
    ///
    /// The banner may already be absent, so a bounded poll that never finds
    /// it is logged and tolerated rather than failing the run.
    pub async fn accept_consent(
        &mut self,
        consent_text: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.browser_mut().click_by_text(consent_text).await {
                Ok(()) => {
                    ::log::info!("Accepted consent banner");
                    self.settle_wait().await;
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(_) if Instant::now() >= deadline => {
                    ::log::info!("No consent banner found; continuing");
                    break;
                }
                Err(_) => sleep(POLL_INTERVAL).await,
            }
        }
        self.state = NavState::Home;
        Ok(())
    }

    /// Poll until an element is present, up to `timeout`.
    ///
    /// Returns whether the element showed up; a timeout is a soft failure
    /// that the caller logs and moves past.
    pub async fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.browser_mut().element_text(selector).await.is_ok() {
                return true;
            }
            if Instant::now() >= deadline {
                ::log::info!("Timed out waiting for element: {}", selector);
                return false;
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// `Home → ArticleOpen`: activate the front-page article link at
    /// `index` into the currently rendered list
    pub async fn open_article(&mut self, selector: &str, index: usize) -> Result<(), BrowserError> {
        self.browser_mut().click_nth(selector, index).await?;
        self.settle_wait().await;
        self.state = NavState::ArticleOpen;
        Ok(())
    }

    /// `ArticleOpen → Home`: navigate back to the front page.
    ///
    /// A back-navigation can leave the browser on a blank neutral location;
    /// that case is corrected by re-navigating to the home URL explicitly.
    pub async fn return_home(&mut self) -> Result<(), BrowserError> {
        let home = self.home_url.clone();
        let location = self.browser_mut().current_url().await?;

        if is_blank(&location) {
            ::log::info!("Browser on blank location {}; re-navigating home", location);
            self.browser_mut().goto(&home).await?;
            self.settle_wait().await;
        } else if location != home {
            self.browser_mut().back().await?;
            self.settle_wait().await;

            let after_back = self.browser_mut().current_url().await?;
            if is_blank(&after_back) {
                ::log::info!("Back-navigation landed on {}; re-navigating home", after_back);
                self.browser_mut().goto(&home).await?;
                self.settle_wait().await;
            }
        }

        self.state = NavState::Home;
        Ok(())
    }

    /// `Home → Closed`: release the browser handle. Terminal and
    /// irreversible; safe to call more than once on failure paths.
    pub async fn close(&mut self) -> Result<(), BrowserError> {
        if let Some(browser) = self.browser.take() {
            ::log::info!("Closing session");
            browser.close().await?;
        }
        self.state = NavState::Closed;
        Ok(())
    }

    async fn settle_wait(&self) {
        sleep(self.settle).await;
    }
}

/// Whether a location is one of the known blank/neutral values
fn is_blank(location: &str) -> bool {
    BLANK_LOCATIONS.contains(&location)
}
