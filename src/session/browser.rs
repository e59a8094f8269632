use fantoccini::{Client, ClientBuilder, Locator, error::CmdError};
use std::error::Error;
use std::fmt;

/// Errors surfaced by a browser session.
///
/// `NotFound` and `Stale` are transient element-level conditions handled at
/// the point of use; `Session` means the browser itself is unusable and the
/// run must abort.
#[derive(Debug)]
pub enum BrowserError {
    /// The requested element is not present on the page
    NotFound(String),
    /// The element handle no longer matches live content (the page re-rendered)
    Stale(String),
    /// The WebDriver session is unusable
    Session(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::NotFound(what) => write!(f, "element not found: {}", what),
            BrowserError::Stale(what) => write!(f, "stale element reference: {}", what),
            BrowserError::Session(msg) => write!(f, "browser session error: {}", msg),
        }
    }
}

impl Error for BrowserError {}

impl BrowserError {
    /// Whether this error means the whole session is unusable
    pub fn is_fatal(&self) -> bool {
        matches!(self, BrowserError::Session(_))
    }
}

/// Capability interface over one browser page.
///
/// The navigation controller and the article extractor only ever talk to
/// this trait, so both can be exercised against a scripted fake with no
/// WebDriver server.
#[allow(async_fn_in_trait)]
pub trait Browser {
    /// Navigate the page to `url`
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Navigate back in the page history
    async fn back(&mut self) -> Result<(), BrowserError>;

    /// Current page location
    async fn current_url(&mut self) -> Result<String, BrowserError>;

    /// Text of the first element matching a CSS selector
    async fn element_text(&mut self, selector: &str) -> Result<String, BrowserError>;

    /// Texts of all elements matching a CSS selector, in document order
    async fn all_element_texts(&mut self, selector: &str) -> Result<Vec<String>, BrowserError>;

    /// Click the element at `index` among those matching a CSS selector
    async fn click_nth(&mut self, selector: &str, index: usize) -> Result<(), BrowserError>;

    /// Click the first element whose text contains `text`
    async fn click_by_text(&mut self, text: &str) -> Result<(), BrowserError>;

    /// Scroll the first element matching a CSS selector into view
    async fn scroll_into_view(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Release the underlying browser resources; terminal
    async fn close(self) -> Result<(), BrowserError>;
}

/// Production `Browser` backed by a fantoccini WebDriver client
pub struct WebClient {
    client: Client,
}

impl WebClient {
    /// Connect to a WebDriver server (e.g. ChromeDriver or geckodriver)
    pub async fn connect(webdriver_url: &str) -> Result<Self, BrowserError> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                Ok(Self { client })
            }
            Err(e) => Err(BrowserError::Session(format!(
                "failed to connect to WebDriver at {}: {}",
                webdriver_url, e
            ))),
        }
    }
}

/// Classify a fantoccini error for an element-level operation
fn element_error(e: CmdError, what: &str) -> BrowserError {
    if e.is_no_such_element() {
        return BrowserError::NotFound(what.to_string());
    }
    let msg = e.to_string();
    if msg.contains("stale element reference") {
        BrowserError::Stale(what.to_string())
    } else if msg.contains("invalid session id") || msg.contains("Unable to find session") {
        BrowserError::Session(msg)
    } else {
        // Anything else element-level is treated as the element being
        // unusable, which callers handle the same way as absence
        BrowserError::NotFound(format!("{}: {}", what, msg))
    }
}

/// Classify a fantoccini error for a navigation-level operation
fn navigation_error(e: CmdError, what: &str) -> BrowserError {
    BrowserError::Session(format!("{}: {}", what, e))
}

impl Browser for WebClient {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| navigation_error(e, "goto"))
    }

    async fn back(&mut self) -> Result<(), BrowserError> {
        self.client
            .back()
            .await
            .map_err(|e| navigation_error(e, "back"))
    }

    async fn current_url(&mut self) -> Result<String, BrowserError> {
        self.client
            .current_url()
            .await
            .map(|u| u.to_string())
            .map_err(|e| navigation_error(e, "current_url"))
    }

    async fn element_text(&mut self, selector: &str) -> Result<String, BrowserError> {
        let element = self
            .client
            .find(Locator::Css(selector))
            .await
            .map_err(|e| element_error(e, selector))?;
        element.text().await.map_err(|e| element_error(e, selector))
    }

    async fn all_element_texts(&mut self, selector: &str) -> Result<Vec<String>, BrowserError> {
        let elements = self
            .client
            .find_all(Locator::Css(selector))
            .await
            .map_err(|e| element_error(e, selector))?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            texts.push(element.text().await.map_err(|e| element_error(e, selector))?);
        }
        Ok(texts)
    }

    async fn click_nth(&mut self, selector: &str, index: usize) -> Result<(), BrowserError> {
        let elements = self
            .client
            .find_all(Locator::Css(selector))
            .await
            .map_err(|e| element_error(e, selector))?;

        let element = elements.get(index).ok_or_else(|| {
            BrowserError::NotFound(format!("{}[{}] of {}", selector, index, elements.len()))
        })?;
        element.click().await.map_err(|e| element_error(e, selector))
    }

    async fn click_by_text(&mut self, text: &str) -> Result<(), BrowserError> {
        let xpath = format!("//*[contains(text(), '{}')]", text);
        let element = self
            .client
            .find(Locator::XPath(&xpath))
            .await
            .map_err(|e| element_error(e, text))?;
        element.click().await.map_err(|e| element_error(e, text))
    }

    async fn scroll_into_view(&mut self, selector: &str) -> Result<(), BrowserError> {
        let element = self
            .client
            .find(Locator::Css(selector))
            .await
            .map_err(|e| element_error(e, selector))?;

        let arg = serde_json::to_value(&element)
            .map_err(|e| BrowserError::Session(format!("serializing element handle: {}", e)))?;
        self.client
            .execute("arguments[0].scrollIntoView();", vec![arg])
            .await
            .map_err(|e| element_error(e, selector))?;
        Ok(())
    }

    async fn close(self) -> Result<(), BrowserError> {
        self.client
            .close()
            .await
            .map_err(|e| navigation_error(e, "close"))
    }
}
