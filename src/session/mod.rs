pub mod browser;
pub mod extractor;
pub mod navigator;
pub mod orchestrator;

#[cfg(test)]
mod tests;

pub use browser::{Browser, BrowserError, WebClient};
pub use navigator::{NavState, NavigationController};
pub use orchestrator::{Session, WordCounts};
