
mod navigator_tests;

pub use mock::{MockArticle, MockBrowser};
