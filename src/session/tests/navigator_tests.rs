use crate::session::browser::Browser;
use crate::session::navigator::{NavState, NavigationController};
use crate::session::tests::{MockArticle, MockBrowser};
use std::time::Duration;

const HOME: &str = "https://news.example/";

fn controller(browser: MockBrowser) -> NavigationController<MockBrowser> {
    NavigationController::new(browser, HOME, Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_reaches_consent_pending() {
        let browser = MockBrowser::new(HOME, true, vec![]);
        let events = browser.events();
        let mut nav = controller(browser);

        assert_eq!(nav.state(), NavState::Init);
        nav.open().await.unwrap();
        assert_eq!(nav.state(), NavState::ConsentPending);
        assert!(events.lock().unwrap().contains(&format!("goto {}", HOME)));
    }

    #[tokio::test]
    async fn test_consent_accepted_when_present() {
        let browser = MockBrowser::new(HOME, true, vec![]);
        let events = browser.events();
        let mut nav = controller(browser);

        nav.open().await.unwrap();
        nav.accept_consent("ELFOGADOM", Duration::ZERO).await.unwrap();
        assert_eq!(nav.state(), NavState::Home);
        assert!(
            events
                .lock()
                .unwrap()
                .contains(&"click_text ELFOGADOM".to_string())
        );
    }

    #[tokio::test]
    async fn test_absent_consent_banner_is_tolerated() {
        let browser = MockBrowser::new(HOME, false, vec![]);
        let mut nav = controller(browser);

        nav.open().await.unwrap();
        // Banner never shows up; the bounded wait expires and the run goes on
        nav.accept_consent("ELFOGADOM", Duration::ZERO).await.unwrap();
        assert_eq!(nav.state(), NavState::Home);
    }

    #[tokio::test]
    async fn test_return_home_via_back() {
        let article = MockArticle::new("Cím", "https://news.example/cikk/1", Some("szöveg"));
        let browser = MockBrowser::new(HOME, false, vec![article]);
        let mut nav = controller(browser);

        nav.open().await.unwrap();
        nav.accept_consent("ELFOGADOM", Duration::ZERO).await.unwrap();
        nav.open_article(".cl-title", 0).await.unwrap();
        assert_eq!(nav.state(), NavState::ArticleOpen);

        nav.return_home().await.unwrap();
        assert_eq!(nav.state(), NavState::Home);
        assert_eq!(nav.browser_mut().current_url().await.unwrap(), HOME);
    }

    #[tokio::test]
    async fn test_blank_location_after_back_is_corrected() {
        let article = MockArticle::new("Cím", "https://news.example/cikk/1", Some("szöveg"));
        let mut browser = MockBrowser::new(HOME, false, vec![article]);
        browser.blank_backs_remaining = 1;
        let mut nav = controller(browser);

        nav.open().await.unwrap();
        nav.accept_consent("ELFOGADOM", Duration::ZERO).await.unwrap();
        nav.open_article(".cl-title", 0).await.unwrap();

        nav.return_home().await.unwrap();
        // Postcondition is always the home location, never the blank one
        assert_eq!(nav.browser_mut().current_url().await.unwrap(), HOME);
        assert_eq!(nav.state(), NavState::Home);
    }

    #[tokio::test]
    async fn test_blank_current_location_is_corrected_without_back() {
        let mut browser = MockBrowser::new(HOME, false, vec![]);
        browser.set_location("data:,");
        let events = browser.events();
        let mut nav = controller(browser);

        nav.return_home().await.unwrap();
        assert_eq!(nav.browser_mut().current_url().await.unwrap(), HOME);
        // Corrected by explicit re-navigation, not by going back
        let log = events.lock().unwrap();
        assert!(log.contains(&format!("goto {}", HOME)));
        assert!(!log.contains(&"back".to_string()));
    }

    #[tokio::test]
    async fn test_return_home_is_noop_when_already_home() {
        let mut browser = MockBrowser::new(HOME, false, vec![]);
        browser.set_location(HOME);
        let events = browser.events();
        let mut nav = controller(browser);

        nav.return_home().await.unwrap();
        assert_eq!(nav.state(), NavState::Home);
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_close_is_terminal_and_repeatable() {
        let browser = MockBrowser::new(HOME, false, vec![]);
        let events = browser.events();
        let mut nav = controller(browser);

        nav.close().await.unwrap();
        assert_eq!(nav.state(), NavState::Closed);
        assert!(events.lock().unwrap().contains(&"close".to_string()));

        // A second close on a failure path must not panic or double-release
        nav.close().await.unwrap();
        assert_eq!(events.lock().unwrap().iter().filter(|e| *e == "close").count(), 1);
    }

    #[tokio::test]
    async fn test_wait_for_element_soft_timeout() {
        let article = MockArticle::new("Cím", "https://news.example/cikk/1", Some("szöveg"));
        let browser = MockBrowser::new(HOME, false, vec![article]);
        let mut nav = controller(browser);

        // Not inside an article, so the content element never appears
        assert!(!nav.wait_for_element(".article-html-content", Duration::ZERO).await);

        nav.open_article(".cl-title", 0).await.unwrap();
        assert!(nav.wait_for_element(".article-html-content", Duration::ZERO).await);
    }
}
