use crate::words::Locale;
use crate::words::stopwords::{StopwordSet, parse_category_listing};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_set_contains_all_sources() {
        let set = StopwordSet::offline(Locale::Hu);

        // Built-in general list
        assert!(set.contains("hogy"));
        assert!(set.contains("nem"));
        // Supplemental particles and pronouns
        assert!(set.contains("össze"));
        assert!(set.contains("meg"));
    }

    #[test]
    fn test_legacy_character_fix_applied() {
        let set = StopwordSet::offline(Locale::Hu);

        // The source list stores these with the legacy õ; the loaded set
        // must carry the corrected ő form.
        assert!(set.contains("ő"));
        assert!(set.contains("előtt"));
        assert!(set.contains("először"));
        assert!(!set.contains("õ"));
        assert!(!set.contains("elõtt"));
    }

    #[test]
    fn test_set_is_lowercase() {
        let set = StopwordSet::from_words(["Hogy", "NEM"]);
        assert!(set.contains("hogy"));
        assert!(set.contains("nem"));
        assert!(!set.contains("Hogy"));
    }

    #[test]
    fn test_parse_category_listing() {
        let html = r#"
            <html><body>
              <div class="mw-category-group">
                <h3>A</h3>
                <ul>
                  <li><a href="/wiki/akár">akár</a></li>
                  <li><a href="/wiki/ám">ám</a></li>
                </ul>
              </div>
              <div class="mw-category-group">
                <h3>D</h3>
                <ul>
                  <li><a href="/wiki/de">de</a></li>
                </ul>
              </div>
              <div class="unrelated"><ul><li>nope</li></ul></div>
            </body></html>
        "#;

        let words = parse_category_listing(html);
        assert_eq!(words, vec!["akár", "ám", "de"]);
    }

    #[test]
    fn test_parse_category_listing_empty_page() {
        assert!(parse_category_listing("<html><body></body></html>").is_empty());
    }
}
