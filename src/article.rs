//! Article data structures

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Strips everything from the first comma on, and any parenthesized part with its spaces.
static TITLE_NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(,.*)| *\([^)]*\) *").unwrap());

/// A random article as returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Display title, cleaned of disambiguation suffixes
    pub title: String,
    /// Plain text extract
    pub summary: String,
}

impl ArticleSummary {
    /// Build a summary from an upstream page-summary body
    pub fn from_page(page: PageSummary) -> Self {
        Self {
            title: clean_title(&page.title),
            summary: page.extract,
        }
    }
}

/// Body of the REST `page/summary` and `page/random/summary` endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    pub title: String,
    #[serde(default)]
    pub extract: String,
}

/// Body of the pageviews `top` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TopPageviews {
    pub items: Vec<TopItem>,
}

/// One ranked day (or month, for `all-days`) of the pageviews top list
#[derive(Debug, Clone, Deserialize)]
pub struct TopItem {
    pub articles: Vec<TopArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopArticle {
    pub article: String,
}

/// Clean an upstream title for display.
///
/// `"Bonobo (Pan paniscus), great ape"` becomes `"Bonobo"`. Applying this twice
/// gives the same result as applying it once.
pub fn clean_title(title: &str) -> String {
    TITLE_NOISE_RE.replace_all(title, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_strips_parens_and_comma_tail() {
        assert_eq!(clean_title("Bonobo (Pan paniscus), great ape"), "Bonobo");
        assert_eq!(clean_title("Mercury (planet)"), "Mercury");
        assert_eq!(clean_title("Springfield, Illinois"), "Springfield");
    }

    #[test]
    fn test_clean_title_leaves_plain_titles() {
        assert_eq!(clean_title("Paris"), "Paris");
        assert_eq!(clean_title(""), "");
    }

    #[test]
    fn test_clean_title_is_idempotent() {
        for title in [
            "Bonobo (Pan paniscus), great ape",
            "Paris",
            "Python (programming language)",
            "A (b) (c), d, e",
            "Unclosed (paren",
        ] {
            let once = clean_title(title);
            assert_eq!(clean_title(&once), once, "title: {}", title);
        }
    }

    #[test]
    fn test_from_page_passes_extract_through() {
        let page: PageSummary = serde_json::from_str(
            r#"{"title": "Helsinki (city)", "extract": "Helsinki is the capital of Finland.", "pageid": 34420}"#,
        )
        .unwrap();
        let summary = ArticleSummary::from_page(page);
        assert_eq!(summary.title, "Helsinki");
        assert_eq!(summary.summary, "Helsinki is the capital of Finland.");
    }

    #[test]
    fn test_missing_extract_defaults_to_empty() {
        let page: PageSummary = serde_json::from_str(r#"{"title": "Stub"}"#).unwrap();
        assert_eq!(ArticleSummary::from_page(page).summary, "");
    }
}
