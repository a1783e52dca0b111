//! Top-list article filter

use regex::Regex;
use once_cell::sync::Lazy;

/// `Namespace:Title` pages (Special:, Help:, Kategoria:, Служебная: ...).
///
/// `_` is a word character, so `Dune:_Part_Two` also counts as namespaced.
static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+:\w").unwrap());

/// The English main page, which tops every month's list
pub const MAIN_PAGE: &str = "Main_Page";

/// "List of ..." title prefixes per language code
pub const LIST_PREFIXES: &[(&str, &str)] = &[
    ("en", "List_of_"),
    ("simple", "List_of_"),
    ("fi", "Luettelo_"),
    ("de", "Liste_"),
    ("fr", "Liste_"),
    ("it", "Lista_"),
    ("pt", "Lista_"),
    ("sv", "Lista_över_"),
    ("nl", "Lijst_van_"),
    ("pl", "Lista_"),
];

/// Check if a top-list entry is a regular content article
pub fn is_content_article(article: &str) -> bool {
    if article == MAIN_PAGE || NAMESPACE_RE.is_match(article) {
        return false;
    }
    !LIST_PREFIXES
        .iter()
        .any(|(_, prefix)| article.starts_with(prefix))
}

/// Drop non-content entries, keeping the view-rank order of the rest
pub fn filter_articles<I, S>(articles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    articles
        .into_iter()
        .map(Into::into)
        .filter(|article| is_content_article(article))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_content_article() {
        assert!(is_content_article("Albert_Einstein"));
        assert!(is_content_article("Oppenheimer_(film)"));
        assert!(!is_content_article("Main_Page"));
        assert!(!is_content_article("Special:Search"));
        assert!(!is_content_article("Wikipedia:Featured_pictures"));
        assert!(!is_content_article("File:Example.jpg"));
    }

    #[test]
    fn test_namespace_prefix_in_other_languages() {
        assert!(!is_content_article("Toiminnot:Haku"));
        assert!(!is_content_article("Служебная:Поиск"));
        assert!(!is_content_article("Spezial:Suche"));
    }

    #[test]
    fn test_colon_without_namespace_shape_is_kept() {
        assert!(is_content_article("AC/DC:_Live"));
        assert!(is_content_article("Re:"));
        assert!(is_content_article(":Leading_colon"));
    }

    #[test]
    fn test_colon_underscore_titles_count_as_namespaced() {
        assert!(!is_content_article("Dune:_Part_Two"));
        assert!(!is_content_article("Avatar:_The_Way_of_Water"));
    }

    #[test]
    fn test_list_prefixes() {
        assert!(!is_content_article("List_of_highest-grossing_films"));
        assert!(!is_content_article("Luettelo_Suomen_kunnista"));
        assert!(is_content_article("Listening"));
        assert!(!is_content_article("Lijst_van_Nederlandse_gemeenten"));
    }

    #[test]
    fn test_filter_preserves_rank_order() {
        let raw = vec![
            "Main_Page",
            "Taylor_Swift",
            "Special:Search",
            "List_of_Marvel_films",
            "Deaths_in_2024",
            "Help:Contents",
            "Oppenheimer_(film)",
        ];
        assert_eq!(
            filter_articles(raw),
            vec!["Taylor_Swift", "Deaths_in_2024", "Oppenheimer_(film)"]
        );
    }

    #[test]
    fn test_filter_output_never_contains_excluded() {
        let raw = vec![
            "Main_Page",
            "Category:Living_people",
            "Portal:Current_events",
            "Luettelo_kaupungeista",
            "Talk:Main_Page",
        ];
        assert!(filter_articles(raw).is_empty());
    }
}
