//! URL handling and the secondary-page fallback heuristic.

use std::fmt;

use crate::element::ElementSnapshot;

/// What happened when the reporter tried to reach the target page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    NotRequested,
    Navigated(String),
    NotFound(String),
    Failed(String),
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequested => write!(f, "No target page specified"),
            Self::Navigated(url) => write!(f, "Navigated to: {url}"),
            Self::NotFound(query) => write!(f, "Could not find link containing: {query}"),
            Self::Failed(reason) => write!(f, "Error navigating to target page: {reason}"),
        }
    }
}

/// Prefix `https://` unless the input already starts with `http`.
/// The input is otherwise left untouched.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Strip leading slashes from a target hint. Empty hints count as absent.
pub fn normalize_hint(raw: Option<&str>) -> Option<String> {
    raw.map(|hint| hint.trim_start_matches('/'))
        .filter(|hint| !hint.is_empty())
        .map(str::to_string)
}

/// Join base and hint with exactly one slash.
pub fn direct_guess_url(base: &str, hint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        hint.trim_matches('/')
    )
}

/// First anchor, in document order, that matches `hint`.
pub fn find_matching_link<'a>(
    anchors: &'a [ElementSnapshot],
    hint: &str,
) -> Option<&'a ElementSnapshot> {
    anchors.iter().find(|anchor| anchor.matches_hint(hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        for input in [" example.com", "example.com/path ", "ftp.example.com"] {
            assert_eq!(normalize_url(input), format!("https://{input}"));
        }
    }

    #[test]
    fn normalize_keeps_http_prefixed_input() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
        assert_eq!(normalize_url("httpbin.org"), "httpbin.org");
        assert_eq!(normalize_url(" http://x"), "https:// http://x");
    }

    #[test]
    fn hint_leading_slashes_are_stripped() {
        assert_eq!(normalize_hint(Some("/contact")).as_deref(), Some("contact"));
        assert_eq!(normalize_hint(Some("about")).as_deref(), Some("about"));
        assert_eq!(normalize_hint(Some("/")), None);
        assert_eq!(normalize_hint(Some(" /about ")).as_deref(), Some(" /about "));
        assert_eq!(normalize_hint(None), None);
    }

    #[test]
    fn direct_guess_uses_single_slash() {
        assert_eq!(direct_guess_url("https://example.com/", "/about/"), "https://example.com/about");
        assert_eq!(direct_guess_url("https://example.com", "about"), "https://example.com/about");
    }

    #[test]
    fn first_match_in_document_order_wins() {
        let anchors = vec![
            ElementSnapshot::new("a", "Home").with_href("https://example.com/"),
            ElementSnapshot::new("a", "About Us").with_href("https://example.com/about-us"),
            ElementSnapshot::new("a", "About the team").with_href("https://example.com/team"),
        ];
        let found = find_matching_link(&anchors, "about").map(|a| a.href.as_deref());
        assert_eq!(found, Some(Some("https://example.com/about-us")));
        assert!(find_matching_link(&anchors, "pricing").is_none());
    }

    #[test]
    fn status_lines() {
        assert_eq!(NavigationOutcome::NotRequested.to_string(), "No target page specified");
        assert_eq!(
            NavigationOutcome::Navigated("https://example.com/about".into()).to_string(),
            "Navigated to: https://example.com/about"
        );
        assert_eq!(
            NavigationOutcome::NotFound("pricing".into()).to_string(),
            "Could not find link containing: pricing"
        );
        assert_eq!(
            NavigationOutcome::Failed("boom".into()).to_string(),
            "Error navigating to target page: boom"
        );
    }
}
