use serde::{Deserialize, Serialize};

/// Plain data copied out of a DOM element in a single evaluation.
///
/// Nothing here refers back to the live document, so a snapshot stays valid
/// after the page navigates away.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementSnapshot {
    /// Lower-case tag name, e.g. `h1`.
    pub tag: String,
    /// Trimmed visible text.
    pub text: String,
    /// Resolved absolute `href`, when the element carries one.
    #[serde(default)]
    pub href: Option<String>,
}

impl ElementSnapshot {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Case-insensitive link test used by the link search: the href or the
    /// text contains `hint`, or the href ends with `/hint`.
    pub fn matches_hint(&self, hint: &str) -> bool {
        let hint = hint.to_lowercase();
        if hint.is_empty() {
            return false;
        }
        let href = self.href.as_deref().unwrap_or_default().to_lowercase();
        let text = self.text.to_lowercase();
        href.contains(&hint) || text.contains(&hint) || href.ends_with(&format!("/{hint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_text_case_insensitively() {
        let link = ElementSnapshot::new("a", "About Us").with_href("https://example.com/team");
        assert!(link.matches_hint("about"));
        assert!(link.matches_hint("ABOUT"));
    }

    #[test]
    fn matches_href_substring() {
        let link = ElementSnapshot::new("a", "Reach us").with_href("https://example.com/Contact-Form");
        assert!(link.matches_hint("contact"));
    }

    #[test]
    fn rejects_unrelated_links() {
        let link = ElementSnapshot::new("a", "Blog").with_href("https://example.com/blog");
        assert!(!link.matches_hint("pricing"));
        assert!(!link.matches_hint(""));
    }

    #[test]
    fn missing_href_still_matches_on_text() {
        let link = ElementSnapshot::new("a", "Careers");
        assert!(link.matches_hint("career"));
    }
}
