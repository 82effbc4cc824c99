use std::fmt;
use std::time::Duration;

use crate::navigation::NavigationOutcome;

/// Text used when a page has no `<p>` element.
pub const NO_PARAGRAPH: &str = "No paragraph found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Lower-case tag name as reported by the DOM.
    pub tag: String,
    pub text: String,
}

/// Content extracted from one loaded page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub url: String,
    pub load_duration: Duration,
    pub headings: Vec<Heading>,
    pub first_paragraph: String,
}

impl FetchResult {
    pub fn load_duration_seconds(&self) -> f64 {
        self.load_duration.as_secs_f64()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub initial: FetchResult,
    pub navigation: NavigationOutcome,
    pub navigated: Option<FetchResult>,
}

fn write_page(f: &mut fmt::Formatter<'_>, page: &FetchResult, section: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "--- {section}HEADINGS ---")?;
    if page.headings.is_empty() {
        writeln!(f, "(none)")?;
    }
    for heading in &page.headings {
        writeln!(f, "{}: {}", heading.tag.to_uppercase(), heading.text)?;
    }

    writeln!(f)?;
    writeln!(f, "--- {section}FIRST PARAGRAPH ---")?;
    writeln!(f, "{}", page.first_paragraph)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== WEB PAGE ANALYSIS REPORT ===")?;
        writeln!(f, "Initial URL: {}", self.initial.url)?;
        writeln!(
            f,
            "Page Load Time: {:.2} seconds",
            self.initial.load_duration_seconds()
        )?;
        write_page(f, &self.initial, "")?;

        if let Some(ref navigated) = self.navigated {
            writeln!(f)?;
            writeln!(f, "=== NAVIGATED PAGE ===")?;
            writeln!(f, "URL: {}", navigated.url)?;
            writeln!(
                f,
                "Page Load Time: {:.2} seconds",
                navigated.load_duration_seconds()
            )?;
            write_page(f, navigated, "NAVIGATED PAGE ")?;
        }

        writeln!(f)?;
        writeln!(f, "--- PAGE NAVIGATION ---")?;
        writeln!(f, "{}", self.navigation)?;
        writeln!(f)?;
        write!(f, "=== END OF REPORT ===")
    }
}
