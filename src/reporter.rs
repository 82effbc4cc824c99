use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{BrowserConfig, DEFAULT_LOAD_TIMEOUT};
use crate::element::ElementSnapshot;
use crate::error::{Error, Result};
use crate::navigation::{
    direct_guess_url, find_matching_link, normalize_hint, normalize_url, NavigationOutcome,
};
use crate::report::{FetchResult, Heading, Report, NO_PARAGRAPH};
use crate::session::{BrowserSession, ChromeSession};

pub const HEADING_SELECTOR: &str = "h1, h2";
pub const PARAGRAPH_SELECTOR: &str = "p";
pub const LINK_SELECTOR: &str = "a";
pub const MAX_HEADINGS: usize = 5;

/// Drives one browser session through the initial page and, optionally, one
/// secondary page.
pub struct PageReporter<S> {
    session: S,
    load_timeout: Duration,
}

impl<S: BrowserSession> PageReporter<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    /// Build the report for `raw_url`. Only failures on the initial page are
    /// returned as errors; target-page problems end up in the navigation outcome.
    pub async fn run(&mut self, raw_url: &str, target_hint: Option<&str>) -> Result<Report> {
        let base_url = normalize_url(raw_url);
        let load_duration = self.load(&base_url).await?;
        let initial = self.extract(&base_url, load_duration).await?;

        let Some(hint) = normalize_hint(target_hint) else {
            return Ok(Report {
                initial,
                navigation: NavigationOutcome::NotRequested,
                navigated: None,
            });
        };

        // Snapshot before leaving the page; the direct guess replaces the document.
        let anchors = self.session.query_all(LINK_SELECTOR).await;

        let guessed = self.try_direct_guess(&base_url, &hint).await;
        let (navigation, navigated) = match guessed {
            Ok(page) => (NavigationOutcome::Navigated(page.url.clone()), Some(page)),
            Err(e) => {
                debug!(error = %e, "direct guess failed, searching links");
                let searched = self.try_link_search(anchors, &hint).await;
                match searched {
                    Ok(Some(page)) => (NavigationOutcome::Navigated(page.url.clone()), Some(page)),
                    Ok(None) => (NavigationOutcome::NotFound(hint), None),
                    Err(e) => {
                        warn!(error = %e, "navigation to target page failed");
                        (NavigationOutcome::Failed(e.to_string()), None)
                    }
                }
            }
        };

        Ok(Report {
            initial,
            navigation,
            navigated,
        })
    }

    /// Release the session.
    pub async fn close(self) -> Result<()> {
        self.session.close().await
    }

    async fn load(&mut self, url: &str) -> Result<Duration> {
        debug!(url, "navigating");
        let started = Instant::now();
        self.session.navigate(url, self.load_timeout).await?;
        let elapsed = started.elapsed();
        info!(url, seconds = elapsed.as_secs_f64(), "page loaded");
        Ok(elapsed)
    }

    async fn extract(&self, url: &str, load_duration: Duration) -> Result<FetchResult> {
        let headings = self
            .session
            .query_all(HEADING_SELECTOR)
            .await?
            .into_iter()
            .take(MAX_HEADINGS)
            .map(|el| Heading {
                tag: el.tag,
                text: el.text.trim().to_string(),
            })
            .collect();

        let first_paragraph = self
            .session
            .query_all(PARAGRAPH_SELECTOR)
            .await?
            .into_iter()
            .next()
            .map(|p| p.text.trim().to_string())
            .unwrap_or_else(|| NO_PARAGRAPH.to_string());

        Ok(FetchResult {
            url: url.to_string(),
            load_duration,
            headings,
            first_paragraph,
        })
    }

    async fn load_and_extract(&mut self, url: &str) -> Result<FetchResult> {
        let load_duration = self.load(url).await?;
        self.extract(url, load_duration).await
    }

    async fn try_direct_guess(&mut self, base_url: &str, hint: &str) -> Result<FetchResult> {
        let url = direct_guess_url(base_url, hint);
        let load_duration = self.load(&url).await?;
        if let Some(status) = self.session.response_status().await? {
            if status >= 400 {
                return Err(Error::HttpStatus { url, status });
            }
        }
        self.extract(&url, load_duration).await
    }

    async fn try_link_search(
        &mut self,
        anchors: Result<Vec<ElementSnapshot>>,
        hint: &str,
    ) -> Result<Option<FetchResult>> {
        let anchors = anchors?;
        let Some(link) = find_matching_link(&anchors, hint) else {
            return Ok(None);
        };
        let href = match link.href.as_deref() {
            Some(href) if !href.is_empty() => href.to_string(),
            _ => return Err(Error::NavigationError("matched link has no address".into())),
        };
        debug!(text = %link.text, %href, "following matching link");
        self.load_and_extract(&href).await.map(Some)
    }
}

/// Launch Chrome, build the report and close the browser again, whether or
/// not the report succeeded.
pub async fn run(config: &BrowserConfig, raw_url: &str, target_hint: Option<&str>) -> Result<Report> {
    let session = ChromeSession::launch(config).await?;
    run_with(session, config.load_timeout, raw_url, target_hint).await
}

/// Build the report on an already open session, then close it on every path.
pub async fn run_with<S: BrowserSession>(
    session: S,
    load_timeout: Duration,
    raw_url: &str,
    target_hint: Option<&str>,
) -> Result<Report> {
    let mut reporter = PageReporter::new(session).with_load_timeout(load_timeout);
    let report = reporter.run(raw_url, target_hint).await;
    if let Err(e) = reporter.close().await {
        warn!(error = %e, "failed to close browser");
    }
    report
}
