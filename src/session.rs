//! The browser capability the reporter drives.
//!
//! [`BrowserSession`] is deliberately small so a scripted implementation can
//! stand in for Chrome in tests. [`ChromeSession`] is the real one.

use std::time::Duration;

use tracing::warn;

use crate::browser::Browser;
use crate::config::BrowserConfig;
use crate::element::ElementSnapshot;
use crate::error::Result;
use crate::page::Page;

#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Navigate the session's single tab to `url` and return once the document
    /// is ready-state complete. Fails with `NavigationTimeout` past `timeout`.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// HTTP status of the current document, if the browser reports one.
    async fn response_status(&self) -> Result<Option<u16>>;

    /// Snapshot all elements matching `selector` in document order.
    async fn query_all(&self, selector: &str) -> Result<Vec<ElementSnapshot>>;

    /// Release the session. Called exactly once, on success and error paths.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// One Chrome process with one tab.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
}

impl ChromeSession {
    /// Launch Chrome and open the tab the session navigates.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let browser = Browser::launch(config).await?;
        let opened = browser.new_page().await;
        let page = match opened {
            Ok(page) => page,
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "failed to close browser after launch error");
                }
                return Err(e);
            }
        };
        Ok(Self { browser, page })
    }
}

impl BrowserSession for ChromeSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        self.page.goto_complete(url, timeout).await
    }

    async fn response_status(&self) -> Result<Option<u16>> {
        self.page.response_status().await
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<ElementSnapshot>> {
        self.page.query_selector_all_with_data(selector).await
    }

    async fn close(self) -> Result<()> {
        if let Err(e) = self.page.close().await {
            warn!(error = %e, "failed to close page");
        }
        self.browser.close().await
    }
}
