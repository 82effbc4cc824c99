use std::time::Duration;

use chromiumoxide::page::Page as CrPage;
use tracing::{debug, trace};

use crate::element::ElementSnapshot;
use crate::error::{Error, Result};

/// Interval between `document.readyState` polls.
const READY_STATE_POLL: Duration = Duration::from_millis(100);

/// Wrapper around a chromiumoxide Page exposing only what the reporter needs.
pub struct Page {
    inner: CrPage,
}

impl Page {
    pub(crate) fn new(inner: CrPage) -> Self {
        Self { inner }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to `url` and wait until the document reports
    /// `readyState == "complete"`. The whole operation is bounded by `timeout`.
    pub async fn goto_complete(&self, url: &str, timeout: Duration) -> Result<()> {
        let load = async {
            self.inner
                .goto(url)
                .await
                .map_err(|source| Error::Navigation {
                    url: url.to_string(),
                    source,
                })?;
            self.wait_for_ready_state().await;
            Ok::<(), Error>(())
        };

        tokio::time::timeout(timeout, load)
            .await
            .map_err(|_| Error::NavigationTimeout {
                url: url.to_string(),
                timeout,
            })?
    }

    /// Poll `document.readyState` until it is `"complete"`.
    /// Evaluation errors while the document is being swapped are retried.
    async fn wait_for_ready_state(&self) {
        loop {
            match self.ready_state().await {
                Ok(state) if state == "complete" => return,
                Ok(state) => trace!(%state, "document not ready yet"),
                Err(e) => trace!(error = %e, "readyState probe failed"),
            }
            tokio::time::sleep(READY_STATE_POLL).await;
        }
    }

    async fn ready_state(&self) -> Result<String> {
        self.inner
            .evaluate("document.readyState")
            .await
            .map_err(|e| Error::JsError(e.to_string()))?
            .into_value::<String>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// HTTP status of the main document, from the Navigation Timing entry.
    /// `None` when the browser does not report one (e.g. `about:` or `file:`).
    pub async fn response_status(&self) -> Result<Option<u16>> {
        let js = r#"
            (() => {
                const entry = performance.getEntriesByType('navigation')[0];
                return entry && entry.responseStatus ? entry.responseStatus : 0;
            })()
        "#;
        let status: u16 = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?
            .into_value()
            .map_err(|e| Error::JsError(e.to_string()))?;
        Ok((status != 0).then_some(status))
    }

    // ── Element Queries ─────────────────────────────────────────────

    /// Snapshot every element matching `selector`, in document order.
    pub async fn query_selector_all_with_data(&self, selector: &str) -> Result<Vec<ElementSnapshot>> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            JSON.stringify(
                Array.from(document.querySelectorAll({selector_js})).map(el => ({{
                    tag: el.tagName.toLowerCase(),
                    text: (el.innerText || el.textContent || '').trim(),
                    href: el.href ? String(el.href) : null
                }}))
            )
            "#,
        );
        let json_str: String = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?
            .into_value()
            .map_err(|e| Error::JsError(e.to_string()))?;

        let elements: Vec<ElementSnapshot> =
            serde_json::from_str(&json_str).map_err(|e| Error::JsError(e.to_string()))?;
        debug!(selector, count = elements.len(), "queried elements");
        Ok(elements)
    }

    /// Close this tab.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}
