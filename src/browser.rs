use std::time::Duration;

use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tracing::debug;

use crate::config::BrowserConfig;
use crate::error::{Error, Result};
use crate::page::Page;

/// Chrome flags passed on every launch.
/// chromiumoxide adds the `--` prefix itself.
const LAUNCH_ARGS: &[&str] = &["disable-gpu", "no-default-browser-check", "mute-audio"];

/// CDP request timeout for a given load timeout; kept above the load timeout.
fn request_timeout(load_timeout: Duration) -> Duration {
    load_timeout.saturating_mul(2)
}

/// An owned Chrome process plus the task pumping its CDP events.
pub struct Browser {
    browser: CrBrowser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launch Chrome with the given configuration.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        for arg in LAUNCH_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        // Let our own load timeout fire before chromiumoxide's request timeout.
        builder = builder
            .request_timeout(request_timeout(config.load_timeout))
            .viewport(Viewport {
                width: config.viewport_width,
                height: config.viewport_height,
                device_scale_factor: None,
                emulating_mobile: false,
                is_landscape: false,
                has_touch: false,
            });

        let cr_config = builder.build().map_err(Error::LaunchError)?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|source| Error::Launch {
                context: "could not start Chrome",
                source,
            })?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        debug!(headless = config.headless, "browser launched");

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a blank tab. Navigation happens through [`Page::goto_complete`].
    pub async fn new_page(&self) -> Result<Page> {
        let cr_page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|source| Error::Launch {
                context: "could not open a tab",
                source,
            })?;
        Ok(Page::new(cr_page))
    }

    /// Close the browser and wait for the process to exit.
    pub async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        let waited = self.browser.wait().await;
        self.handler_task.abort();
        closed?;
        waited?;
        debug!("browser closed");
        Ok(())
    }
}
