use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser launch failed: {0}")]
    LaunchError(String),

    #[error("Browser launch failed: {context}")]
    Launch {
        context: &'static str,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("Navigation failed: {0}")]
    NavigationError(String),

    #[error("Navigation to {url} failed")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("Timed out after {}s waiting for {url} to finish loading", .timeout.as_secs_f64())]
    NavigationTimeout { url: String, timeout: Duration },

    #[error("{url} answered with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("JavaScript error: {0}")]
    JsError(String),

    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use chromiumoxide::error::CdpError;

    use super::*;

    #[test]
    fn navigation_failure_keeps_driver_cause() {
        let err = Error::Navigation {
            url: "https://example.com".into(),
            source: CdpError::Timeout,
        };
        assert_eq!(err.to_string(), "Navigation to https://example.com failed");
        let cause = err.source().expect("nested cause");
        assert_eq!(cause.to_string(), CdpError::Timeout.to_string());
    }

    #[test]
    fn launch_failure_keeps_driver_cause() {
        let err = Error::Launch {
            context: "could not start Chrome",
            source: CdpError::Timeout,
        };
        assert_eq!(err.to_string(), "Browser launch failed: could not start Chrome");
        assert!(err.source().is_some());
    }
}
