pub mod browser;
pub mod config;
pub mod element;
pub mod error;
pub mod navigation;
pub mod page;
pub mod report;
pub mod reporter;
pub mod session;

pub use config::{BrowserBuilder, BrowserConfig};
pub use element::ElementSnapshot;
pub use error::{Error, Result};
pub use navigation::NavigationOutcome;
pub use report::{FetchResult, Heading, Report};
pub use reporter::PageReporter;
pub use session::{BrowserSession, ChromeSession};
