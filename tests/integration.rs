//! Real-browser tests. They need a local Chrome/Chromium and network access:
//! `cargo test -- --ignored`

use std::time::Duration;

use page_reporter::{reporter, BrowserBuilder, BrowserSession, NavigationOutcome};

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn test_launch_and_navigate() {
    let mut session = BrowserBuilder::new()
        .headless(true)
        .build()
        .await
        .expect("Failed to launch browser");

    session
        .navigate("https://example.com", Duration::from_secs(10))
        .await
        .expect("Failed to open page");

    let headings = session.query_all("h1").await.expect("Failed to query h1");
    assert_eq!(headings[0].text, "Example Domain");
    assert_eq!(headings[0].tag, "h1");

    let status = session.response_status().await.expect("Failed to read status");
    assert_eq!(status, Some(200));

    session.close().await.expect("Failed to close browser");
}

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn test_links_are_resolved() {
    let mut session = BrowserBuilder::new()
        .build()
        .await
        .expect("Failed to launch browser");

    session
        .navigate("https://example.com", Duration::from_secs(10))
        .await
        .expect("Failed to open page");

    let links = session.query_all("a").await.expect("Failed to get links");
    assert!(!links.is_empty(), "Expected at least one link");
    assert!(links
        .iter()
        .all(|l| l.href.as_deref().is_some_and(|h| h.starts_with("http"))));

    session.close().await.expect("Failed to close browser");
}

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn test_report_for_example_com() {
    let config = BrowserBuilder::new().build_config();

    let report = reporter::run(&config, "example.com", None)
        .await
        .expect("Failed to build report");

    assert_eq!(report.initial.url, "https://example.com");
    assert!(report.initial.load_duration_seconds() >= 0.0);
    assert_eq!(report.navigation, NavigationOutcome::NotRequested);

    let text = report.to_string();
    assert!(text.contains("Initial URL: https://example.com"));
    assert!(text.contains("H1: Example Domain"));
    assert!(text.contains("No target page specified"));
}

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn test_unresolvable_host_is_an_error() {
    let config = BrowserBuilder::new()
        .load_timeout(Duration::from_secs(5))
        .build_config();

    let result = reporter::run(&config, "does-not-exist.invalid", None).await;
    assert!(result.is_err());
}
