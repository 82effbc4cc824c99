use std::error::Error as _;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use page_reporter::navigation::normalize_url;
use page_reporter::{reporter, BrowserBuilder};
use tracing::Level;

const EXAMPLES: &str = "\
Examples:
  page-reporter example.com
  page-reporter https://example.com about
  page-reporter example.com /contact";

/// Load a web page in headless Chrome and report its headings, first
/// paragraph and load time.
#[derive(Debug, Parser)]
#[command(version, about, after_help = EXAMPLES)]
struct Cli {
    /// Page to load; `https://` is added when no scheme is given
    url: Option<String>,

    /// Secondary page to reach, by path guess or matching link
    target: Option<String>,

    /// Seconds to wait for each page to finish loading
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Chrome or Chromium executable to launch
    #[arg(long)]
    chrome_path: Option<String>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Increase log verbosity (stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(url) = cli.url.as_deref() else {
        let mut cmd = Cli::command();
        if let Err(e) = cmd.print_long_help() {
            eprintln!("{e}");
        }
        return ExitCode::SUCCESS;
    };

    let mut builder = BrowserBuilder::new()
        .headless(!cli.headed)
        .load_timeout(Duration::from_secs(cli.timeout));
    if let Some(path) = cli.chrome_path {
        builder = builder.chrome_path(path);
    }
    let config = builder.build_config();

    println!("Navigating to: {}", normalize_url(url));

    match reporter::run(&config, url, cli.target.as_deref()).await {
        Ok(report) => {
            println!();
            println!("{report}");
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("An error occurred: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                println!("Caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(1)
        }
    }
}
