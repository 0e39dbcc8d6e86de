pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod logging;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod session;

// Re-export commonly used types for convenience
pub use error::HarvestError;
pub use results::{HarvestOutcome, NewsItem, ReportRow};

use config::HarvestConfig;
use filter::TermFilter;
use session::web::WebDriverSession;
use std::path::PathBuf;

/// Main builder for a headline harvest run
pub struct Harvest {
    config: HarvestConfig,
    filter: TermFilter,
}

impl Harvest {
    /// Create a new Harvest builder for the given homepage
    pub fn new(homepage_url: &str) -> Self {
        Self {
            config: HarvestConfig::new(homepage_url),
            filter: TermFilter::default(),
        }
    }

    /// Set where the spreadsheet is written
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Set how long to wait for page elements
    pub fn with_wait_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.wait_timeout_secs = timeout_seconds;
        self
    }

    /// Show or hide the browser window
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Replace the default block list
    pub fn with_filter(mut self, filter: TermFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The configuration this run will use
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Open a browser, run the pipeline and close the browser again.
    ///
    /// The session is closed whether or not the pipeline succeeded.
    pub async fn run(mut self) -> Result<HarvestOutcome, HarvestError> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        let mut session = WebDriverSession::connect(&self.config).await?;

        let result = pipeline::harvest(&mut session, &self.config, &self.filter).await;

        if let Err(e) = session.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        result
    }
}
