use std::path::PathBuf;

/// Homepage scraped when no URL is given
pub const DEFAULT_HOMEPAGE_URL: &str = "https://www.ntv.com.tr/";

/// Configuration for a harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// News homepage to scan for headline thumbnails
    pub homepage_url: String,

    /// Where the spreadsheet is written
    pub output_path: PathBuf,

    /// URL for the WebDriver instance
    pub webdriver_url: String,

    /// How long to wait for the homepage images and for each description
    pub wait_timeout_secs: u64,

    /// CSS selector for the lead text on an article page
    pub description_selector: String,

    /// Run the browser without a window
    pub headless: bool,
}

/// Default value for output_path
fn default_output_path() -> PathBuf {
    PathBuf::from("news_digest.xlsx")
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for wait_timeout_secs
fn default_wait_timeout_secs() -> u64 {
    10
}

/// Default description selector
fn default_description_selector() -> String {
    "h2".to_string()
}

impl HarvestConfig {
    /// Create a new configuration with default values
    pub fn new(homepage_url: &str) -> Self {
        Self {
            homepage_url: homepage_url.to_string(),
            output_path: default_output_path(),
            webdriver_url: default_webdriver_url(),
            wait_timeout_secs: default_wait_timeout_secs(),
            description_selector: default_description_selector(),
            headless: true,
        }
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOMEPAGE_URL)
    }
}
