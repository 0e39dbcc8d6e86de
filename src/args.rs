use clap::Parser;
use headline_digest::Harvest;
use headline_digest::config::DEFAULT_HOMEPAGE_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headline-digest")]
#[command(about = "Collects homepage headlines with their lead text into a spreadsheet")]
#[command(version)]
pub struct Args {
    /// News homepage to scan
    #[arg(default_value = DEFAULT_HOMEPAGE_URL)]
    pub url: String,

    /// Spreadsheet to write
    #[arg(short, long, default_value = "news_digest.xlsx")]
    pub output: PathBuf,

    /// Log file (appended to)
    #[arg(long, default_value = "news_digest.log")]
    pub log_file: PathBuf,

    /// WebDriver server URL (WEBDRIVER_URL takes precedence)
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Seconds to wait for page elements
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,
}

impl Args {
    /// Build the harvest run these arguments describe
    pub fn into_harvest(self) -> Harvest {
        Harvest::new(&self.url)
            .with_output(self.output)
            .with_webdriver_url(&self.webdriver_url)
            .with_wait_timeout(self.timeout)
            .with_headless(!self.headed)
    }
}
