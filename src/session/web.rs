use crate::config::HarvestConfig;
use crate::error::{FetchError, SessionError};
use crate::parsers::Homepage;
use crate::session::NewsSession;
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;
use url::Url;

/// A WebDriver-controlled browser used for the whole harvest run
pub struct WebDriverSession {
    client: Client,
    wait_timeout: Duration,
    description_selector: String,
}

impl WebDriverSession {
    /// Opens a browser session through the configured WebDriver server
    pub async fn connect(config: &HarvestConfig) -> Result<Self, SessionError> {
        let client = connect_to_webdriver(&config.webdriver_url, config.headless)
            .await
            .ok_or_else(|| SessionError::Connect {
                url: config.webdriver_url.clone(),
            })?;

        Ok(Self {
            client,
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
            description_selector: config.description_selector.clone(),
        })
    }

    /// Ends the WebDriver session and closes the browser
    pub async fn close(self) -> Result<(), CmdError> {
        self.client.close().await
    }
}

impl NewsSession for WebDriverSession {
    async fn homepage(&mut self, url: &str) -> Result<Homepage, SessionError> {
        let parsed = Url::parse(url).map_err(|source| SessionError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let navigation_error = |e: CmdError| SessionError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        };

        self.client
            .goto(parsed.as_str())
            .await
            .map_err(navigation_error)?;

        // Thumbnails are often injected by scripts after load
        self.client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::Css("img"))
            .await
            .map_err(navigation_error)?;

        let current_url = self
            .client
            .current_url()
            .await
            .map_err(navigation_error)?;
        let html = self.client.source().await.map_err(navigation_error)?;

        ::log::info!("Loaded homepage {} ({} bytes)", current_url, html.len());

        Ok(Homepage::new(current_url, html))
    }

    async fn describe(&mut self, link: &str) -> Result<String, FetchError> {
        let navigation_error = |e: CmdError| FetchError::Navigation {
            link: link.to_string(),
            reason: e.to_string(),
        };

        self.client.goto(link).await.map_err(navigation_error)?;

        let heading = self
            .client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::Css(&self.description_selector))
            .await
            .map_err(|e| match e {
                CmdError::WaitTimeout => FetchError::Timeout {
                    link: link.to_string(),
                    selector: self.description_selector.clone(),
                    timeout_secs: self.wait_timeout.as_secs(),
                },
                other => navigation_error(other),
            })?;

        let text = heading.text().await.map_err(navigation_error)?;
        Ok(text.trim().to_string())
    }
}

/// Chrome capabilities for the session
fn capabilities(headless: bool) -> Capabilities {
    let mut args = vec!["--disable-gpu", "--window-size=1920,1080"];
    if headless {
        args.push("--headless");
    }

    let mut caps = Capabilities::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

async fn try_connect(webdriver_url: &str, headless: bool) -> Result<Client, String> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities(headless));
    builder.connect(webdriver_url).await.map_err(|e| e.to_string())
}

/// Connects to the WebDriver instance, falling back to common driver ports
async fn connect_to_webdriver(webdriver_url: &str, headless: bool) -> Option<Client> {
    match try_connect(webdriver_url, headless).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Some(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium / geckodriver default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = try_connect(url, headless).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Some(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}
