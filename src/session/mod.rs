pub mod web;

use crate::error::{FetchError, SessionError};
use crate::parsers::Homepage;

/// Navigation capabilities the harvest pipeline needs from a browser
#[allow(async_fn_in_trait)]
pub trait NewsSession {
    /// Load the homepage and return its rendered source
    async fn homepage(&mut self, url: &str) -> Result<Homepage, SessionError>;

    /// Visit an article and return its trimmed lead text
    async fn describe(&mut self, link: &str) -> Result<String, FetchError>;
}
