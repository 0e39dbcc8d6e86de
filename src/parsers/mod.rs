pub mod html;


use url::Url;

/// Rendered source of the news homepage
#[derive(Debug, Clone)]
pub struct Homepage {
    /// URL the browser ended up on, used to resolve relative links
    pub url: Url,

    /// Page source after scripts ran
    pub html: String,
}

impl Homepage {
    /// Creates a homepage snapshot
    pub fn new(url: Url, html: String) -> Self {
        Self { url, html }
    }
}
