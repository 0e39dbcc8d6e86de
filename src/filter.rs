/// Configuration for headline filtering
#[derive(Debug, Clone)]
pub struct TermFilterConfig {
    /// Terms that mark a headline candidate as unwanted (matched case-insensitively)
    pub blocked_terms: Vec<String>,
}

impl Default for TermFilterConfig {
    fn default() -> Self {
        Self {
            blocked_terms: vec![
                "masthead".to_string(),
                "ntv.com.tr".to_string(),
                "google-play".to_string(),
                "app-store".to_string(),
                "Huawei App Gallery".to_string(),
                "logo".to_string(),
                "banner".to_string(),
                "sponsor".to_string(),
                "advertisement".to_string(),
            ],
        }
    }
}

/// Returns true if any blocklist term appears anywhere in `text`, ignoring case.
///
/// Plain substring test, no word boundaries: `"ntv.com.tr"` matches inside
/// `"www.ntv.com.tr logo"`.
pub fn is_unwanted<T: AsRef<str>>(text: &str, blocklist: &[T]) -> bool {
    let text_lower = text.to_lowercase();
    blocklist
        .iter()
        .any(|term| text_lower.contains(&term.as_ref().to_lowercase()))
}

/// Rejects ad, logo and sponsor texts that show up as image captions
#[derive(Debug, Clone)]
pub struct TermFilter {
    // Lowercased once at construction
    terms: Vec<String>,
}

impl Default for TermFilter {
    fn default() -> Self {
        Self::new(TermFilterConfig::default())
    }
}

impl TermFilter {
    /// Create a new term filter from configuration
    pub fn new(config: TermFilterConfig) -> Self {
        let terms = config
            .blocked_terms
            .iter()
            .map(|term| term.to_lowercase())
            // An empty term would match every headline
            .filter(|term| !term.is_empty())
            .collect();

        Self { terms }
    }

    /// Determine if a headline candidate should be dropped
    pub fn is_unwanted(&self, text: &str) -> bool {
        is_unwanted(text, &self.terms)
    }

    /// The normalized terms this filter matches against
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
