use std::path::PathBuf;

/// A headline paired with the article it links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline text taken from an image's alt or title attribute
    pub title: String,

    /// Absolute URL of the article
    pub link: String,
}

impl NewsItem {
    /// Create a new news item
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl ReportRow {
    /// Combine an item with the description fetched for it
    pub fn new(item: NewsItem, description: String) -> Self {
        Self {
            title: item.title,
            description,
            link: item.link,
        }
    }
}

/// How a harvest run ended when nothing fatal happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestOutcome {
    /// The homepage produced no usable headlines
    NoHeadlines,

    /// Headlines were found but none of them yielded a description
    NoDescriptions { attempted: usize },

    /// The report was written
    Written { path: PathBuf, rows: usize },
}
