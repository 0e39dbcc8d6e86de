use std::path::PathBuf;
use thiserror::Error;

/// Why a candidate element could not be tied to an article link
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkLookupError {
    #[error("no enclosing <a> element")]
    NoAncestorLink,
    #[error("href {href:?} could not be resolved: {reason}")]
    InvalidHref { href: String, reason: String },
}

/// Failure to pull a description from an article page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("navigation to {link} failed: {reason}")]
    Navigation { link: String, reason: String },
    #[error("no {selector} element on {link} after {timeout_secs}s")]
    Timeout {
        link: String,
        selector: String,
        timeout_secs: u64,
    },
}

/// Errors from the browser session itself
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("could not connect to any WebDriver server (tried {url} and fallbacks)")]
    Connect { url: String },
    #[error("failed to load {url}: {reason}")]
    Navigation { url: String, reason: String },
    #[error("invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors while writing the spreadsheet
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("refusing to write a report with no rows")]
    Empty,
    #[error("failed to write {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Fatal errors that end a harvest run
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
