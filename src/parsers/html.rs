use crate::error::LinkLookupError;
use crate::extractor::{self, CandidateElement};
use crate::filter::TermFilter;
use crate::parsers::Homepage;
use crate::results::NewsItem;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// An `<img>` of a parsed homepage, with links resolved against the page URL
pub struct ImageElement<'a> {
    element: ElementRef<'a>,
    base: &'a Url,
}

impl<'a> ImageElement<'a> {
    pub fn new(element: ElementRef<'a>, base: &'a Url) -> Self {
        Self { element, base }
    }

    /// Nearest enclosing `<a>` element
    fn ancestor_anchor(&self) -> Option<ElementRef<'a>> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name().eq_ignore_ascii_case("a"))
    }
}

impl CandidateElement for ImageElement<'_> {
    fn alt(&self) -> Option<&str> {
        self.element.value().attr("alt")
    }

    fn title(&self) -> Option<&str> {
        self.element.value().attr("title")
    }

    fn ancestor_link(&self) -> Result<Option<String>, LinkLookupError> {
        let anchor = self
            .ancestor_anchor()
            .ok_or(LinkLookupError::NoAncestorLink)?;

        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            return Ok(None);
        };
        if href.is_empty() {
            return Ok(None);
        }

        self.base
            .join(href)
            .map(|resolved| Some(resolved.to_string()))
            .map_err(|e| LinkLookupError::InvalidHref {
                href: href.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Collects every `<img>` in document order
pub fn page_images<'a>(document: &'a Html, base: &'a Url) -> Vec<ImageElement<'a>> {
    let img_selector = Selector::parse("img").expect("static selector should be valid");
    document
        .select(&img_selector)
        .map(|element| ImageElement::new(element, base))
        .collect()
}

/// URL that relative links in `document` resolve against.
///
/// The first `<base href>` wins, itself resolved against `page_url`; otherwise
/// the page URL is used.
pub fn document_base(document: &Html, page_url: &Url) -> Url {
    let base_selector = Selector::parse("base[href]").expect("static selector should be valid");
    let Some(href) = document
        .select(&base_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
    else {
        return page_url.clone();
    };

    match page_url.join(href) {
        Ok(base) => base,
        Err(e) => {
            ::log::warn!("Ignoring invalid <base href={:?}>: {}", href, e);
            page_url.clone()
        }
    }
}

/// Parses a homepage and extracts its deduplicated headlines
pub fn news_items(homepage: &Homepage, filter: &TermFilter) -> Vec<NewsItem> {
    let document = Html::parse_document(&homepage.html);
    let base = document_base(&document, &homepage.url);
    let images = page_images(&document, &base);

    ::log::debug!("Homepage {} has {} images", homepage.url, images.len());

    extractor::extract(&images, filter)
}
