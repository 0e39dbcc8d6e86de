use crate::error::LinkLookupError;
use crate::filter::TermFilter;
use crate::results::NewsItem;
use std::collections::HashSet;

/// An image-like page node that may carry a headline and sit inside a link
pub trait CandidateElement {
    /// Raw `alt` attribute, if present
    fn alt(&self) -> Option<&str>;

    /// Raw `title` attribute, if present
    fn title(&self) -> Option<&str>;

    /// Resolve the nearest enclosing link.
    ///
    /// `Ok(None)` means the link exists but carries no href.
    fn ancestor_link(&self) -> Result<Option<String>, LinkLookupError>;
}

/// Extracts deduplicated headline/link pairs from candidate elements
pub struct LinkExtractor<'f> {
    filter: &'f TermFilter,
    seen_titles: HashSet<String>,
    items: Vec<NewsItem>,
    failed_lookups: usize,
}

impl<'f> LinkExtractor<'f> {
    /// Create an extractor for a single pass
    pub fn new(filter: &'f TermFilter) -> Self {
        Self {
            filter,
            seen_titles: HashSet::new(),
            items: Vec::new(),
            failed_lookups: 0,
        }
    }

    /// Feed one element; its `alt` is considered before its `title`
    pub fn push<E: CandidateElement>(&mut self, element: &E) {
        self.consider(element, element.alt());
        self.consider(element, element.title());
    }

    /// Number of attributes dropped because their link could not be found
    pub fn failed_lookups(&self) -> usize {
        self.failed_lookups
    }

    /// Finish the pass and return items in emission order
    pub fn finish(self) -> Vec<NewsItem> {
        ::log::debug!(
            "Extracted {} headlines ({} link lookups failed)",
            self.items.len(),
            self.failed_lookups
        );
        self.items
    }

    fn consider<E: CandidateElement>(&mut self, element: &E, text: Option<&str>) {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return;
        };

        if self.filter.is_unwanted(text) {
            ::log::trace!("Skipping unwanted headline: {:?}", text);
            return;
        }
        if self.seen_titles.contains(text) {
            ::log::trace!("Skipping duplicate headline: {:?}", text);
            return;
        }

        match element.ancestor_link() {
            Ok(Some(href)) if !href.trim().is_empty() => {
                self.seen_titles.insert(text.to_string());
                self.items.push(NewsItem::new(text, href));
            }
            Ok(_) => {
                ::log::debug!("Link for {:?} has no href", text);
            }
            Err(e) => {
                self.failed_lookups += 1;
                ::log::error!("Link not found for {:?}: {}", text, e);
            }
        }
    }
}

/// Runs a full extraction pass over `elements` in order.
///
/// No two returned items share a title: the first element (and, within an
/// element, `alt` before `title`) to claim a headline wins.
pub fn extract<'e, E, I>(elements: I, filter: &TermFilter) -> Vec<NewsItem>
where
    E: CandidateElement + 'e,
    I: IntoIterator<Item = &'e E>,
{
    let mut extractor = LinkExtractor::new(filter);
    for element in elements {
        extractor.push(element);
    }
    extractor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilterConfig;

    struct FakeImage {
        alt: Option<String>,
        title: Option<String>,
        link: Result<Option<String>, LinkLookupError>,
    }

    impl FakeImage {
        fn new(alt: Option<&str>, title: Option<&str>, link: &str) -> Self {
            Self {
                alt: alt.map(String::from),
                title: title.map(String::from),
                link: Ok(Some(link.to_string())),
            }
        }

        fn unlinked(alt: Option<&str>, title: Option<&str>) -> Self {
            Self {
                alt: alt.map(String::from),
                title: title.map(String::from),
                link: Err(LinkLookupError::NoAncestorLink),
            }
        }
    }

    impl CandidateElement for FakeImage {
        fn alt(&self) -> Option<&str> {
            self.alt.as_deref()
        }

        fn title(&self) -> Option<&str> {
            self.title.as_deref()
        }

        fn ancestor_link(&self) -> Result<Option<String>, LinkLookupError> {
            self.link.clone()
        }
    }

    fn banner_filter() -> TermFilter {
        TermFilter::new(TermFilterConfig {
            blocked_terms: vec!["banner".to_string()],
        })
    }

    #[test]
    fn test_unwanted_alt_is_skipped() {
        let elements = [
            FakeImage::new(Some("Ad Banner"), None, "https://news.test/ad"),
            FakeImage::new(Some("Storm hits capital"), None, "https://news.test/storm"),
        ];

        let items = extract(&elements, &banner_filter());

        assert_eq!(
            items,
            vec![NewsItem::new("Storm hits capital", "https://news.test/storm")]
        );
    }

    #[test]
    fn test_duplicate_alt_first_seen_wins() {
        let elements = [
            FakeImage::new(Some("Breaking: market rallies"), None, "https://news.test/a"),
            FakeImage::new(Some("Breaking: market rallies"), None, "https://news.test/b"),
        ];

        let items = extract(&elements, &TermFilter::default());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://news.test/a");
    }

    #[test]
    fn test_cross_attribute_dedup() {
        let elements = [
            FakeImage::new(None, Some("Election results"), "https://news.test/1"),
            FakeImage::new(Some("Election results"), None, "https://news.test/2"),
        ];

        let items = extract(&elements, &TermFilter::default());

        assert_eq!(
            items,
            vec![NewsItem::new("Election results", "https://news.test/1")]
        );
    }

    #[test]
    fn test_both_attributes_can_emit() {
        let elements = [FakeImage::new(
            Some("Storm hits capital"),
            Some("Photo: flooded streets"),
            "https://news.test/storm",
        )];

        let items = extract(&elements, &TermFilter::default());

        assert_eq!(
            items,
            vec![
                NewsItem::new("Storm hits capital", "https://news.test/storm"),
                NewsItem::new("Photo: flooded streets", "https://news.test/storm"),
            ]
        );
    }

    #[test]
    fn test_same_alt_and_title_emits_once() {
        let elements = [FakeImage::new(
            Some("Storm hits capital"),
            Some("Storm hits capital"),
            "https://news.test/storm",
        )];

        assert_eq!(extract(&elements, &TermFilter::default()).len(), 1);
    }

    #[test]
    fn test_order_is_element_order_alt_first() {
        let elements = [
            FakeImage::new(Some("A alt"), Some("A title"), "https://news.test/a"),
            FakeImage::new(None, Some("B title"), "https://news.test/b"),
            FakeImage::new(Some("C alt"), None, "https://news.test/c"),
        ];

        let titles: Vec<_> = extract(&elements, &TermFilter::default())
            .into_iter()
            .map(|item| item.title)
            .collect();

        assert_eq!(titles, vec!["A alt", "A title", "B title", "C alt"]);
    }

    #[test]
    fn test_lookup_failure_is_isolated() {
        let elements = [
            FakeImage::new(Some("First story"), None, "https://news.test/1"),
            FakeImage::unlinked(Some("Orphan caption"), Some("Orphan title")),
            FakeImage::new(Some("Third story"), None, "https://news.test/3"),
        ];

        let filter = TermFilter::default();
        let mut extractor = LinkExtractor::new(&filter);
        for element in &elements {
            extractor.push(element);
        }
        assert_eq!(extractor.failed_lookups(), 2);

        let titles: Vec<_> = extractor.finish().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["First story", "Third story"]);
    }

    #[test]
    fn test_failed_lookup_does_not_claim_title() {
        // A headline whose link could not be found stays available
        let elements = [
            FakeImage::unlinked(Some("Shared headline"), None),
            FakeImage::new(Some("Shared headline"), None, "https://news.test/later"),
        ];

        let items = extract(&elements, &TermFilter::default());

        assert_eq!(
            items,
            vec![NewsItem::new("Shared headline", "https://news.test/later")]
        );
    }

    #[test]
    fn test_blank_and_missing_text_contribute_nothing() {
        let elements = [
            FakeImage::new(None, None, "https://news.test/none"),
            FakeImage::new(Some("   "), Some(""), "https://news.test/blank"),
        ];

        assert!(extract(&elements, &TermFilter::default()).is_empty());
    }

    #[test]
    fn test_text_is_trimmed_before_dedup() {
        let elements = [
            FakeImage::new(Some("  Storm hits capital\n"), None, "https://news.test/1"),
            FakeImage::new(Some("Storm hits capital"), None, "https://news.test/2"),
        ];

        let items = extract(&elements, &TermFilter::default());

        assert_eq!(
            items,
            vec![NewsItem::new("Storm hits capital", "https://news.test/1")]
        );
    }

    #[test]
    fn test_link_without_href_is_dropped() {
        let elements = [
            FakeImage {
                alt: Some("No href".to_string()),
                title: None,
                link: Ok(None),
            },
            FakeImage {
                alt: Some("Blank href".to_string()),
                title: None,
                link: Ok(Some(String::new())),
            },
        ];

        let filter = TermFilter::default();
        let mut extractor = LinkExtractor::new(&filter);
        for element in &elements {
            extractor.push(element);
        }

        assert_eq!(extractor.failed_lookups(), 0);
        assert!(extractor.finish().is_empty());
    }
}
