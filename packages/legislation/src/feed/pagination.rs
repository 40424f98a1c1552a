//! Pagination recovery for Atom listings.
//!
//! Feeds populate OpenSearch paging elements inconsistently, and some carry
//! legislation.gov.uk `page`/`morePages` counters instead. The total result
//! count is resolved through an ordered list of sources; start index and page
//! size come from OpenSearch only.

use roxmltree::Document;

use crate::config::{LEGISLATION_NS, OPENSEARCH_NS};
use crate::models::PagedResponse;
use crate::xml::find_descendant_ns;

/// An element to look up anywhere in the document, by namespace and local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRule {
    pub namespace: &'static str,
    pub name: &'static str,
}

impl LookupRule {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }

    /// Integer value of the first matching element; 0 when absent or unparseable.
    #[must_use]
    pub fn value(&self, doc: &Document<'_>) -> u32 {
        find_descendant_ns(doc, self.namespace, self.name)
            .and_then(|n| n.text())
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// A source for the total result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalSource {
    /// Read directly from an element.
    Element(LookupRule),
    /// `(page + more_pages) * per_page`, when `per_page > 0` and either
    /// counter is positive.
    PageEstimate {
        page: LookupRule,
        more_pages: LookupRule,
    },
}

impl TotalSource {
    fn resolve(&self, doc: &Document<'_>, per_page: u32) -> u32 {
        match self {
            Self::Element(rule) => rule.value(doc),
            Self::PageEstimate { page, more_pages } => {
                let current = page.value(doc);
                let remaining = more_pages.value(doc);
                if per_page > 0 && (current > 0 || remaining > 0) {
                    current.saturating_add(remaining).saturating_mul(per_page)
                } else {
                    0
                }
            }
        }
    }
}

pub const OPENSEARCH_TOTAL_RESULTS: LookupRule = LookupRule::new(OPENSEARCH_NS, "totalResults");
pub const OPENSEARCH_START_INDEX: LookupRule = LookupRule::new(OPENSEARCH_NS, "startIndex");
pub const OPENSEARCH_ITEMS_PER_PAGE: LookupRule = LookupRule::new(OPENSEARCH_NS, "itemsPerPage");

/// Sources for the total, tried in order until one yields a non-zero value.
/// The extracted item count is the final fallback.
pub const TOTAL_SOURCES: &[TotalSource] = &[
    TotalSource::Element(OPENSEARCH_TOTAL_RESULTS),
    TotalSource::PageEstimate {
        page: LookupRule::new(LEGISLATION_NS, "page"),
        more_pages: LookupRule::new(LEGISLATION_NS, "morePages"),
    },
];

/// Raw pagination values recovered from a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u32,
    /// 1-based index of the first result on this page; 0 when unknown.
    pub start: u32,
    /// 0 when unknown.
    pub per_page: u32,
}

/// Resolve pagination from `doc`, falling back to `fallback_count` for the total.
pub fn resolve_pagination(doc: &Document<'_>, fallback_count: u32) -> Pagination {
    let start = OPENSEARCH_START_INDEX.value(doc);
    let per_page = OPENSEARCH_ITEMS_PER_PAGE.value(doc);

    let total = TOTAL_SOURCES
        .iter()
        .map(|source| source.resolve(doc, per_page))
        .find(|&total| total > 0)
        .unwrap_or(fallback_count);

    Pagination {
        total,
        start,
        per_page,
    }
}

impl Pagination {
    /// Assemble the paged envelope around `results`.
    pub fn into_response<T>(self, results: Vec<T>) -> PagedResponse<T> {
        let item_count = u32::try_from(results.len()).unwrap_or(u32::MAX);

        let page_size = if self.per_page > 0 {
            self.per_page
        } else {
            item_count
        };

        let page = if self.start > 0 && self.per_page > 0 {
            (self.start - 1) / self.per_page + 1
        } else {
            1
        };

        let total_pages = if self.per_page > 0 && self.total > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            1
        };

        PagedResponse {
            results,
            total_results: self.total,
            page_size,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(body: &str) -> String {
        format!(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"
                xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/"
                xmlns:leg="http://www.legislation.gov.uk/namespaces/legislation">{body}</feed>"#
        )
    }

    fn resolve(body: &str, fallback: u32) -> Pagination {
        let xml = feed(body);
        let doc = Document::parse(&xml).unwrap();
        resolve_pagination(&doc, fallback)
    }

    #[test]
    fn test_opensearch_values() {
        let p = resolve(
            "<openSearch:totalResults>120</openSearch:totalResults>
             <openSearch:startIndex>41</openSearch:startIndex>
             <openSearch:itemsPerPage>20</openSearch:itemsPerPage>",
            3,
        );
        assert_eq!(
            p,
            Pagination {
                total: 120,
                start: 41,
                per_page: 20
            }
        );
    }

    #[test]
    fn test_unparseable_values_are_zero() {
        let p = resolve(
            "<openSearch:totalResults>many</openSearch:totalResults>
             <openSearch:startIndex>-1</openSearch:startIndex>
             <openSearch:itemsPerPage> 25 </openSearch:itemsPerPage>",
            4,
        );
        assert_eq!(
            p,
            Pagination {
                total: 4,
                start: 0,
                per_page: 25
            }
        );
    }

    #[test]
    fn test_page_estimate_when_total_missing() {
        let p = resolve(
            "<openSearch:totalResults>0</openSearch:totalResults>
             <openSearch:itemsPerPage>10</openSearch:itemsPerPage>
             <leg:page>2</leg:page>
             <leg:morePages>3</leg:morePages>",
            2,
        );
        assert_eq!(p.total, 50);
    }

    #[test]
    fn test_page_estimate_with_only_more_pages() {
        let p = resolve(
            "<openSearch:itemsPerPage>20</openSearch:itemsPerPage>
             <leg:morePages>4</leg:morePages>",
            20,
        );
        assert_eq!(p.total, 80);
    }

    #[test]
    fn test_page_estimate_needs_page_size() {
        let p = resolve("<leg:page>3</leg:page><leg:morePages>2</leg:morePages>", 7);
        assert_eq!(p.total, 7);
        assert_eq!(p.per_page, 0);
    }

    #[test]
    fn test_page_estimate_needs_positive_counter() {
        let p = resolve(
            "<openSearch:itemsPerPage>20</openSearch:itemsPerPage>
             <leg:page>0</leg:page>
             <leg:morePages>0</leg:morePages>",
            5,
        );
        assert_eq!(p.total, 5);
    }

    #[test]
    fn test_opensearch_total_wins_over_estimate() {
        let p = resolve(
            "<openSearch:totalResults>33</openSearch:totalResults>
             <openSearch:itemsPerPage>10</openSearch:itemsPerPage>
             <leg:page>1</leg:page>
             <leg:morePages>9</leg:morePages>",
            10,
        );
        assert_eq!(p.total, 33);
    }

    #[test]
    fn test_elements_in_other_namespaces_are_ignored() {
        let p = resolve(
            r#"<totalResults xmlns="urn:other">99</totalResults>
               <page xmlns="urn:other">9</page>"#,
            1,
        );
        assert_eq!(p.total, 1);
    }

    #[test]
    fn test_envelope_defaults() {
        let page = Pagination {
            total: 0,
            start: 0,
            per_page: 0,
        }
        .into_response(Vec::<u8>::new());
        assert_eq!(page.total_results, 0);
        assert_eq!(page.page_size, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_envelope_page_arithmetic() {
        let page = Pagination {
            total: 101,
            start: 41,
            per_page: 20,
        }
        .into_response(vec![0u8; 20]);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_pages, 6);
        assert!(page.has_more_pages());
    }

    #[test]
    fn test_envelope_page_size_falls_back_to_item_count() {
        let page = Pagination {
            total: 3,
            start: 5,
            per_page: 0,
        }
        .into_response(vec!['a', 'b', 'c']);
        assert_eq!(page.page_size, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
