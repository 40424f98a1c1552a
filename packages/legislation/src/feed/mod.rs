//! Atom feed parsing for legislation listings.
//!
//! [`parse_feed`] turns an Atom document into [`LegislationItem`]s;
//! [`parse_feed_paged`] also recovers pagination metadata and wraps both in a
//! [`PagedResponse`].
//!
//! Missing optional elements never fail a parse: they resolve to an empty
//! string, `None` or zero. Only documents that are not well-formed XML or not
//! Atom feeds are rejected.
//!
//! # Example
//!
//! ```
//! use uk_legislation::feed::parse_feed_paged;
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/1</id><title>Act</title></entry>
//! </feed>"#;
//!
//! let page = parse_feed_paged(xml).unwrap();
//! assert_eq!(page.results[0].year, Some(2020));
//! assert_eq!(page.total_results, 1);
//! assert_eq!(page.total_pages, 1);
//! ```

mod entries;
pub mod pagination;
pub mod uri;

use roxmltree::Document;

use crate::error::Result;
use crate::models::{LegislationItem, PagedResponse};

pub use entries::extract_items;
pub use pagination::{resolve_pagination, Pagination};

/// How non-numeric year and number URI segments are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Coerce to 0.
    #[default]
    Lenient,
    /// Reject the feed with [`crate::LegislationError::InvalidUri`].
    Strict,
}

/// Options for feed parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedOptions {
    pub numeric_policy: NumericPolicy,
}

/// Parse an Atom feed into legislation items, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<LegislationItem>> {
    parse_feed_with(xml, &FeedOptions::default())
}

/// [`parse_feed`] with explicit options.
pub fn parse_feed_with(xml: &str, options: &FeedOptions) -> Result<Vec<LegislationItem>> {
    let doc = Document::parse(xml)?;
    extract_items(&doc, options)
}

/// Parse an Atom feed into a paged response.
pub fn parse_feed_paged(xml: &str) -> Result<PagedResponse<LegislationItem>> {
    parse_feed_paged_with(xml, &FeedOptions::default())
}

/// [`parse_feed_paged`] with explicit options.
pub fn parse_feed_paged_with(
    xml: &str,
    options: &FeedOptions,
) -> Result<PagedResponse<LegislationItem>> {
    let doc = Document::parse(xml)?;
    let items = extract_items(&doc, options)?;
    let item_count = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let pagination = resolve_pagination(&doc, item_count);

    tracing::debug!(
        entries = items.len(),
        total = pagination.total,
        start = pagination.start,
        per_page = pagination.per_page,
        "Parsed Atom feed"
    );

    Ok(pagination.into_response(items))
}
