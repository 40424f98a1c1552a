//! Data types returned by the client.
//!
//! All types serialize with the camelCase field names used by the
//! legislation.gov.uk JSON representations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::feed::uri::UriParts;
use crate::types::{GeographicalExtent, LegislationType};

/// Summary record for one piece of legislation, as listed in an Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislationItem {
    /// Entry title; empty if the entry has none.
    pub title: String,

    /// Canonical identifier of the entry; empty if the entry has none.
    pub uri: String,

    /// First link target of the entry.
    pub href: Option<String>,

    /// Type code decomposed from `uri` (not validated against the type table).
    #[serde(rename = "type")]
    pub type_code: Option<String>,

    /// Year decomposed from `uri`; `Some(0)` when the segment is not a number.
    pub year: Option<u32>,

    /// Number decomposed from `uri`; `Some(0)` when the segment is not a number.
    pub number: Option<u32>,

    /// Calendar date of the entry's publish timestamp.
    pub made_date: Option<NaiveDate>,

    /// Entry summary text.
    pub short_title: Option<String>,
}

impl LegislationItem {
    /// Resolve the raw type code against the known type table.
    #[must_use]
    pub fn legislation_type(&self) -> Option<LegislationType> {
        LegislationType::try_from_uri_code(self.type_code.as_deref())
    }

    /// Strict decomposition of `uri`, keeping unparseable segments distinct from zero.
    #[must_use]
    pub fn uri_parts(&self) -> Option<UriParts> {
        UriParts::parse(&self.uri)
    }
}

/// One page of results plus the pagination metadata recovered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub results: Vec<T>,
    pub total_results: u32,
    pub page_size: u32,
    /// Current page, 1-based.
    pub page: u32,
    pub total_pages: u32,
}

impl<T> PagedResponse<T> {
    /// Whether pages follow this one.
    #[must_use]
    pub fn has_more_pages(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Metadata header of a legislation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislationMetadata {
    pub uri: String,
    #[serde(rename = "type")]
    pub type_code: String,
    pub year: u32,
    pub number: u32,
    pub title: String,
    pub long_title: Option<String>,
    pub short_title: Option<String>,
    pub alternative_title: Option<String>,
    pub made_date: Option<NaiveDate>,
    pub laid_date: Option<NaiveDate>,
    pub commencement_date: Option<NaiveDate>,
    /// Royal assent date (Acts only).
    pub royal_assent_date: Option<NaiveDate>,
    /// Extent code as published (e.g. `E+W+S+N.I.`).
    pub extent: Option<String>,
    pub subjects: Vec<String>,
    pub isbn: Option<String>,
    /// Document status (e.g. `revised`, `final`).
    pub status: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
}

impl LegislationMetadata {
    /// Parsed form of `extent`.
    #[must_use]
    pub fn geographical_extent(&self) -> Option<GeographicalExtent> {
        self.extent.as_deref().and_then(GeographicalExtent::from_code)
    }
}

/// Table of contents of a legislation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOfContents {
    pub uri: String,
    pub title: String,
    /// Top-level structural items (parts, sections, schedules, ...).
    pub items: Vec<TocItem>,
}

/// An entry in a table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    /// Kind of item (e.g. `part`, `item`, `schedule`).
    #[serde(rename = "type")]
    pub item_type: String,
    pub number: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub children: Option<Vec<TocItem>>,
    #[serde(rename = "repealed")]
    pub is_repealed: bool,
    pub status: Option<String>,
}

impl TocItem {
    /// Number of items in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(TocItem::count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_legislation_item_json_names() {
        let item = LegislationItem {
            title: "Test Act 2020".to_string(),
            uri: "http://www.legislation.gov.uk/ukpga/2020/1".to_string(),
            href: None,
            type_code: Some("ukpga".to_string()),
            year: Some(2020),
            number: Some(1),
            made_date: NaiveDate::from_ymd_opt(2020, 1, 23),
            short_title: Some("Test".to_string()),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "ukpga");
        assert_eq!(json["madeDate"], "2020-01-23");
        assert_eq!(json["shortTitle"], "Test");
        assert!(json["href"].is_null());
    }

    #[test]
    fn test_legislation_item_type_lookup() {
        let item = LegislationItem {
            type_code: Some("uksi".to_string()),
            ..Default::default()
        };
        assert_eq!(
            item.legislation_type(),
            Some(LegislationType::UkStatutoryInstrument)
        );

        let unknown = LegislationItem {
            type_code: Some("zzz".to_string()),
            ..Default::default()
        };
        assert_eq!(unknown.legislation_type(), None);
    }

    #[test]
    fn test_paged_response_json_names() {
        let page = PagedResponse::<LegislationItem> {
            results: vec![],
            total_results: 0,
            page_size: 0,
            page: 1,
            total_pages: 1,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(
            json,
            r#"{"results":[],"totalResults":0,"pageSize":0,"page":1,"totalPages":1}"#
        );
        assert!(!page.has_more_pages());
    }

    #[test]
    fn test_metadata_extent() {
        let metadata = LegislationMetadata {
            extent: Some("E+W".to_string()),
            ..Default::default()
        };
        assert_eq!(
            metadata.geographical_extent(),
            Some(GeographicalExtent::EnglandWales)
        );
    }

    #[test]
    fn test_toc_item_count() {
        let item = TocItem {
            item_type: "part".to_string(),
            children: Some(vec![
                TocItem {
                    item_type: "item".to_string(),
                    ..Default::default()
                },
                TocItem {
                    item_type: "item".to_string(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        assert_eq!(item.count(), 3);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "part");
        assert_eq!(json["repealed"], false);
    }
}
