//! Extraction of legislation items from Atom feed entries.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use roxmltree::{Document, Node};

use crate::config::ATOM_NS;
use crate::error::{LegislationError, Result};
use crate::feed::uri::UriParts;
use crate::feed::{FeedOptions, NumericPolicy};
use crate::models::LegislationItem;
use crate::xml::{child_text_ns, find_child_ns, find_children_ns, has_tag_ns};

/// Extract one item per Atom entry, in document order.
///
/// Fails only when the root element is not an Atom `feed`, or, under
/// [`NumericPolicy::Strict`], when an entry id has a non-numeric year or
/// number.
pub fn extract_items(doc: &Document<'_>, options: &FeedOptions) -> Result<Vec<LegislationItem>> {
    let feed = doc.root_element();
    if !has_tag_ns(feed, ATOM_NS, "feed") {
        return Err(LegislationError::NotAtomFeed {
            root: feed.tag_name().name().to_string(),
        });
    }

    find_children_ns(feed, ATOM_NS, "entry")
        .map(|entry| extract_item(entry, options))
        .collect()
}

fn extract_item(entry: Node<'_, '_>, options: &FeedOptions) -> Result<LegislationItem> {
    let mut item = LegislationItem {
        title: child_text_ns(entry, ATOM_NS, "title").unwrap_or_default(),
        uri: child_text_ns(entry, ATOM_NS, "id").unwrap_or_default(),
        href: find_child_ns(entry, ATOM_NS, "link")
            .and_then(|link| link.attribute("href"))
            .map(str::to_string),
        ..Default::default()
    };

    apply_uri_parts(&mut item, options)?;
    item.made_date = published_date(entry);
    item.short_title = child_text_ns(entry, ATOM_NS, "summary");

    Ok(item)
}

/// Fill type, year and number from the item's own `uri`.
fn apply_uri_parts(item: &mut LegislationItem, options: &FeedOptions) -> Result<()> {
    let Some(parts) = UriParts::parse(&item.uri) else {
        return Ok(());
    };

    if options.numeric_policy == NumericPolicy::Strict {
        if let Some((field, segment)) = parts.first_unparseable() {
            return Err(LegislationError::InvalidUri {
                uri: item.uri.clone(),
                reason: format!("{field} segment '{segment}' is not a number"),
            });
        }
    }

    item.year = Some(parts.year.value_or_zero());
    item.number = parts.number.as_ref().map(|n| n.value_or_zero());
    item.type_code = Some(parts.type_code);
    Ok(())
}

/// Calendar date of the entry's `published` timestamp, in its own offset.
///
/// The minimum timestamp (`0001-01-01T00:00:00`) means "not set".
fn published_date(entry: Node<'_, '_>) -> Option<NaiveDate> {
    let text = child_text_ns(entry, ATOM_NS, "published")?;
    let published = match DateTime::<FixedOffset>::parse_from_rfc3339(&text) {
        Ok(published) => published,
        Err(e) => {
            tracing::warn!(published = %text, error = %e, "Ignoring unparseable entry timestamp");
            return None;
        }
    };

    let local = published.naive_local();
    if is_min_sentinel(local) {
        return None;
    }
    Some(local.date())
}

fn is_min_sentinel(timestamp: NaiveDateTime) -> bool {
    timestamp.year() == 1 && timestamp.ordinal() == 1 && timestamp.num_seconds_from_midnight() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_entry(entry_xml: &str) -> LegislationItem {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{entry_xml}</feed>"#);
        let doc = Document::parse(&xml).unwrap();
        let mut items = extract_items(&doc, &FeedOptions::default()).unwrap();
        assert_eq!(items.len(), 1);
        items.remove(0)
    }

    #[test]
    fn test_full_entry() {
        let item = parse_entry(
            r#"<entry>
                <id>http://www.legislation.gov.uk/id/ukpga/2020/7</id>
                <title>Coronavirus Act 2020</title>
                <link rel="self" href="http://www.legislation.gov.uk/ukpga/2020/7"/>
                <link rel="alternate" href="http://www.legislation.gov.uk/ukpga/2020/7/contents"/>
                <published>2020-03-25T00:00:00Z</published>
                <summary>An Act to make provision in connection with coronavirus</summary>
            </entry>"#,
        );

        assert_eq!(
            item,
            LegislationItem {
                title: "Coronavirus Act 2020".to_string(),
                uri: "http://www.legislation.gov.uk/id/ukpga/2020/7".to_string(),
                href: Some("http://www.legislation.gov.uk/ukpga/2020/7".to_string()),
                type_code: Some("ukpga".to_string()),
                year: Some(2020),
                number: Some(7),
                made_date: NaiveDate::from_ymd_opt(2020, 3, 25),
                short_title: Some(
                    "An Act to make provision in connection with coronavirus".to_string()
                ),
            }
        );
    }

    #[test]
    fn test_empty_entry() {
        let item = parse_entry("<entry/>");
        assert_eq!(item, LegislationItem::default());
        assert_eq!(item.title, "");
        assert_eq!(item.uri, "");
    }

    #[test]
    fn test_made_date_keeps_timestamp_offset() {
        let item = parse_entry(
            "<entry><published>2021-06-30T23:30:00-05:00</published></entry>",
        );
        assert_eq!(item.made_date, NaiveDate::from_ymd_opt(2021, 6, 30));
    }

    #[test]
    fn test_min_timestamp_means_no_date() {
        let item = parse_entry("<entry><published>0001-01-01T00:00:00Z</published></entry>");
        assert_eq!(item.made_date, None);
    }

    #[test]
    fn test_unparseable_timestamp_means_no_date() {
        let item = parse_entry("<entry><published>yesterday</published></entry>");
        assert_eq!(item.made_date, None);
    }

    #[test]
    fn test_empty_summary_is_present() {
        let item = parse_entry("<entry><summary/></entry>");
        assert_eq!(item.short_title, Some(String::new()));
    }

    #[test]
    fn test_elements_outside_atom_namespace_are_ignored() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:x">
            <x:entry><id>ignored</id></x:entry>
            <entry><x:title>not atom</x:title><title>Atom title</title></entry>
        </feed>"#;
        let doc = Document::parse(xml).unwrap();
        let items = extract_items(&doc, &FeedOptions::default()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Atom title");
    }

    #[test]
    fn test_non_feed_root_is_rejected() {
        let doc = Document::parse("<rss><channel/></rss>").unwrap();
        let err = extract_items(&doc, &FeedOptions::default()).unwrap_err();
        assert!(matches!(err, LegislationError::NotAtomFeed { root } if root == "rss"));
    }

    #[test]
    fn test_strict_policy_rejects_unparseable_year() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry><id>http://www.legislation.gov.uk/id/ukpga/Geo5/12</id></entry>
        </feed>"#;
        let doc = Document::parse(xml).unwrap();

        let lenient = extract_items(&doc, &FeedOptions::default()).unwrap();
        assert_eq!(lenient[0].year, Some(0));

        let strict = FeedOptions {
            numeric_policy: NumericPolicy::Strict,
        };
        let err = extract_items(&doc, &strict).unwrap_err();
        assert!(matches!(err, LegislationError::InvalidUri { ref uri, .. } if uri.ends_with("Geo5/12")));
    }
}
