//! Metadata header of CLML legislation documents.
//!
//! A CLML document carries a `ukm:Metadata` block with Dublin Core
//! descriptors and legislation-specific dates. Only that header is read
//! here; the body of the document is left alone.

use chrono::NaiveDate;
use roxmltree::Document;

use crate::config::{DUBLIN_CORE_NS, METADATA_NS};
use crate::error::Result;
use crate::models::LegislationMetadata;
use crate::types::LegislationType;
use crate::xml::{collect_text, descendant_attribute_ns, descendant_text_ns, find_descendant_ns, has_tag_ns};

/// Extract the title of a legislation document.
///
/// Prefers `dc:title`, then `ukm:Title`. Returns `None` when neither is
/// present or the text is not well-formed XML.
///
/// # Examples
/// ```
/// use uk_legislation::metadata::extract_title;
///
/// let xml = r#"<Legislation xmlns:dc="http://purl.org/dc/elements/1.1/">
///   <dc:title>Coronavirus Act 2020</dc:title>
/// </Legislation>"#;
/// assert_eq!(extract_title(xml), Some("Coronavirus Act 2020".to_string()));
/// assert_eq!(extract_title("<Legislation/>"), None);
/// ```
pub fn extract_title(xml: &str) -> Option<String> {
    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(error = %e, "Document is not well-formed, no title extracted");
            return None;
        }
    };
    find_title(&doc)
}

fn find_title(doc: &Document<'_>) -> Option<String> {
    descendant_text_ns(doc, DUBLIN_CORE_NS, "title")
        .or_else(|| descendant_text_ns(doc, METADATA_NS, "Title"))
}

/// Parse the metadata header of a legislation document.
///
/// `legislation_type`, `year` and `number` identify the requested document;
/// they fill `type`, `year` and `number` and build the fallback `uri` when
/// the root carries no `DocumentURI`.
pub fn parse_metadata(
    xml: &str,
    legislation_type: LegislationType,
    year: u32,
    number: u32,
) -> Result<LegislationMetadata> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let code = legislation_type.uri_code();

    let uri = root
        .attribute("DocumentURI")
        .map(str::to_string)
        .unwrap_or_else(|| format!("/{code}/{year}/{number}"));

    let title = find_title(&doc).unwrap_or_else(|| fallback_title(legislation_type, year, number));

    let subjects = doc
        .descendants()
        .filter(|n| has_tag_ns(*n, DUBLIN_CORE_NS, "subject"))
        .map(collect_text)
        .filter(|s| !s.is_empty())
        .collect();

    let commencement_date = find_descendant_ns(&doc, METADATA_NS, "ComingIntoForce")
        .and_then(|node| {
            node.descendants()
                .find(|n| has_tag_ns(*n, METADATA_NS, "DateTime"))
        })
        .and_then(|n| n.attribute("Date"))
        .and_then(parse_date);

    Ok(LegislationMetadata {
        uri,
        type_code: code.to_string(),
        year,
        number,
        title,
        long_title: descendant_text_ns(&doc, METADATA_NS, "LongTitle"),
        short_title: descendant_text_ns(&doc, METADATA_NS, "ShortTitle"),
        alternative_title: descendant_text_ns(&doc, METADATA_NS, "AlternativeTitle"),
        made_date: date_attribute(&doc, "Made"),
        laid_date: date_attribute(&doc, "Laid"),
        commencement_date,
        royal_assent_date: date_attribute(&doc, "EnactmentDate"),
        extent: root.attribute("RestrictExtent").map(str::to_string),
        subjects,
        isbn: descendant_attribute_ns(&doc, METADATA_NS, "ISBN", "Value").map(str::to_string),
        status: descendant_attribute_ns(&doc, METADATA_NS, "DocumentStatus", "Value")
            .map(str::to_string),
        publisher: descendant_text_ns(&doc, DUBLIN_CORE_NS, "publisher"),
        language: descendant_text_ns(&doc, DUBLIN_CORE_NS, "language"),
        description: descendant_text_ns(&doc, DUBLIN_CORE_NS, "description"),
    })
}

/// Title used when a document carries none, e.g. `UKPGA 2020/7`.
pub(crate) fn fallback_title(legislation_type: LegislationType, year: u32, number: u32) -> String {
    format!(
        "{} {year}/{number}",
        legislation_type.uri_code().to_uppercase()
    )
}

fn date_attribute(doc: &Document<'_>, element: &str) -> Option<NaiveDate> {
    descendant_attribute_ns(doc, METADATA_NS, element, "Date").and_then(parse_date)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
