//! Error types for the legislation client.
//!
//! A single `LegislationError` covers parsing, lookup and transport
//! failures. Missing optional feed elements are never errors; see
//! [`crate::feed`] for the degrade rules.

use thiserror::Error;

/// Main error type for the legislation library.
#[derive(Debug, Error)]
pub enum LegislationError {
    /// Document is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Well-formed XML whose root is not an Atom feed.
    #[error("Not an Atom feed: root element is <{root}>")]
    NotAtomFeed { root: String },

    /// Legislation URI that does not decompose under the strict policy.
    #[error("Invalid legislation URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Legislation type code not present in the type table.
    #[error("Unknown legislation type URI code: '{0}'")]
    UnknownTypeCode(String),

    /// Invalid point-in-time date.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2021-01-01)")]
    InvalidDate(String),

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status} from {url}{}", .body.as_ref().map(|b| format!(": {b}")).unwrap_or_default())]
    HttpStatus {
        status: u16,
        url: String,
        body: Option<String>,
    },

    /// Requested legislation does not exist.
    #[error("Legislation not found: {uri}")]
    NotFound { uri: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for legislation operations.
pub type Result<T> = std::result::Result<T, LegislationError>;
