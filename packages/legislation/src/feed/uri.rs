//! Decomposition of legislation identifier URIs.
//!
//! Feed entry ids have the shape `scheme://host/id/{type}/{year}[/{number}]`;
//! document links drop the `id` segment. After splitting on `/` and dropping
//! empty segments, an identifier needs at least five segments to decompose.
//! The type code follows the host (and the `id` marker when present), then
//! the year, then the optional number.

use std::fmt;

/// Index of the first path segment after `scheme:` and host.
const PATH_START: usize = 2;

/// Minimum non-empty segment count of a decomposable identifier.
const MIN_SEGMENTS: usize = 5;

/// Path segment marking the identifier form of a URI.
const ID_MARKER: &str = "id";

/// A numeric URI segment, keeping unparseable text distinct from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericSegment {
    Parsed(u32),
    Unparseable(String),
}

impl NumericSegment {
    fn parse(segment: &str) -> Self {
        segment
            .parse()
            .map(Self::Parsed)
            .unwrap_or_else(|_| Self::Unparseable(segment.to_string()))
    }

    /// The parsed value, with unparseable text coerced to 0.
    #[must_use]
    pub fn value_or_zero(&self) -> u32 {
        match self {
            Self::Parsed(value) => *value,
            Self::Unparseable(_) => 0,
        }
    }

    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable(_))
    }
}

impl fmt::Display for NumericSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(value) => write!(f, "{value}"),
            Self::Unparseable(text) => f.write_str(text),
        }
    }
}

/// Structured fields of a legislation identifier URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    /// Raw type code, not validated against the type table.
    pub type_code: String,
    pub year: NumericSegment,
    pub number: Option<NumericSegment>,
}

impl UriParts {
    /// Decompose `uri`, or `None` when it has fewer than five non-empty segments.
    ///
    /// Unparseable year or number segments are kept as
    /// [`NumericSegment::Unparseable`]; decomposition never fails otherwise.
    ///
    /// # Examples
    /// ```
    /// use uk_legislation::feed::uri::{NumericSegment, UriParts};
    ///
    /// let parts = UriParts::parse("http://www.legislation.gov.uk/ukpga/2020/1").unwrap();
    /// assert_eq!(parts.type_code, "ukpga");
    /// assert_eq!(parts.year, NumericSegment::Parsed(2020));
    /// assert_eq!(parts.number, Some(NumericSegment::Parsed(1)));
    ///
    /// assert!(UriParts::parse("http://www.legislation.gov.uk/ukpga/2020").is_none());
    /// ```
    #[must_use]
    pub fn parse(uri: &str) -> Option<Self> {
        let segments: Vec<&str> = uri.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < MIN_SEGMENTS {
            return None;
        }

        let start = if segments[PATH_START] == ID_MARKER {
            PATH_START + 1
        } else {
            PATH_START
        };

        Some(Self {
            type_code: segments[start].to_string(),
            year: NumericSegment::parse(segments[start + 1]),
            number: segments
                .get(start + 2)
                .map(|segment| NumericSegment::parse(segment)),
        })
    }

    /// The first unparseable numeric segment, named for error reporting.
    #[must_use]
    pub fn first_unparseable(&self) -> Option<(&'static str, &NumericSegment)> {
        if self.year.is_unparseable() {
            return Some(("year", &self.year));
        }
        self.number
            .as_ref()
            .filter(|n| n.is_unparseable())
            .map(|n| ("number", n))
    }
}
