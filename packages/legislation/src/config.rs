//! Configuration constants, client options and validation functions.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{LegislationError, Result};

/// Base URL of the legislation.gov.uk API.
pub const DEFAULT_BASE_URL: &str = "https://www.legislation.gov.uk";

/// HTTP timeout in seconds.
///
/// Full-text documents for large Acts run to several megabytes.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// User agent string identifying this client.
pub const USER_AGENT: &str = concat!("uk-legislation/", env!("CARGO_PKG_VERSION"));

/// Atom syndication namespace.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// OpenSearch namespace carrying paged result-set metadata.
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";

/// legislation.gov.uk namespace (feed paging counters and CLML body).
pub const LEGISLATION_NS: &str = "http://www.legislation.gov.uk/namespaces/legislation";

/// legislation.gov.uk metadata namespace (`ukm:`).
pub const METADATA_NS: &str = "http://www.legislation.gov.uk/namespaces/metadata";

/// Dublin Core elements namespace (`dc:`).
pub const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate a point-in-time date (YYYY-MM-DD).
///
/// Future dates are accepted: legislation.gov.uk serves prospective
/// versions for them.
///
/// # Examples
/// ```
/// use uk_legislation::config::validate_date;
///
/// assert!(validate_date("2021-01-01").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2021-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(LegislationError::InvalidDate(date_str.to_string()));
    }

    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| LegislationError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

/// Options for [`crate::client::LegislationClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientOptions {
    /// Load options from environment variables, falling back to defaults.
    ///
    /// Reads `LEGISLATION_BASE_URL`, `LEGISLATION_TIMEOUT_SECS` and
    /// `LEGISLATION_USER_AGENT`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("LEGISLATION_BASE_URL").unwrap_or(defaults.base_url);

        let timeout = std::env::var("LEGISLATION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let user_agent = std::env::var("LEGISLATION_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            base_url,
            timeout,
            user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
