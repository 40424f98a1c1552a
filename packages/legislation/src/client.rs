//! Typed client for the legislation.gov.uk API.

use crate::config::{validate_date, ClientOptions};
use crate::contents::parse_table_of_contents;
use crate::error::Result;
use crate::feed::parse_feed_paged;
use crate::http::{Fetch, HttpFetcher};
use crate::metadata::{extract_title, fallback_title, parse_metadata};
use crate::models::{LegislationItem, LegislationMetadata, PagedResponse, TableOfContents};
use crate::types::LegislationType;

const ACCEPT_XML: &str = "application/xml";
const ACCEPT_ATOM: &str = "application/atom+xml";
const ACCEPT_HTML: &str = "text/html";

/// An API endpoint: a path template plus the representation it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/{type}/{year}/{number}/data.xml`
    Legislation {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },
    /// `/{type}/{year}/{number}/{date}/data.xml`
    LegislationAtDate {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
        date: &'a str,
    },
    /// `/{type}/{year}/{number}/enacted/data.xml`
    LegislationAsEnacted {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },
    /// `/{type}/{year}/{number}/{provision_type}/{provision_number}/data.xml`
    Provision {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
        provision_type: &'a str,
        provision_number: &'a str,
    },
    /// `/{type}/{year}/{number}/contents/data.xml`
    TableOfContents {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },
    /// `/{type}/data.feed`
    TypeFeed { legislation_type: LegislationType },
    /// `/{type}/{year}/data.feed`
    TypeAndYearFeed {
        legislation_type: LegislationType,
        year: u32,
    },
    /// `/{type}/{year}/{number}`
    Html {
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },
}

impl Endpoint<'_> {
    /// Path relative to the API base URL.
    ///
    /// # Examples
    /// ```
    /// use uk_legislation::client::Endpoint;
    /// use uk_legislation::types::LegislationType;
    ///
    /// let endpoint = Endpoint::TypeAndYearFeed {
    ///     legislation_type: LegislationType::UkStatutoryInstrument,
    ///     year: 2021,
    /// };
    /// assert_eq!(endpoint.path(), "/uksi/2021/data.feed");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Legislation {
                legislation_type,
                year,
                number,
            } => format!("/{legislation_type}/{year}/{number}/data.xml"),
            Self::LegislationAtDate {
                legislation_type,
                year,
                number,
                date,
            } => format!("/{legislation_type}/{year}/{number}/{date}/data.xml"),
            Self::LegislationAsEnacted {
                legislation_type,
                year,
                number,
            } => format!("/{legislation_type}/{year}/{number}/enacted/data.xml"),
            Self::Provision {
                legislation_type,
                year,
                number,
                provision_type,
                provision_number,
            } => format!(
                "/{legislation_type}/{year}/{number}/{provision_type}/{provision_number}/data.xml"
            ),
            Self::TableOfContents {
                legislation_type,
                year,
                number,
            } => format!("/{legislation_type}/{year}/{number}/contents/data.xml"),
            Self::TypeFeed { legislation_type } => format!("/{legislation_type}/data.feed"),
            Self::TypeAndYearFeed {
                legislation_type,
                year,
            } => format!("/{legislation_type}/{year}/data.feed"),
            Self::Html {
                legislation_type,
                year,
                number,
            } => format!("/{legislation_type}/{year}/{number}"),
        }
    }

    /// Accept header value for this endpoint.
    #[must_use]
    pub fn accept(&self) -> &'static str {
        match self {
            Self::TypeFeed { .. } | Self::TypeAndYearFeed { .. } => ACCEPT_ATOM,
            Self::Html { .. } => ACCEPT_HTML,
            _ => ACCEPT_XML,
        }
    }
}

/// Client for the legislation.gov.uk API.
///
/// Raw operations (`*_xml`, `*_feed`, `legislation_html`) return the
/// response body unchanged; `get_*` operations parse it.
#[derive(Debug, Clone)]
pub struct LegislationClient<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl LegislationClient<HttpFetcher> {
    /// Create a client with its own HTTP connection pool.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self::with_fetcher(&options, fetcher))
    }
}

impl<F: Fetch> LegislationClient<F> {
    /// Create a client that fetches through `fetcher`.
    pub fn with_fetcher(options: &ClientOptions, fetcher: F) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    /// Absolute URL of `endpoint`.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<String> {
        self.fetcher.fetch(&self.url(endpoint), endpoint.accept())
    }

    /// Current revised version of a document, as CLML.
    pub fn legislation_xml(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<String> {
        self.fetch(&Endpoint::Legislation {
            legislation_type,
            year,
            number,
        })
    }

    /// Document as it stood on `date` (YYYY-MM-DD).
    pub fn legislation_at_date_xml(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
        date: &str,
    ) -> Result<String> {
        validate_date(date)?;
        self.fetch(&Endpoint::LegislationAtDate {
            legislation_type,
            year,
            number,
            date,
        })
    }

    /// Original (as enacted or made) version of a document.
    pub fn legislation_as_enacted_xml(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<String> {
        self.fetch(&Endpoint::LegislationAsEnacted {
            legislation_type,
            year,
            number,
        })
    }

    /// A single provision, e.g. `section` `1` or `regulation` `2/a`.
    pub fn provision_xml(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
        provision_type: &str,
        provision_number: &str,
    ) -> Result<String> {
        self.fetch(&Endpoint::Provision {
            legislation_type,
            year,
            number,
            provision_type,
            provision_number,
        })
    }

    pub fn table_of_contents_xml(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<String> {
        self.fetch(&Endpoint::TableOfContents {
            legislation_type,
            year,
            number,
        })
    }

    /// Atom listing of all legislation of a type.
    pub fn legislation_by_type_feed(&self, legislation_type: LegislationType) -> Result<String> {
        self.fetch(&Endpoint::TypeFeed { legislation_type })
    }

    /// Atom listing of legislation of a type made in `year`.
    pub fn legislation_by_type_and_year_feed(
        &self,
        legislation_type: LegislationType,
        year: u32,
    ) -> Result<String> {
        self.fetch(&Endpoint::TypeAndYearFeed {
            legislation_type,
            year,
        })
    }

    pub fn legislation_html(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<String> {
        self.fetch(&Endpoint::Html {
            legislation_type,
            year,
            number,
        })
    }

    /// Fetch a document and summarise it as a [`LegislationItem`].
    ///
    /// The title comes from the document metadata, or is `"{CODE} {year}/{number}"`
    /// when the document has none.
    #[tracing::instrument(skip(self))]
    pub fn get_legislation(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<LegislationItem> {
        let xml = self.legislation_xml(legislation_type, year, number)?;
        let code = legislation_type.uri_code();

        Ok(LegislationItem {
            title: extract_title(&xml)
                .unwrap_or_else(|| fallback_title(legislation_type, year, number)),
            uri: format!("/{code}/{year}/{number}"),
            type_code: Some(code.to_string()),
            year: Some(year),
            number: Some(number),
            ..Default::default()
        })
    }

    /// Fetch and parse the metadata header of a document.
    #[tracing::instrument(skip(self))]
    pub fn get_metadata(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<LegislationMetadata> {
        let xml = self.legislation_xml(legislation_type, year, number)?;
        parse_metadata(&xml, legislation_type, year, number)
    }

    /// Fetch and parse the table of contents of a document.
    #[tracing::instrument(skip(self))]
    pub fn get_table_of_contents(
        &self,
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    ) -> Result<TableOfContents> {
        let xml = self.table_of_contents_xml(legislation_type, year, number)?;
        parse_table_of_contents(&xml)
    }

    /// Paged listing of legislation of a type.
    #[tracing::instrument(skip(self))]
    pub fn get_legislation_by_type(
        &self,
        legislation_type: LegislationType,
    ) -> Result<PagedResponse<LegislationItem>> {
        let xml = self.legislation_by_type_feed(legislation_type)?;
        parse_feed_paged(&xml)
    }

    /// Paged listing of legislation of a type made in `year`.
    #[tracing::instrument(skip(self))]
    pub fn get_legislation_by_type_and_year(
        &self,
        legislation_type: LegislationType,
        year: u32,
    ) -> Result<PagedResponse<LegislationItem>> {
        let xml = self.legislation_by_type_and_year_feed(legislation_type, year)?;
        parse_feed_paged(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LegislationError;
    use std::cell::RefCell;

    const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/1</id><title>Test Act 2020</title></entry>
    </feed>"#;

    fn client_returning<'a>(
        body: &'static str,
        seen: &'a RefCell<Vec<(String, String)>>,
    ) -> LegislationClient<impl Fn(&str, &str) -> Result<String> + 'a> {
        let options = ClientOptions::default().with_base_url("https://example.test/");
        LegislationClient::with_fetcher(&options, move |url: &str, accept: &str| -> Result<String> {
            seen.borrow_mut().push((url.to_string(), accept.to_string()));
            Ok(body.to_string())
        })
    }

    #[test]
    fn test_endpoint_paths() {
        let ty = LegislationType::UkPublicGeneralAct;
        assert_eq!(
            Endpoint::Legislation {
                legislation_type: ty,
                year: 2020,
                number: 1
            }
            .path(),
            "/ukpga/2020/1/data.xml"
        );
        assert_eq!(
            Endpoint::LegislationAtDate {
                legislation_type: ty,
                year: 2020,
                number: 1,
                date: "2021-01-01"
            }
            .path(),
            "/ukpga/2020/1/2021-01-01/data.xml"
        );
        assert_eq!(
            Endpoint::LegislationAsEnacted {
                legislation_type: ty,
                year: 2020,
                number: 1
            }
            .path(),
            "/ukpga/2020/1/enacted/data.xml"
        );
        assert_eq!(
            Endpoint::Provision {
                legislation_type: ty,
                year: 2020,
                number: 1,
                provision_type: "section",
                provision_number: "2/a"
            }
            .path(),
            "/ukpga/2020/1/section/2/a/data.xml"
        );
        assert_eq!(
            Endpoint::TableOfContents {
                legislation_type: ty,
                year: 2020,
                number: 1
            }
            .path(),
            "/ukpga/2020/1/contents/data.xml"
        );
        assert_eq!(
            Endpoint::TypeFeed {
                legislation_type: ty
            }
            .path(),
            "/ukpga/data.feed"
        );
        assert_eq!(
            Endpoint::Html {
                legislation_type: ty,
                year: 2020,
                number: 1
            }
            .path(),
            "/ukpga/2020/1"
        );
    }

    #[test]
    fn test_endpoint_accept_headers() {
        let ty = LegislationType::UkStatutoryInstrument;
        assert_eq!(
            Endpoint::TypeFeed {
                legislation_type: ty
            }
            .accept(),
            "application/atom+xml"
        );
        assert_eq!(
            Endpoint::Html {
                legislation_type: ty,
                year: 1,
                number: 1
            }
            .accept(),
            "text/html"
        );
        assert_eq!(
            Endpoint::Legislation {
                legislation_type: ty,
                year: 1,
                number: 1
            }
            .accept(),
            "application/xml"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let seen = RefCell::new(Vec::new());
        let client = client_returning(FEED, &seen);
        client
            .legislation_by_type_feed(LegislationType::UkPublicGeneralAct)
            .unwrap();
        assert_eq!(
            seen.borrow()[0],
            (
                "https://example.test/ukpga/data.feed".to_string(),
                "application/atom+xml".to_string()
            )
        );
    }

    #[test]
    fn test_get_legislation_by_type_and_year() {
        let seen = RefCell::new(Vec::new());
        let client = client_returning(FEED, &seen);
        let page = client
            .get_legislation_by_type_and_year(LegislationType::UkPublicGeneralAct, 2020)
            .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Test Act 2020");
        assert_eq!(page.total_results, 1);
        assert_eq!(seen.borrow()[0].0, "https://example.test/ukpga/2020/data.feed");
    }

    #[test]
    fn test_get_legislation_fallback_title() {
        let seen = RefCell::new(Vec::new());
        let client = client_returning("<legislation/>", &seen);
        let item = client
            .get_legislation(LegislationType::UkPublicGeneralAct, 2020, 1)
            .unwrap();

        assert_eq!(item.title, "UKPGA 2020/1");
        assert_eq!(item.uri, "/ukpga/2020/1");
        assert_eq!(item.type_code.as_deref(), Some("ukpga"));
        assert_eq!(item.year, Some(2020));
        assert_eq!(item.number, Some(1));
    }

    #[test]
    fn test_at_date_rejects_bad_date_before_fetching() {
        let seen = RefCell::new(Vec::new());
        let client = client_returning("<x/>", &seen);
        let err = client
            .legislation_at_date_xml(LegislationType::UkPublicGeneralAct, 2020, 1, "01/01/2021")
            .unwrap_err();
        assert!(matches!(err, LegislationError::InvalidDate(_)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_fetch_errors_propagate() {
        let options = ClientOptions::default();
        let client = LegislationClient::with_fetcher(&options, |url: &str, _: &str| -> Result<String> {
            Err(LegislationError::NotFound {
                uri: url.to_string(),
            })
        });
        let err = client
            .get_legislation_by_type(LegislationType::ScottishAct)
            .unwrap_err();
        assert!(
            matches!(err, LegislationError::NotFound { uri } if uri == "https://www.legislation.gov.uk/asp/data.feed")
        );
    }
}
