//! HTTP transport for the legislation.gov.uk API.
//!
//! The client only needs "GET this URL with this Accept header and give me
//! the body as text", expressed by the [`Fetch`] trait. [`HttpFetcher`] is
//! the blocking `reqwest` implementation; tests and callers with their own
//! transport can pass a closure instead.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::config::ClientOptions;
use crate::error::{LegislationError, Result};

/// Longest error body kept in [`LegislationError::HttpStatus`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Fetch the body of `url` as text.
pub trait Fetch {
    fn fetch(&self, url: &str, accept: &str) -> Result<String>;
}

impl<F> Fetch for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn fetch(&self, url: &str, accept: &str) -> Result<String> {
        self(url, accept)
    }
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the timeout and user agent from `options`.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap a pre-configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, accept: &str) -> Result<String> {
        tracing::debug!(url, accept, "GET");

        let response = self.client.get(url).header(ACCEPT, accept).send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LegislationError::NotFound {
                uri: url.to_string(),
            });
        }

        if !status.is_success() {
            let body = response
                .text()
                .ok()
                .map(|text| truncate(text.trim(), MAX_ERROR_BODY_CHARS))
                .filter(|text| !text.is_empty());
            tracing::warn!(status = %status, url, "Request failed");
            return Err(LegislationError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(response.text()?)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
