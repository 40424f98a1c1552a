//! Typed client for the legislation.gov.uk API.
//!
//! The heart of the crate is the Atom feed parser: [`parse_feed_paged`]
//! turns a listing feed into [`LegislationItem`]s and recovers pagination
//! metadata, estimating it from alternate namespaces when the OpenSearch
//! elements are missing.
//!
//! # Example
//!
//! ```
//! use uk_legislation::{parse_feed_paged, LegislationType};
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <entry>
//!     <id>http://www.legislation.gov.uk/id/ukpga/2020/7</id>
//!     <title>Coronavirus Act 2020</title>
//!   </entry>
//! </feed>"#;
//!
//! let page = parse_feed_paged(xml).unwrap();
//! let item = &page.results[0];
//! assert_eq!(item.legislation_type(), Some(LegislationType::UkPublicGeneralAct));
//! assert_eq!(item.number, Some(7));
//! ```
//!
//! # Architecture
//!
//! - [`feed`]: Atom entry extraction and pagination inference
//! - [`metadata`]: CLML metadata header parsing
//! - [`contents`]: Table of contents parsing
//! - [`client`]: Endpoint mapping and typed operations
//! - [`http`]: The `Fetch` transport seam and its `reqwest` implementation
//! - [`config`]: Constants, namespaces, client options
//! - [`types`]: Legislation type codes and geographical extents
//! - [`models`]: Serializable result types
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace-aware XML helpers
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod contents;
pub mod error;
pub mod feed;
pub mod http;
pub mod metadata;
pub mod models;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use client::LegislationClient;
pub use config::ClientOptions;
pub use error::{LegislationError, Result};
pub use feed::{parse_feed, parse_feed_paged};
pub use models::{LegislationItem, LegislationMetadata, PagedResponse, TableOfContents, TocItem};
pub use types::{GeographicalExtent, LegislationType};
