//! Command-line interface for the legislation.gov.uk client.

use std::path::Path;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::client::LegislationClient;
use crate::config::ClientOptions;
use crate::error::Result;
use crate::feed::{parse_feed_paged_with, FeedOptions, NumericPolicy};
use crate::models::{
    LegislationItem, LegislationMetadata, PagedResponse, TableOfContents, TocItem,
};
use crate::types::LegislationType;

/// Query legislation.gov.uk from the command line.
#[derive(Parser)]
#[command(name = "uk-legislation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API base URL (default: $LEGISLATION_BASE_URL or https://www.legislation.gov.uk)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List legislation of a type, optionally for one year.
    Feed {
        /// Type code (e.g., ukpga, uksi, asp)
        #[arg(value_parser = LegislationType::from_uri_code)]
        legislation_type: LegislationType,

        /// Year of enactment
        #[arg(short, long)]
        year: Option<u32>,
    },

    /// Fetch a document and show its title.
    Get {
        #[arg(value_parser = LegislationType::from_uri_code)]
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },

    /// Fetch a document and show its metadata.
    Metadata {
        #[arg(value_parser = LegislationType::from_uri_code)]
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },

    /// Fetch the table of contents of a document.
    Contents {
        #[arg(value_parser = LegislationType::from_uri_code)]
        legislation_type: LegislationType,
        year: u32,
        number: u32,
    },

    /// Parse a saved Atom feed without touching the network.
    Parse {
        /// Path to an Atom feed file
        file: std::path::PathBuf,

        /// Reject entries whose year or number is not numeric
        #[arg(long)]
        strict: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let mut options = ClientOptions::from_env();
    if let Some(base_url) = cli.base_url {
        options = options.with_base_url(base_url);
    }
    let json = cli.json;

    match cli.command {
        Commands::Feed {
            legislation_type,
            year,
        } => {
            let client = LegislationClient::new(options)?;
            let label = match year {
                Some(year) => format!("{legislation_type}/{year}"),
                None => legislation_type.to_string(),
            };
            let page = with_spinner(&format!("Fetching {label} feed..."), || match year {
                Some(year) => client.get_legislation_by_type_and_year(legislation_type, year),
                None => client.get_legislation_by_type(legislation_type),
            })?;
            output(&page, json, print_page)
        }
        Commands::Get {
            legislation_type,
            year,
            number,
        } => {
            let client = LegislationClient::new(options)?;
            let item = with_spinner("Fetching document...", || {
                client.get_legislation(legislation_type, year, number)
            })?;
            output(&item, json, print_item)
        }
        Commands::Metadata {
            legislation_type,
            year,
            number,
        } => {
            let client = LegislationClient::new(options)?;
            let metadata = with_spinner("Fetching metadata...", || {
                client.get_metadata(legislation_type, year, number)
            })?;
            output(&metadata, json, print_metadata)
        }
        Commands::Contents {
            legislation_type,
            year,
            number,
        } => {
            let client = LegislationClient::new(options)?;
            let toc = with_spinner("Fetching table of contents...", || {
                client.get_table_of_contents(legislation_type, year, number)
            })?;
            output(&toc, json, print_contents)
        }
        Commands::Parse { file, strict } => {
            let page = parse_file(&file, strict)?;
            output(&page, json, print_page)
        }
    }
}

fn parse_file(path: &Path, strict: bool) -> Result<PagedResponse<LegislationItem>> {
    let xml = std::fs::read_to_string(path)?;
    let options = FeedOptions {
        numeric_policy: if strict {
            NumericPolicy::Strict
        } else {
            NumericPolicy::Lenient
        },
    };
    parse_feed_paged_with(&xml, &options)
}

/// Run `task` behind a spinner, clearing it whether or not the task succeeds.
fn with_spinner<T>(message: &str, task: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = task();
    pb.finish_and_clear();
    result
}

fn output<T: Serialize>(value: &T, json: bool, print: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

fn print_page(page: &PagedResponse<LegislationItem>) {
    println!(
        "{} {} results, page {} of {} ({} per page)",
        style("Found").bold(),
        style(page.total_results).cyan(),
        page.page,
        page.total_pages,
        page.page_size
    );
    println!();

    for item in &page.results {
        let reference = match (&item.type_code, item.year, item.number) {
            (Some(code), Some(year), Some(number)) => format!("{code}/{year}/{number}"),
            _ => item.uri.clone(),
        };
        println!("  {} {}", style(reference).cyan(), item.title);
        if let Some(date) = item.made_date {
            println!("    Made: {}", style(date).green());
        }
    }

    if page.has_more_pages() {
        println!();
        println!("{}", style("More pages available").yellow());
    }
}

fn print_item(item: &LegislationItem) {
    println!("  Title: {}", style(&item.title).green());
    println!("  URI: {}", item.uri);
}

fn print_metadata(metadata: &LegislationMetadata) {
    println!("  Title: {}", style(&metadata.title).green());
    println!("  URI: {}", metadata.uri);
    if let Some(status) = &metadata.status {
        println!("  Status: {status}");
    }
    if let Some(extent) = &metadata.extent {
        println!("  Extent: {extent}");
    }
    let dates = [
        ("Made", metadata.made_date),
        ("Laid", metadata.laid_date),
        ("Royal assent", metadata.royal_assent_date),
        ("In force", metadata.commencement_date),
    ];
    for (label, date) in dates {
        if let Some(date) = date {
            println!("  {label}: {}", style(date).green());
        }
    }
    if !metadata.subjects.is_empty() {
        println!("  Subjects: {}", metadata.subjects.join(", "));
    }
}

fn print_contents(toc: &TableOfContents) {
    println!("  Title: {}", style(&toc.title).green());
    println!();
    print_toc_items(&toc.items, 1);
}

fn print_toc_items(items: &[TocItem], depth: usize) {
    for item in items {
        let label = [item.number.as_deref(), item.title.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let label = if label.is_empty() {
            item.item_type.clone()
        } else {
            label
        };
        if item.is_repealed {
            println!("{}{} {}", "  ".repeat(depth), label, style("(repealed)").dim());
        } else {
            println!("{}{}", "  ".repeat(depth), label);
        }
        if let Some(children) = &item.children {
            print_toc_items(children, depth + 1);
        }
    }
}
