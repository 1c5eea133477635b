use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::catalog::{Catalog, load_catalog};
use crate::filters::{parse_query, serialize};
use crate::models::{EvidenceType, SearchOptions};
use crate::utils::{CatalogSource, catalog_path, decode_search_link, encode_search_link};

#[derive(Parser)]
#[command(name = "evidence-query")]
#[command(version = "0.1.0")]
#[command(about = "Parse, resolve and canonicalize evidence search queries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the tokenized form of a query
    Parse {
        query: String,
    },
    /// Resolve a query against the tag/user catalog and print the criteria as JSON
    Resolve {
        query: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Print the canonical form of a query
    Canonical {
        query: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Build a shareable link for a query
    Link {
        query: String,
        /// Label stored alongside the query
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show the query stored in a link
    DecodeLink {
        link: String,
    },
    /// List the evidence types accepted by `type:`
    Types,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog JSON file (defaults to $EVIDENCE_QUERY_CATALOG, then the config directory)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { query }) => {
            let parsed = parse_query(&query);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Some(Commands::Resolve { query, catalog }) => {
            let opts = resolve_reporting(&query, &catalog)?;
            println!("{}", serde_json::to_string_pretty(&opts)?);
        }
        Some(Commands::Canonical { query, catalog }) => {
            let opts = resolve_reporting(&query, &catalog)?;
            println!("{}", serialize(&opts));
        }
        Some(Commands::Link { query, name, catalog }) => {
            let opts = resolve_reporting(&query, &catalog)?;
            println!("{}", encode_search_link(&serialize(&opts), name.as_deref()));
        }
        Some(Commands::DecodeLink { link }) => {
            let saved = decode_search_link(&link).context("Failed to decode search link")?;
            println!("Query: {}", saved.query);
            if let Some(name) = saved.name {
                println!("Name: {}", name);
            }
        }
        Some(Commands::Types) => {
            for t in EvidenceType::ALL {
                println!("{:<20} {}", t.id(), t.display_name());
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_catalog(args: &CatalogArgs) -> Result<Catalog> {
    match catalog_path(args.catalog.clone())? {
        CatalogSource::Explicit(path) => load_catalog(&path),
        CatalogSource::Default(path) if path.exists() => load_catalog(&path),
        CatalogSource::Default(path) => {
            warn!(path = %path.display(), "no catalog found, tag and operator filters will not resolve");
            Ok(Catalog::default())
        }
    }
}

/// Resolve `query`, printing a warning for every value that could not be applied
fn resolve_reporting(query: &str, args: &CatalogArgs) -> Result<SearchOptions> {
    let catalog = open_catalog(args)?;
    let (opts, issues) = catalog.resolve_with_report(query);

    for issue in &issues {
        eprintln!("Warning: {}", issue);
    }

    Ok(opts)
}
