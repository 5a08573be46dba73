//! Command-line interface for brickdex.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **browse**: Browse the catalog interactively in the terminal
//! - **list**: Run one filter pass and print the visible cards
//! - **categories**: Print the derived category filter options
//! - **check**: Validate a catalog file and report problems
//! - **export**: Write the normalized catalog back out as JSON
//! - **serve**: Host a catalog directory over HTTP with caching disabled
//!
//! ## Usage
//!
//! ```text
//! # Browse the embedded demo catalog
//! brickdex browse
//!
//! # Browse a local catalog file
//! brickdex browse instructions.json
//!
//! # Filter from a script, JSON output
//! brickdex list instructions.json --search rover --format json
//!
//! # Validate before publishing
//! brickdex check instructions.json
//!
//! # Host the catalog directory for the static page
//! brickdex serve site/ --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::CatalogSource;

pub mod categories;
pub mod check;
pub mod export;
pub mod list;

#[derive(Parser)]
#[command(name = "brickdex")]
#[command(version)]
#[command(about = "Browse, filter, and preview build-instruction catalogs")]
#[command(
    long_about = "brickdex loads a JSON catalog of build-instruction documents (title, category,\ndifficulty, tags, image, PDF link), lets you filter and search it, renders the\nresult as cards, and previews documents without leaving the browser.\n\nCatalogs are plain JSON arrays; pass a file path or an http(s) URL, or omit\nthe argument to use the embedded demo catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively
    Browse(BrowseArgs),

    /// Run one filter pass and print the visible cards
    List(list::ListArgs),

    /// Print the category filter options
    Categories(categories::CategoriesArgs),

    /// Validate a catalog file
    Check(check::CheckArgs),

    /// Write the normalized catalog to a file
    Export(export::ExportArgs),

    /// Serve a catalog directory over HTTP
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct BrowseArgs {
    /// Catalog file path or URL (defaults to the embedded catalog)
    pub catalog: Option<String>,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Directory to serve: the catalog JSON, its images, and any page assets
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Resolve the optional catalog argument shared by most subcommands.
pub fn catalog_source(spec: Option<&str>) -> CatalogSource {
    spec.map_or(CatalogSource::Embedded, CatalogSource::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_source_defaults_to_embedded() {
        assert_eq!(catalog_source(None), CatalogSource::Embedded);
        assert_eq!(
            catalog_source(Some("https://example.com/i.json")),
            CatalogSource::Url("https://example.com/i.json".to_string())
        );
    }
}
