use serde_json::json;

use crate::catalog::store::Catalog;
use crate::cli::{catalog_source, OutputFormat};
use crate::core::criteria::FilterCriteria;
use crate::filter::engine::FilterEngine;
use crate::view::card::{stats_line, CardView, EMPTY_RESULT_MESSAGE};

#[derive(clap::Args)]
pub struct ListArgs {
    /// Catalog file path or URL (defaults to the embedded catalog)
    pub catalog: Option<String>,

    /// Free-text search term (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category to require
    #[arg(short, long)]
    pub category: Option<String>,

    /// Exact difficulty to require (e.g. "3")
    #[arg(short, long)]
    pub difficulty: Option<String>,
}

pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let source = catalog_source(args.catalog.as_deref());
    let catalog = match Catalog::load(&source) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(%err, %source, "catalog load failed");
            anyhow::bail!(err.guidance(&source));
        }
    };

    if verbose {
        eprintln!("Loaded {} items from {}", catalog.len(), source);
    }

    let criteria = FilterCriteria {
        search: args.search,
        category: args.category,
        difficulty: args.difficulty,
    };

    let visible = FilterEngine::new(&catalog).apply(&criteria);
    let cards: Vec<CardView> = visible.iter().map(|item| CardView::from_item(item)).collect();

    match format {
        OutputFormat::Text => {
            println!("{}", stats_line(cards.len(), catalog.len()));
            if cards.is_empty() {
                println!("{EMPTY_RESULT_MESSAGE}");
                return Ok(());
            }
            for card in &cards {
                println!();
                println!("{}", card.title);
                println!("  {}", card.meta);
                println!("  {}", card.description);
                if !card.tags.is_empty() {
                    let badges = card
                        .tags
                        .iter()
                        .map(|tag| format!("[{tag}]"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("  Tags: {badges}");
                }
                if let Some(image) = &card.image {
                    println!("  Image: {image}");
                }
                if !card.link.is_empty() {
                    println!("  Document: {}", card.link);
                }
                if card.has_preview() && card.preview != card.link {
                    println!("  Preview: {}", card.preview);
                }
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "stats": {
                    "visible": cards.len(),
                    "total": catalog.len(),
                    "message": stats_line(cards.len(), catalog.len()),
                },
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("title\tmeta\ttags\timage\tlink\tpreview");
            for card in &cards {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    card.title,
                    card.meta,
                    card.tags.join(","),
                    card.image.as_deref().unwrap_or(""),
                    card.link,
                    card.preview
                );
            }
        }
    }

    Ok(())
}
