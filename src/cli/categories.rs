use crate::catalog::index::category_index;
use crate::catalog::store::Catalog;
use crate::cli::{catalog_source, OutputFormat};

#[derive(clap::Args)]
pub struct CategoriesArgs {
    /// Catalog file path or URL (defaults to the embedded catalog)
    pub catalog: Option<String>,
}

pub fn run(args: CategoriesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let source = catalog_source(args.catalog.as_deref());
    let catalog = match Catalog::load(&source) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(%err, %source, "catalog load failed");
            anyhow::bail!(err.guidance(&source));
        }
    };

    let categories = category_index(&catalog);

    match format {
        OutputFormat::Text => {
            println!("{} categories", categories.len());
            for category in &categories {
                println!("  {category}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        OutputFormat::Tsv => {
            for category in &categories {
                println!("{category}");
            }
        }
    }

    Ok(())
}
