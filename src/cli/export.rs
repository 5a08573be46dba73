use std::path::PathBuf;

use crate::catalog::store::Catalog;
use crate::cli::catalog_source;

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Catalog file path or URL (defaults to the embedded catalog)
    pub catalog: Option<String>,

    /// Output file path
    #[arg(short, long, required = true)]
    pub output: PathBuf,
}

/// Round-trip a catalog through the lenient loader and write it back out in
/// the array shape the loader accepts. Useful for normalizing hand-edited
/// files (stringified difficulties, dropped malformed entries).
pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let source = catalog_source(args.catalog.as_deref());
    let catalog = match Catalog::load(&source) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(%err, %source, "catalog load failed");
            anyhow::bail!(err.guidance(&source));
        }
    };

    let json = catalog.to_json()?;
    std::fs::write(&args.output, json)?;

    println!(
        "Exported {} items to {}",
        catalog.len(),
        args.output.display()
    );

    Ok(())
}
