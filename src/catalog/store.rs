use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::item::CatalogItem;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to fetch catalog: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("catalog request returned HTTP status {0}")]
    Status(u16),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Human-readable recovery hint for a failed load, differentiated by
    /// cause: nothing answering over HTTP means the catalog needs to be
    /// served locally; anything else means the resource should be checked.
    pub fn guidance(&self, source: &CatalogSource) -> String {
        match self {
            Self::Fetch(err) if err.is_connect() => format!(
                "Could not load the catalog: nothing is answering at {source}. \
                 Serve it locally first, e.g. `brickdex serve <dir>`."
            ),
            _ => format!(
                "Could not load the catalog. Check that {source} exists and is readable."
            ),
        }
    }
}

/// Where a catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The default catalog compiled into the binary.
    Embedded,
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a CLI argument as a URL or a filesystem path.
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Self::Url(spec.to_string())
        } else {
            Self::Path(PathBuf::from(spec))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "the embedded catalog"),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// The loaded instruction catalog: an ordered, immutable item list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the embedded default catalog.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/instructions.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from the given source.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Embedded => Self::load_embedded(),
            CatalogSource::Path(path) => Self::load_from_file(path),
            CatalogSource::Url(url) => Self::load_from_url(url),
        }
    }

    /// Load a catalog from a JSON file. The file is re-read on every call;
    /// nothing is cached between loads.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Fetch a catalog over HTTP(S). The request asks intermediaries not to
    /// serve a cached copy, so edits to the source are reflected on reload.
    pub fn load_from_url(url: &str) -> Result<Self, CatalogError> {
        let response = reqwest::blocking::Client::new()
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache, no-store")
            .header(reqwest::header::PRAGMA, "no-cache")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Self::from_json(&response.text()?)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// A payload that is valid JSON but not an array yields an empty catalog
    /// rather than an error; entries that are not objects are skipped.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let payload: Value = serde_json::from_str(json)?;

        let Value::Array(entries) = payload else {
            tracing::warn!("catalog payload is not an array; treating it as empty");
            return Ok(Self::default());
        };

        let mut items = Vec::with_capacity(entries.len());
        let mut skipped = 0usize;
        for entry in entries {
            match entry {
                Value::Object(_) => match serde_json::from_value::<CatalogItem>(entry) {
                    Ok(item) => items.push(item),
                    Err(_) => skipped += 1,
                },
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "dropped catalog entries that were not objects");
        }

        Ok(Self { items })
    }

    /// Build a catalog directly from items (used by tests and `export`).
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize the catalog back to the array shape the loader accepts.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }
}
