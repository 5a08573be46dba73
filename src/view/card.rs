use serde::Serialize;

use crate::core::item::CatalogItem;
use crate::view::urls::{resolve_image_url, resolve_preview_url};

/// Placeholder shown when an item has no title.
pub const DEFAULT_TITLE: &str = "Untitled instruction";

/// Placeholder shown when an item has no category.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Placeholder shown when an item has no description.
pub const DEFAULT_DESCRIPTION: &str = "No description available for this model.";

/// Shown in the meta line when an item has no difficulty.
pub const MISSING_DIFFICULTY: &str = "—";

/// Message displayed while no visible item exists.
pub const EMPTY_RESULT_MESSAGE: &str = "No instructions match the current filters.";

/// Plain display data for one catalog item.
///
/// Built once per render pass; building never touches the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    /// Combined category/difficulty line, e.g. `Category: Motors • Difficulty: 2/5`.
    pub meta: String,
    pub description: String,
    /// Tag badges, in original item order.
    pub tags: Vec<String>,
    /// Resolved image source; `None` means the card has no image region.
    pub image: Option<String>,
    /// Direct link to the document; empty when the item has none.
    pub link: String,
    /// Resolved preview target; empty when the item has no document link.
    pub preview: String,
}

impl CardView {
    pub fn from_item(item: &CatalogItem) -> Self {
        let category = item.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        let difficulty = item
            .difficulty
            .as_ref()
            .map_or_else(|| MISSING_DIFFICULTY.to_string(), |d| format!("{d}/5"));
        let link = item.pdf_url.clone().unwrap_or_default();

        Self {
            title: item
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            meta: format!("Category: {category} • Difficulty: {difficulty}"),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            tags: item.tags.clone(),
            image: resolve_image_url(item.image_url.as_deref()),
            preview: resolve_preview_url(&link),
            link,
        }
    }

    /// Whether a preview can be opened for this card.
    pub fn has_preview(&self) -> bool {
        !self.preview.is_empty()
    }
}

/// Summary line for the status area.
pub fn stats_line(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} instructions.")
}
