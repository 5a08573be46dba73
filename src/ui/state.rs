use crate::catalog::index::{category_index, difficulty_index};
use crate::catalog::store::{Catalog, CatalogSource};
use crate::core::criteria::FilterCriteria;
use crate::core::item::CatalogItem;
use crate::filter::engine::FilterEngine;
use crate::ui::modal::{CloseTrigger, PreviewModal};
use crate::view::card::{stats_line, CardView};

/// Message shown until the catalog load settles.
pub const LOADING_MESSAGE: &str = "Loading catalog...";

/// Load progress, reflected in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Load not settled yet; a hang leaves the status here indefinitely.
    Loading,
    Loaded,
    /// Load failed; carries the user-facing guidance message.
    Failed(String),
}

/// All mutable browser state behind one owner.
///
/// Catalog, filter inputs, the visible set, and the modal live here instead
/// of in module-level globals; every mutation happens through a method called
/// from the single event-processing context and runs to completion. Input
/// handling works before the catalog is loaded; filtering an empty catalog
/// just yields an empty visible set.
#[derive(Debug)]
pub struct BrowserState {
    catalog: Catalog,
    categories: Vec<String>,
    difficulties: Vec<String>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
    modal: PreviewModal,
    status: LoadStatus,
}

impl BrowserState {
    /// A browser with nothing loaded yet.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            categories: Vec::new(),
            difficulties: Vec::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            modal: PreviewModal::new(),
            status: LoadStatus::Loading,
        }
    }

    /// Load the catalog once at startup. Failure is recovered here: it is
    /// logged, turned into a status message with guidance, and leaves the
    /// catalog empty so the rest of the browser stays interactive. No retry.
    pub fn load(&mut self, source: &CatalogSource) {
        match Catalog::load(source) {
            Ok(catalog) => self.set_catalog(catalog),
            Err(err) => {
                tracing::error!(%err, %source, "catalog load failed");
                self.catalog = Catalog::default();
                self.categories.clear();
                self.difficulties.clear();
                self.status = LoadStatus::Failed(err.guidance(source));
                self.refilter();
            }
        }
    }

    /// Install an already-loaded catalog, rebuild the filter options, and run
    /// the initial filter pass.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.categories = category_index(&catalog);
        self.difficulties = difficulty_index(&catalog);
        self.catalog = catalog;
        self.status = LoadStatus::Loaded;
        self.refilter();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Selectable category options, collated. The implicit "any category"
    /// option is represented by clearing the selection.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn difficulties(&self) -> &[String] {
        &self.difficulties
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    // Criteria mutation mirrors the input controls: every change re-runs the
    // filter pass synchronously.

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
        self.refilter();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
        self.refilter();
    }

    pub fn set_difficulty(&mut self, difficulty: Option<String>) {
        self.criteria.difficulty = difficulty;
        self.refilter();
    }

    /// Step the category selection through `None -> first -> ... -> None`.
    pub fn cycle_category(&mut self) {
        self.criteria.category = next_option(&self.categories, self.criteria.category.as_deref());
        self.refilter();
    }

    /// Step the difficulty selection the same way.
    pub fn cycle_difficulty(&mut self) {
        self.criteria.difficulty =
            next_option(&self.difficulties, self.criteria.difficulty.as_deref());
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = FilterEngine::new(&self.catalog).apply_indices(&self.criteria);
    }

    /// Catalog indices of the visible set, in catalog order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the empty-state indicator should be shown.
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// The item at a position within the visible set.
    pub fn visible_item(&self, position: usize) -> Option<&CatalogItem> {
        let index = *self.visible.get(position)?;
        self.catalog.items().get(index)
    }

    /// The card for a position within the visible set.
    pub fn visible_card(&self, position: usize) -> Option<CardView> {
        self.visible_item(position).map(CardView::from_item)
    }

    /// Status line content: loading, failure guidance, or the stats summary.
    pub fn status_line(&self) -> String {
        match &self.status {
            LoadStatus::Loading => LOADING_MESSAGE.to_string(),
            LoadStatus::Failed(guidance) => guidance.clone(),
            LoadStatus::Loaded => stats_line(self.visible_count(), self.total_count()),
        }
    }

    // Preview modal. While it is open the adapter routes all input here, so
    // background navigation and filter edits are suppressed.

    pub fn modal(&self) -> &PreviewModal {
        &self.modal
    }

    /// Open the preview for a visible card. A card without a preview target
    /// is a no-op and the modal stays as it was.
    pub fn open_preview(&mut self, position: usize) -> bool {
        match self.visible_card(position) {
            Some(card) => self.modal.open(&card.preview, Some(&card.title)),
            None => false,
        }
    }

    pub fn close_preview(&mut self, trigger: CloseTrigger) {
        self.modal.close(trigger);
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// `None -> options[0] -> options[1] -> ... -> None`, skipping gracefully
/// when the current value is no longer among the options.
fn next_option(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let position = options.iter().position(|o| o == value)?;
            options.get(position + 1).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> BrowserState {
        let catalog = Catalog::from_json(
            r#"[
                {"title": "A", "category": "Motors", "difficulty": 2, "tags": ["x"],
                 "pdf_url": "https://drive.google.com/file/d/ABC123/view"},
                {"title": "B", "category": "Sensors", "difficulty": 4}
            ]"#,
        )
        .unwrap();

        let mut state = BrowserState::new();
        state.set_catalog(catalog);
        state
    }

    #[test]
    fn test_starts_loading_and_interactive() {
        let mut state = BrowserState::new();
        assert_eq!(state.status_line(), LOADING_MESSAGE);

        // Input changes before load completion are harmless.
        state.set_search("anything");
        assert_eq!(state.visible_count(), 0);
        assert!(state.is_empty_result());
    }

    #[test]
    fn test_load_failure_sets_guidance_and_keeps_empty_catalog() {
        let mut state = BrowserState::new();
        let source = CatalogSource::parse("missing/instructions.json");
        state.load(&source);

        assert!(matches!(state.status(), LoadStatus::Failed(_)));
        assert!(state.status_line().contains("exists"));
        assert_eq!(state.total_count(), 0);
        assert!(state.is_empty_result());

        // Still interactive after the failure.
        state.set_search("rover");
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn test_filter_pass_and_stats() {
        let mut state = loaded_state();
        state.set_search("a");

        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.visible_item(0).unwrap().title.as_deref(), Some("A"));
        assert_eq!(state.status_line(), "Showing 1 of 2 instructions.");
        assert!(!state.is_empty_result());
    }

    #[test]
    fn test_category_cycle_wraps_back_to_any() {
        let mut state = loaded_state();
        assert_eq!(state.categories(), ["Motors", "Sensors"]);

        state.cycle_category();
        assert_eq!(state.criteria().category.as_deref(), Some("Motors"));
        state.cycle_category();
        assert_eq!(state.criteria().category.as_deref(), Some("Sensors"));
        state.cycle_category();
        assert_eq!(state.criteria().category, None);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn test_preview_opens_with_rewritten_url() {
        let mut state = loaded_state();
        assert!(state.open_preview(0));
        assert!(state.modal().is_open());
        assert_eq!(
            state.modal().url(),
            Some("https://drive.google.com/file/d/ABC123/preview")
        );
        assert_eq!(state.modal().header().unwrap(), "Preview: A");
    }

    #[test]
    fn test_preview_without_target_is_a_no_op() {
        let mut state = loaded_state();
        // "B" has no pdf_url.
        state.set_search("b");
        assert!(!state.open_preview(0));
        assert!(!state.modal().is_open());
    }

    #[test]
    fn test_preview_close() {
        let mut state = loaded_state();
        state.open_preview(0);
        state.close_preview(CloseTrigger::CancelKey);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn test_clear_filters_restores_full_catalog() {
        let mut state = loaded_state();
        state.set_search("a");
        state.set_difficulty(Some("2".to_string()));
        state.clear_filters();
        assert_eq!(state.visible_count(), state.total_count());
    }
}
