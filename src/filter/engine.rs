use crate::catalog::store::Catalog;
use crate::core::criteria::FilterCriteria;
use crate::core::item::CatalogItem;

/// Applies [`FilterCriteria`] to a borrowed catalog.
pub struct FilterEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> FilterEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The visible subset for the given criteria, in catalog order.
    pub fn apply(&self, criteria: &FilterCriteria) -> Vec<&'a CatalogItem> {
        let term = criteria.normalized_search();
        self.catalog
            .iter()
            .filter(|item| Self::matches(item, &term, criteria))
            .collect()
    }

    /// Like [`apply`](Self::apply), but yielding catalog indices. Interactive
    /// surfaces keep indices so selection survives a re-filter.
    pub fn apply_indices(&self, criteria: &FilterCriteria) -> Vec<usize> {
        let term = criteria.normalized_search();
        self.catalog
            .iter()
            .enumerate()
            .filter(|(_, item)| Self::matches(item, &term, criteria))
            .map(|(index, _)| index)
            .collect()
    }

    fn matches(item: &CatalogItem, term: &str, criteria: &FilterCriteria) -> bool {
        let matches_search = term.is_empty() || item.search_text().contains(term);

        let matches_category = match &criteria.category {
            None => true,
            Some(selected) => item.category.as_deref() == Some(selected.as_str()),
        };

        let matches_difficulty = match &criteria.difficulty {
            None => true,
            Some(selected) => item.difficulty_text() == Some(selected.as_str()),
        };

        matches_search && matches_category && matches_difficulty
    }
}
