/// Active filter inputs, owned by whichever controls edit them.
///
/// Criteria are transient: they are rebuilt (or mutated in place) on every
/// input change and handed to the filter engine as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against each item's
    /// search text. Empty matches everything.
    pub search: String,

    /// Exact category to require, or `None` for any category.
    pub category: Option<String>,

    /// Exact difficulty (textual form) to require, or `None` for any.
    pub difficulty: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// True when no criterion is active, i.e. the whole catalog is visible.
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_search().is_empty() && self.category.is_none() && self.difficulty.is_none()
    }

    /// Trimmed, lowercased search term used for matching.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }
}
