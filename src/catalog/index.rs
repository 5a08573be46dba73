//! Filter options derived from the loaded catalog.
//!
//! The category index is the distinct set of category names, collated for
//! stable display. Source catalogs are Ukrainian-language content, so the
//! sort uses the `uk` collation rather than code-point order; ASCII input
//! sorts the same either way.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;

use crate::catalog::store::Catalog;

fn collator() -> Option<&'static Collator> {
    static COLLATOR: OnceLock<Option<Collator>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            let mut options = CollatorOptions::new();
            options.strength = Some(Strength::Tertiary);
            Collator::try_new(&locale!("uk").into(), options).ok()
        })
        .as_ref()
}

/// Deterministic, locale-aware ordering for category names.
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Distinct categories present in the catalog, sorted for stable display.
///
/// Items without a category contribute nothing here; they still match the
/// implicit "any category" option, which always exists and is the default.
pub fn category_index(catalog: &Catalog) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in catalog.iter() {
        if let Some(category) = &item.category {
            if !categories.iter().any(|existing| existing == category) {
                categories.push(category.clone());
            }
        }
    }
    categories.sort_by(|a, b| compare_categories(a, b));
    categories
}

/// Distinct difficulty values present in the catalog, in textual form.
///
/// Numeric-looking values sort numerically so "10" lands after "2".
pub fn difficulty_index(catalog: &Catalog) -> Vec<String> {
    let mut difficulties: Vec<String> = Vec::new();
    for item in catalog.iter() {
        if let Some(difficulty) = item.difficulty_text() {
            if !difficulties.iter().any(|existing| existing == difficulty) {
                difficulties.push(difficulty.to_string());
            }
        }
    }
    difficulties.sort_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    difficulties
}
