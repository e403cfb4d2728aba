//! Restaurant filtering for the home screen.
//!
//! Two pure narrowing functions over the catalog:
//!
//! - [`filter_by_category`] - primary tag match or a dish matching the
//!   category's keyword rule
//! - [`filter_by_search`] - flat case-insensitive substring scan over
//!   restaurant name, category and dish names
//!
//! Results always keep catalog order. An empty result is a valid outcome the
//! UI renders as an empty state.

mod browse;
mod rules;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Restaurant};

pub use browse::BrowseSession;
pub use rules::CategoryRules;

/// Restaurants matching `category`, in catalog order.
#[must_use]
pub fn filter_by_category<'a>(
    catalog: &'a Catalog,
    rules: &CategoryRules,
    category: &str,
) -> Vec<&'a Restaurant> {
    catalog
        .restaurants()
        .iter()
        .filter(|r| matches_category(r, rules, category))
        .collect()
}

/// Restaurants matching a free-text `query`, in catalog order.
///
/// A blank query defers to `selected_category`: the category filter when one
/// is active, otherwise the full catalog.
#[must_use]
pub fn filter_by_search<'a>(
    catalog: &'a Catalog,
    rules: &CategoryRules,
    query: &str,
    selected_category: Option<&str>,
) -> Vec<&'a Restaurant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return match selected_category {
            Some(category) => filter_by_category(catalog, rules, category),
            None => catalog.restaurants().iter().collect(),
        };
    }

    catalog
        .restaurants()
        .iter()
        .filter(|r| matches_search(r, &needle))
        .collect()
}

/// Primary tag equals `category`, or a dish satisfies the category rule.
#[must_use]
pub fn matches_category(restaurant: &Restaurant, rules: &CategoryRules, category: &str) -> bool {
    restaurant.category.trim().to_lowercase() == category.trim().to_lowercase()
        || restaurant
            .items
            .iter()
            .any(|item| rules.matches(category, &item.name))
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant.name.to_lowercase().contains(needle)
        || restaurant.category.to_lowercase().contains(needle)
        || restaurant
            .items
            .iter()
            .any(|item| item.name.to_lowercase().contains(needle))
}

/// Screen-local search text and category chip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub search: String,
    pub category: Option<String>,
}

impl FilterSelection {
    /// Press a category chip. Pressing the selected chip again clears it.
    ///
    /// Returns the selection after the press.
    pub fn toggle_category(&mut self, category: &str) -> Option<&str> {
        let same = self
            .category
            .as_deref()
            .is_some_and(|current| current.to_lowercase() == category.trim().to_lowercase());
        self.category = if same {
            None
        } else {
            Some(category.trim().to_string())
        };
        self.category.as_deref()
    }

    /// Replace the search text.
    pub fn set_search(&mut self, query: &str) {
        query.clone_into(&mut self.search);
    }

    /// Whether the search text has anything besides whitespace.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.search.trim().is_empty()
    }
}
