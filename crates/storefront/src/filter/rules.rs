//! Category keyword rules.
//!
//! A category chip matches a restaurant either by its primary tag or by a
//! dish on its menu. Which dish names count for a category is decided by this
//! table; categories without an entry fall back to a substring match of the
//! category name inside the dish name.

use std::collections::HashMap;

/// Built-in category to dish-keyword table.
const DEFAULT_RULES: &[(&str, &[&str])] = &[
    ("pizza", &["pizza"]),
    ("mexican", &["taco", "burrito", "quesadilla", "nacho"]),
    ("japanese", &["sushi", "sashimi", "teriyaki", "mochi"]),
    ("desserts", &["dessert", "cake", "tiramisu", "ice cream"]),
    ("drinks", &["drink", "coke", "juice", "tea", "soda"]),
    ("sides", &["fries", "nugget", "bread"]),
];

/// Lookup table from lowercase category name to dish-name keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    rules: HashMap<String, Vec<String>>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        DEFAULT_RULES
            .iter()
            .fold(Self::empty(), |rules, (category, keywords)| {
                rules.with_rule(category, keywords.iter().copied())
            })
    }
}

impl CategoryRules {
    /// A table with no rules; every category uses the substring fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Add or replace the keywords for a category.
    #[must_use]
    pub fn with_rule<I, S>(mut self, category: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self.rules.insert(normalize(category), keywords);
        self
    }

    /// Keywords registered for `category`, if it has a rule.
    #[must_use]
    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.rules.get(&normalize(category)).map(Vec::as_slice)
    }

    /// Whether a dish called `item_name` belongs to `category`.
    #[must_use]
    pub fn matches(&self, category: &str, item_name: &str) -> bool {
        let category = normalize(category);
        let name = item_name.to_lowercase();
        self.rules.get(&category).map_or_else(
            || name.contains(&category),
            |keywords| keywords.iter().any(|k| name.contains(k.as_str())),
        )
    }
}

fn normalize(category: &str) -> String {
    category.trim().to_lowercase()
}
