//! Home screen browse session.
//!
//! The home screen recomputes its list on each user event rather than from the
//! combined selection: pressing a chip filters by category alone, typing
//! filters by search (deferring to the chip when blank), and clearing a chip
//! always shows the full catalog even if search text is still in the box.

use tiffin_core::RestaurantId;
use tracing::instrument;

use super::{CategoryRules, FilterSelection, filter_by_category, filter_by_search};
use crate::catalog::{Catalog, Restaurant};

/// Search/category state plus the list last shown to the user.
///
/// The session keeps restaurant IDs, so every call must use the catalog the
/// session was created with.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    rules: CategoryRules,
    selection: FilterSelection,
    visible: Vec<RestaurantId>,
}

impl BrowseSession {
    /// Start a session showing the whole catalog, using the built-in rules.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_rules(catalog, CategoryRules::default())
    }

    /// Start a session with a custom keyword table.
    #[must_use]
    pub fn with_rules(catalog: &Catalog, rules: CategoryRules) -> Self {
        Self {
            rules,
            selection: FilterSelection::default(),
            visible: catalog.restaurants().iter().map(|r| r.id).collect(),
        }
    }

    /// Handle a tap on a category chip.
    #[instrument(skip(self, catalog))]
    pub fn press_category(&mut self, catalog: &Catalog, category: &str) {
        let shown = match self.selection.toggle_category(category) {
            Some(selected) => filter_by_category(catalog, &self.rules, selected),
            None => catalog.restaurants().iter().collect(),
        };
        self.show(&shown);
    }

    /// Handle a change of the search text.
    #[instrument(skip(self, catalog))]
    pub fn search(&mut self, catalog: &Catalog, query: &str) {
        self.selection.set_search(query);
        let shown = filter_by_search(
            catalog,
            &self.rules,
            query,
            self.selection.category.as_deref(),
        );
        self.show(&shown);
    }

    /// The restaurants currently on screen, in catalog order.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Restaurant> {
        catalog
            .restaurants()
            .iter()
            .filter(|r| self.visible.contains(&r.id))
            .collect()
    }

    /// IDs of the restaurants currently on screen.
    #[must_use]
    pub fn visible_ids(&self) -> &[RestaurantId] {
        &self.visible
    }

    /// Whether the screen should render its "nothing found" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub const fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    fn show(&mut self, restaurants: &[&Restaurant]) {
        self.visible = restaurants.iter().map(|r| r.id).collect();
        tracing::debug!(visible = self.visible.len(), "Browse list updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn names(session: &BrowseSession, catalog: &Catalog) -> Vec<String> {
        session
            .visible(catalog)
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    #[test]
    fn test_starts_with_full_catalog() {
        let catalog = sample_catalog();
        let session = BrowseSession::new(&catalog);
        assert_eq!(session.visible(&catalog).len(), catalog.len());
        assert!(!session.is_empty());
    }

    #[test]
    fn test_pressing_category_twice_restores_catalog() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);

        session.press_category(&catalog, "Pizza");
        assert_eq!(
            names(&session, &catalog),
            vec!["Pizza Corner", "Burger Palace"]
        );

        session.press_category(&catalog, "pizza");
        assert_eq!(session.visible(&catalog).len(), catalog.len());
        assert_eq!(session.selection().category, None);
    }

    #[test]
    fn test_category_off_ignores_active_search() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);

        session.press_category(&catalog, "Japanese");
        session.search(&catalog, "sushi");
        assert_eq!(names(&session, &catalog), vec!["Sakura"]);

        session.press_category(&catalog, "Japanese");
        assert_eq!(session.selection().search, "sushi");
        assert_eq!(session.visible(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_category_press_ignores_search_text() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);

        session.search(&catalog, "sushi");
        session.press_category(&catalog, "Mexican");
        assert_eq!(names(&session, &catalog), vec!["Casa Taco"]);
    }

    #[test]
    fn test_clearing_search_falls_back_to_category() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);

        session.press_category(&catalog, "Mexican");
        session.search(&catalog, "burger");
        assert_eq!(names(&session, &catalog), vec!["Burger Palace"]);

        session.search(&catalog, "  ");
        assert_eq!(names(&session, &catalog), vec!["Casa Taco"]);
    }

    #[test]
    fn test_empty_state() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);
        session.search(&catalog, "ramen");
        assert!(session.is_empty());
        assert!(session.visible_ids().is_empty());
    }
}
