//! Read-only restaurant catalog.
//!
//! The catalog is supplied by the host (bundled JSON, a file on disk, or a
//! fixture in tests) and never mutated by the state core. Loading validates
//! the invariants the filter engine and cart rely on: unique restaurant IDs,
//! product IDs unique across the whole catalog, ratings within 0-5 and
//! non-empty names.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tiffin_core::{Price, ProductId, RestaurantId};
use tracing::instrument;

/// Highest rating a restaurant can carry.
pub const MAX_RATING: f32 = 5.0;

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate restaurant id {0}")]
    DuplicateRestaurant(RestaurantId),
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("restaurant {id} has rating {rating}, expected 0-5")]
    RatingOutOfRange { id: RestaurantId, rating: f32 },
    #[error("restaurant {0} has an empty name")]
    EmptyRestaurantName(RestaurantId),
    #[error("product {0} has an empty name")]
    EmptyProductName(ProductId),
}

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

/// A restaurant and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Single primary tag shown on the restaurant card.
    pub category: String,
    pub rating: f32,
    /// Display string such as `"25-30 min"`.
    pub delivery_time: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub favorite: bool,
}

impl Restaurant {
    /// Look up a menu item by product ID.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    restaurants: Vec<Restaurant>,
}

/// The validated, ordered restaurant catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog from restaurants in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any restaurant or product ID repeats,
    /// a rating is outside 0-5, or a name is blank.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, CatalogError> {
        let mut restaurant_ids = HashSet::new();
        let mut product_ids = HashSet::new();

        for restaurant in &restaurants {
            if !restaurant_ids.insert(restaurant.id) {
                return Err(CatalogError::DuplicateRestaurant(restaurant.id));
            }
            if restaurant.name.trim().is_empty() {
                return Err(CatalogError::EmptyRestaurantName(restaurant.id));
            }
            if !(0.0..=MAX_RATING).contains(&restaurant.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: restaurant.id,
                    rating: restaurant.rating,
                });
            }
            for item in &restaurant.items {
                if !product_ids.insert(item.id) {
                    return Err(CatalogError::DuplicateProduct(item.id));
                }
                if item.name.trim().is_empty() {
                    return Err(CatalogError::EmptyProductName(item.id));
                }
            }
        }

        Ok(Self { restaurants })
    }

    /// Parse a catalog from JSON of the form `{"restaurants": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON (including zero
    /// prices) and any validation error from [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.restaurants)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(restaurants = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// All restaurants in catalog order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    #[must_use]
    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Find a menu item and the restaurant that serves it.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<(&Restaurant, &MenuItem)> {
        self.restaurants
            .iter()
            .find_map(|r| r.item(id).map(|item| (r, item)))
    }

    /// Distinct restaurant categories in first-seen order, compared
    /// case-insensitively. These back the category chips.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.restaurants
            .iter()
            .filter(|r| seen.insert(r.category.to_lowercase()))
            .map(|r| r.category.as_str())
            .collect()
    }

    /// Restaurants flagged as favorites, in catalog order.
    pub fn favorites(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter().filter(|r| r.favorite)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub fn item(id: i32, name: &str, price: u32) -> MenuItem {
        MenuItem {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(price).unwrap(),
            description: String::new(),
        }
    }

    pub fn restaurant(id: i32, name: &str, category: &str, items: Vec<MenuItem>) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            rating: 4.5,
            delivery_time: "20-30 min".to_string(),
            items,
            favorite: false,
        }
    }

    /// A small catalog covering category, keyword and fallback matches.
    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            restaurant(
                1,
                "Pizza Corner",
                "Pizza",
                vec![item(101, "Pepperoni Pizza", 14), item(102, "Garlic Bread", 5)],
            ),
            restaurant(
                2,
                "Burger Palace",
                "Burgers",
                vec![
                    item(201, "Classic Burger", 10),
                    item(202, "Margherita Pizza", 12),
                    item(203, "Fries", 4),
                ],
            ),
            restaurant(
                3,
                "Sakura",
                "Japanese",
                vec![item(301, "Salmon Sushi", 16), item(302, "Green Tea", 3)],
            ),
            restaurant(
                4,
                "Casa Taco",
                "Mexican",
                vec![item(401, "Beef Taco", 8), item(402, "Chocolate Cake", 6)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "restaurants": [
                {
                    "id": 1,
                    "name": "Pizza Corner",
                    "category": "Pizza",
                    "rating": 4.6,
                    "delivery_time": "25-30 min",
                    "favorite": true,
                    "items": [
                        {"id": 11, "name": "Margherita", "price": 12, "description": "Tomato and basil"}
                    ]
                }
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let (restaurant, item) = catalog.item(ProductId::new(11)).unwrap();
        assert_eq!(restaurant.name, "Pizza Corner");
        assert_eq!(item.price.amount(), 12);
        assert_eq!(catalog.favorites().count(), 1);
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let json = r#"{"restaurants": [{"id": 1, "name": "A", "category": "x",
            "rating": 1.0, "delivery_time": "", "items": [{"id": 1, "name": "B", "price": 0}]}]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_restaurant() {
        let result = Catalog::new(vec![
            restaurant(1, "A", "x", vec![]),
            restaurant(1, "B", "y", vec![]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateRestaurant(_))));
    }

    #[test]
    fn test_duplicate_product_across_restaurants() {
        let result = Catalog::new(vec![
            restaurant(1, "A", "x", vec![item(5, "Soup", 3)]),
            restaurant(2, "B", "y", vec![item(5, "Salad", 4)]),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(5)
        ));
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut r = restaurant(1, "A", "x", vec![]);
        r.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![r]),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_blank_names() {
        assert!(matches!(
            Catalog::new(vec![restaurant(1, "  ", "x", vec![])]),
            Err(CatalogError::EmptyRestaurantName(_))
        ));
        assert!(matches!(
            Catalog::new(vec![restaurant(1, "A", "x", vec![item(1, "", 2)])]),
            Err(CatalogError::EmptyProductName(_))
        ));
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        let catalog = Catalog::new(vec![
            restaurant(1, "A", "Pizza", vec![]),
            restaurant(2, "B", "Sushi", vec![]),
            restaurant(3, "C", "pizza", vec![]),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn test_missing_lookups() {
        let catalog = sample_catalog();
        assert!(catalog.restaurant(RestaurantId::new(99)).is_none());
        assert!(catalog.item(ProductId::new(999)).is_none());
    }
}
