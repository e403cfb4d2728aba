//! Display data for the UI layer.
//!
//! Views hold preformatted strings so screens only lay them out.

use serde::Serialize;
use tiffin_core::{OrderStatus, format_amount};

use crate::catalog::Restaurant;
use crate::store::{CartLine, CartState, Order};

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub product_id: i32,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl CartItemView {
    #[must_use]
    pub fn new(line: &CartLine, symbol: &str) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            title: line.name.clone(),
            quantity: line.quantity,
            price: line.unit_price.display(symbol),
            line_price: format_amount(symbol, line.line_total()),
        }
    }
}

/// Cart screen and badge display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty(symbol: &str) -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_amount(symbol, 0),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn new(cart: &CartState, symbol: &str) -> Self {
        if cart.is_empty() {
            return Self::empty(symbol);
        }
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::new(line, symbol))
                .collect(),
            subtotal: format_amount(symbol, cart.total_price()),
            item_count: cart.total_items(),
        }
    }
}

/// Restaurant card on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantCard {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// Rating with one decimal, e.g. `"4.5"`.
    pub rating: String,
    pub delivery_time: String,
    pub favorite: bool,
    pub dish_count: usize,
}

impl From<&Restaurant> for RestaurantCard {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.as_i32(),
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            rating: format!("{:.1}", restaurant.rating),
            delivery_time: restaurant.delivery_time.clone(),
            favorite: restaurant.favorite,
            dish_count: restaurant.items.len(),
        }
    }
}

/// Row on the order-tracking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryView {
    pub id: i32,
    pub status: OrderStatus,
    pub total: String,
    pub item_count: u64,
    /// RFC 3339 timestamp.
    pub placed_at: String,
}

impl OrderSummaryView {
    #[must_use]
    pub fn new(order: &Order, symbol: &str) -> Self {
        Self {
            id: order.id.as_i32(),
            status: order.status,
            total: format_amount(symbol, order.total_price),
            item_count: order.total_items,
            placed_at: order.placed_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::store::cart::tests::product;

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::new(&CartState::default(), "$");
        assert_eq!(view, CartView::empty("$"));
        assert_eq!(view.subtotal, "$0");
    }

    #[test]
    fn test_cart_view_formats_prices() {
        let mut cart = CartState::default();
        cart.add_item(&product(1, "Margherita", 12), 2);
        cart.add_item(&product(2, "Soda", 3), 1);

        let view = CartView::new(&cart, "$");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$27");
        let first = view.items.first().expect("one line");
        assert_eq!(first.price, "$12");
        assert_eq!(first.line_price, "$24");
    }

    #[test]
    fn test_restaurant_card() {
        let catalog = sample_catalog();
        let card = catalog
            .restaurants()
            .first()
            .map(RestaurantCard::from)
            .expect("catalog is not empty");
        assert_eq!(card.name, "Pizza Corner");
        assert_eq!(card.rating, "4.5");
        assert_eq!(card.dish_count, 2);
    }
}
