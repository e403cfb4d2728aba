//! Cart slice.
//!
//! Lines keep insertion order and never share a product ID. Totals are
//! recomputed after every mutation so readers never see stale badges.

use serde::{Deserialize, Serialize};
use tiffin_core::{Price, ProductId, RestaurantId};

use crate::catalog::{Catalog, MenuItem};

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price when the product was first added.
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price.times(self.quantity)
    }
}

/// What the add-to-cart button hands to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Restaurant serving the product, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RestaurantId>,
}

impl CartProduct {
    /// Product data for a menu item served by `restaurant_id`.
    #[must_use]
    pub fn from_menu_item(item: &MenuItem, restaurant_id: RestaurantId) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            restaurant_id: Some(restaurant_id),
        }
    }

    /// Product data for a catalog product ID, if the catalog serves it.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, id: ProductId) -> Option<Self> {
        catalog
            .item(id)
            .map(|(restaurant, item)| Self::from_menu_item(item, restaurant.id))
    }
}

/// Cart contents and running totals.
///
/// Snapshots are rebuilt line by line on load, so duplicate or empty lines and
/// stale totals in saved JSON do not survive a restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct CartState {
    lines: Vec<CartLine>,
    total_items: u64,
    total_price: u64,
}

/// Cart as stored by a host. Totals are ignored and recomputed.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        let mut cart = Self::default();
        for line in snapshot.lines.into_iter().filter(|line| line.quantity > 0) {
            match cart.line_mut(line.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart.recompute();
        cart
    }
}

impl CartState {
    /// Add `quantity` of `product`, merging into an existing line.
    ///
    /// A zero quantity is ignored. Returns `true` if the cart changed.
    pub fn add_item(&mut self, product: &CartProduct, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }

        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
            }),
        }
        self.recompute();
        true
    }

    /// Remove a product's line. Unknown IDs are ignored.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        if self.lines.len() == before {
            return false;
        }
        self.recompute();
        true
    }

    /// Set a line's quantity. Zero removes the line; unknown IDs are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        match self.line_mut(product_id) {
            Some(line) if line.quantity != quantity => line.quantity = quantity,
            _ => return false,
        }
        self.recompute();
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Sum of quantities, shown on the cart badge.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of quantity times unit price.
    #[must_use]
    pub const fn total_price(&self) -> u64 {
        self.total_price
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    fn recompute(&mut self) {
        self.total_items = self.lines.iter().map(|l| u64::from(l.quantity)).sum();
        self.total_price = self.lines.iter().map(CartLine::line_total).sum();
    }
}
