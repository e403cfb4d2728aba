//! Orders slice: orders placed from this device and their tracked status.
//!
//! This is local bookkeeping for the order-tracking and admin screens. Status
//! changes are checked against [`OrderStatus::can_transition_to`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tiffin_core::{OrderId, OrderStatus};

use super::cart::{CartLine, CartState};
use crate::models::User;

/// Why a status change was not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderUpdateError {
    #[error("order {0} not found")]
    NotFound(OrderId),
    #[error("order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: u64,
    pub customer_email: String,
    pub delivery_address: String,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// Orders placed so far and the ID the next one will get.
///
/// On restore, orders with a repeated ID are dropped (first wins) and
/// `next_id` is moved past every stored ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrdersSnapshot")]
pub struct OrdersState {
    orders: Vec<Order>,
    next_id: OrderId,
}

#[derive(Deserialize)]
struct OrdersSnapshot {
    #[serde(default)]
    orders: Vec<Order>,
    next_id: Option<OrderId>,
}

impl From<OrdersSnapshot> for OrdersState {
    fn from(snapshot: OrdersSnapshot) -> Self {
        let mut state = Self::default();
        for order in snapshot.orders {
            if state.order(order.id).is_none() {
                state.orders.push(order);
            }
        }
        let past_stored = state
            .orders
            .iter()
            .map(|order| order.id.next())
            .max()
            .unwrap_or(state.next_id);
        state.next_id = snapshot
            .next_id
            .map_or(past_stored, |next_id| next_id.max(past_stored));
        state
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: OrderId::new(1),
        }
    }
}

impl OrdersState {
    /// Record a pending order for the cart's current contents.
    ///
    /// The caller is responsible for checking the cart is not empty and for
    /// clearing it afterwards.
    pub fn place(&mut self, cart: &CartState, user: &User, placed_at: DateTime<Utc>) -> OrderId {
        let id = self.next_id;
        self.next_id = id.next();
        self.orders.push(Order {
            id,
            lines: cart.lines().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            customer_email: user.email.clone(),
            delivery_address: user.address.clone(),
            status: OrderStatus::Pending,
            placed_at,
        });
        id
    }

    /// Move an order to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderUpdateError::NotFound`] for unknown IDs and
    /// [`OrderUpdateError::InvalidTransition`] for disallowed steps.
    pub fn update_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderUpdateError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderUpdateError::NotFound(id))?;

        if !order.status.can_transition_to(status) {
            return Err(OrderUpdateError::InvalidTransition {
                id,
                from: order.status,
                to: status,
            });
        }
        order.status = status;
        Ok(())
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Orders that are not delivered or rejected yet.
    pub fn active(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| !order.status.is_terminal())
    }
}
