//! The application store.
//!
//! A [`Store`] owns one [`StoreState`] made of four slices and applies
//! [`Action`]s to it one at a time. Hosts create the store and pass it to
//! whatever needs it; there is no global instance.
//!
//! Every dispatch reports whether the state changed. Only changes bump the
//! revision and reach subscribers, so repeating an action that is already
//! reflected in the state (for example setting the same toast twice) never
//! triggers a second re-render.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod toast;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tiffin_core::{OrderId, OrderStatus, ProductId, Role};
use tracing::instrument;

use crate::models::{ProfileUpdate, User};

pub use auth::AuthState;
pub use cart::{CartLine, CartProduct, CartState};
pub use orders::{Order, OrderUpdateError, OrdersState};
pub use toast::ToastState;

/// Everything the store tracks. Serializable so hosts can snapshot it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub cart: CartState,
    #[serde(default)]
    pub auth: AuthState,
    #[serde(default)]
    pub toast: ToastState,
    #[serde(default)]
    pub orders: OrdersState,
}

const fn one() -> u32 {
    1
}

/// A state change requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddItem {
        product: CartProduct,
        #[serde(default = "one")]
        quantity: u32,
    },
    RemoveItem {
        product_id: ProductId,
    },
    UpdateQuantity {
        product_id: ProductId,
        quantity: u32,
    },
    ClearCart,
    Login {
        user: User,
    },
    Logout,
    UpdateProfile {
        update: ProfileUpdate,
    },
    SetToast {
        message: Option<String>,
    },
    /// Turn the cart into a pending order for the signed-in user.
    PlaceOrder {
        placed_at: DateTime<Utc>,
    },
    /// Admin screens: move an order along its lifecycle.
    UpdateOrderStatus {
        order_id: OrderId,
        status: OrderStatus,
    },
}

impl Action {
    /// Add one unit of `product`.
    #[must_use]
    pub const fn add_item(product: CartProduct) -> Self {
        Self::AddItem {
            product,
            quantity: 1,
        }
    }

    /// Show a toast message.
    #[must_use]
    pub fn toast(message: impl Into<String>) -> Self {
        Self::SetToast {
            message: Some(message.into()),
        }
    }

    /// Acknowledge the current toast.
    #[must_use]
    pub const fn dismiss_toast() -> Self {
        Self::SetToast { message: None }
    }

    /// Parse a JSON array of actions, as saved by a session recorder.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or unknown action types.
    pub fn parse_script(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::ClearCart => "clear_cart",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::UpdateProfile { .. } => "update_profile",
            Self::SetToast { .. } => "set_toast",
            Self::PlaceOrder { .. } => "place_order",
            Self::UpdateOrderStatus { .. } => "update_order_status",
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreState, &Action)>;

/// Single-writer container for [`StoreState`].
#[derive(Default)]
pub struct Store {
    state: StoreState,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    /// An empty store: empty cart, signed out, no toast, no orders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously saved snapshot.
    #[must_use]
    pub fn from_state(state: StoreState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Apply `action`. Returns `true` if the state changed.
    ///
    /// Actions that do not apply (unknown product, zero quantity, checkout
    /// while signed out, a disallowed status change) leave the state as is.
    #[instrument(skip(self, action), fields(action = action.kind()))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.apply(&action);
        if changed {
            self.revision += 1;
            tracing::debug!(revision = self.revision, "Action applied");
            for (_, listener) in &mut self.listeners {
                listener(&self.state, &action);
            }
        } else {
            tracing::trace!("Action left state unchanged");
        }
        changed
    }

    /// Call `listener` after every dispatch that changes the state.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreState, &Action) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Stop notifying a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Number of state changes since the store was created.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn cart(&self) -> &CartState {
        &self.state.cart
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.state.auth
    }

    #[must_use]
    pub const fn toast(&self) -> &ToastState {
        &self.state.toast
    }

    #[must_use]
    pub const fn orders(&self) -> &OrdersState {
        &self.state.orders
    }

    /// Consume the store, keeping only its state.
    #[must_use]
    pub fn into_state(self) -> StoreState {
        self.state
    }

    fn apply(&mut self, action: &Action) -> bool {
        let state = &mut self.state;
        match action {
            Action::AddItem { product, quantity } => state.cart.add_item(product, *quantity),
            Action::RemoveItem { product_id } => state.cart.remove_item(*product_id),
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => state.cart.update_quantity(*product_id, *quantity),
            Action::ClearCart => state.cart.clear(),
            Action::Login { user } => state.auth.login(user.clone()),
            Action::Logout => state.auth.logout(),
            Action::UpdateProfile { update } => state.auth.update_profile(update.clone()),
            Action::SetToast { message } => state.toast.set_message(message.clone()),
            Action::PlaceOrder { placed_at } => place_order(state, *placed_at),
            Action::UpdateOrderStatus { order_id, status } => {
                update_order_status(state, *order_id, *status)
            }
        }
    }
}

fn place_order(state: &mut StoreState, placed_at: DateTime<Utc>) -> bool {
    let StoreState {
        cart,
        auth,
        toast,
        orders,
    } = state;

    let Some(user) = auth.user().filter(|_| auth.is_authenticated()) else {
        tracing::warn!("Checkout ignored: nobody is signed in");
        return false;
    };
    if cart.is_empty() {
        tracing::warn!("Checkout ignored: cart is empty");
        return false;
    }

    let id = orders.place(cart, user, placed_at);
    cart.clear();
    toast.set_message(Some(format!("Order #{id} placed")));
    tracing::info!(order_id = %id, "Order placed");
    true
}

fn update_order_status(state: &mut StoreState, order_id: OrderId, status: OrderStatus) -> bool {
    let allowed = state.auth.is_authenticated()
        && state.auth.role().is_some_and(Role::can_manage_orders);
    if !allowed {
        tracing::warn!(%order_id, "Order status change ignored: not an order manager");
        return false;
    }

    match state.orders.update_status(order_id, status) {
        Ok(()) => {
            tracing::info!(%order_id, %status, "Order status updated");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Order status change ignored");
            false
        }
    }
}
