//! Integration tests for full store sessions.
//!
//! These tests drive the store through the same sequences of actions the
//! screens dispatch: add to cart, edit quantities, sign in, check out, and
//! let an admin walk the order through its lifecycle.

#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use tiffin_core::{OrderId, OrderStatus, ProductId, Role};
use tiffin_integration_tests::{fixture_catalog, fixture_product, timestamp, user};
use tiffin_storefront::models::{ProfileError, ProfileForm};
use tiffin_storefront::views::CartView;
use tiffin_storefront::{Action, Store, StoreState};

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_adding_same_product_twice_merges_lines() {
    let catalog = fixture_catalog();
    let pepperoni = fixture_product(&catalog, 11);
    let mut store = Store::new();

    store.dispatch(Action::AddItem {
        product: pepperoni.clone(),
        quantity: 2,
    });
    store.dispatch(Action::AddItem {
        product: pepperoni,
        quantity: 3,
    });

    let cart = store.cart();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(), 5 * 14);
}

#[test]
fn test_cart_badge_and_view_follow_edits() {
    let catalog = fixture_catalog();
    let mut store = Store::new();

    store.dispatch(Action::add_item(fixture_product(&catalog, 21)));
    store.dispatch(Action::add_item(fixture_product(&catalog, 23)));
    store.dispatch(Action::UpdateQuantity {
        product_id: ProductId::new(23),
        quantity: 3,
    });

    let view = CartView::new(store.cart(), "$");
    assert_eq!(view.item_count, 4);
    assert_eq!(view.subtotal, "$19");
    let titles: Vec<_> = view.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Classic Burger", "Orange Juice"]);
}

#[test]
fn test_removing_unknown_product_changes_nothing() {
    let catalog = fixture_catalog();
    let mut store = Store::new();
    store.dispatch(Action::add_item(fixture_product(&catalog, 12)));
    let before = store.state().clone();
    let revision = store.revision();

    assert!(!store.dispatch(Action::RemoveItem {
        product_id: ProductId::new(404),
    }));
    assert_eq!(store.state(), &before);
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_clear_cart_zeroes_totals() {
    let catalog = fixture_catalog();
    let mut store = Store::new();
    store.dispatch(Action::add_item(fixture_product(&catalog, 31)));
    store.dispatch(Action::ClearCart);

    assert!(store.cart().lines().is_empty());
    assert_eq!(store.cart().total_items(), 0);
    assert_eq!(store.cart().total_price(), 0);
}

// =============================================================================
// Auth and Profile
// =============================================================================

#[test]
fn test_login_then_logout() {
    let mut store = Store::new();
    store.dispatch(Action::Login {
        user: user("Asha", Role::Customer),
    });
    store.dispatch(Action::Logout);

    assert!(!store.auth().is_authenticated());
    assert!(store.auth().user().is_none());
}

#[test]
fn test_profile_form_then_update() {
    let mut store = Store::new();
    store.dispatch(Action::Login {
        user: user("Asha", Role::Customer),
    });

    let mut form = store
        .auth()
        .user()
        .map(ProfileForm::from_user)
        .unwrap();
    form.address = "9 Harbour Lane".to_string();
    let update = form.clone().validate().unwrap();
    assert!(store.dispatch(Action::UpdateProfile { update }));
    assert_eq!(
        store.auth().user().map(|u| u.address.as_str()),
        Some("9 Harbour Lane")
    );

    form.name = String::new();
    assert_eq!(form.validate(), Err(ProfileError::EmptyName));
}

// =============================================================================
// Toast
// =============================================================================

#[test]
fn test_toast_repeat_notifies_once() {
    let mut store = Store::new();
    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);
    store.subscribe(move |_, _| counter.set(counter.get() + 1));

    store.dispatch(Action::toast("a"));
    store.dispatch(Action::toast("a"));
    assert_eq!(renders.get(), 1);

    store.dispatch(Action::dismiss_toast());
    assert_eq!(renders.get(), 2);
    assert_eq!(store.toast().message(), None);
}

// =============================================================================
// Checkout and Order Tracking
// =============================================================================

#[test]
fn test_checkout_and_admin_lifecycle() {
    let catalog = fixture_catalog();
    let mut store = Store::new();

    store.dispatch(Action::Login {
        user: user("Asha", Role::Customer),
    });
    store.dispatch(Action::AddItem {
        product: fixture_product(&catalog, 22),
        quantity: 2,
    });
    assert!(store.dispatch(Action::PlaceOrder {
        placed_at: timestamp(12),
    }));
    assert!(store.cart().is_empty());
    assert_eq!(store.toast().message(), Some("Order #1 placed"));

    store.dispatch(Action::Login {
        user: user("Ravi", Role::SuperAdmin),
    });
    for status in [
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Delivered,
    ] {
        assert!(store.dispatch(Action::UpdateOrderStatus {
            order_id: OrderId::new(1),
            status,
        }));
    }

    let order = store.orders().order(OrderId::new(1));
    assert_eq!(order.map(|o| o.status), Some(OrderStatus::Delivered));
    assert_eq!(order.map(|o| o.total_price), Some(24));
    assert_eq!(order.map(|o| o.customer_email.as_str()), Some("asha@example.com"));
    assert_eq!(store.orders().active().count(), 0);
}

#[test]
fn test_rejected_order_is_final() {
    let catalog = fixture_catalog();
    let mut store = Store::new();
    store.dispatch(Action::Login {
        user: user("Dev", Role::Admin),
    });
    store.dispatch(Action::add_item(fixture_product(&catalog, 11)));
    store.dispatch(Action::PlaceOrder {
        placed_at: timestamp(9),
    });

    assert!(store.dispatch(Action::UpdateOrderStatus {
        order_id: OrderId::new(1),
        status: OrderStatus::Rejected,
    }));
    assert!(!store.dispatch(Action::UpdateOrderStatus {
        order_id: OrderId::new(1),
        status: OrderStatus::Accepted,
    }));
}

#[test]
fn test_snapshot_survives_restart() {
    let catalog = fixture_catalog();
    let mut store = Store::new();
    store.dispatch(Action::Login {
        user: user("Asha", Role::Customer),
    });
    store.dispatch(Action::add_item(fixture_product(&catalog, 12)));

    let saved = serde_json::to_string(store.state()).unwrap();
    let restored: StoreState = serde_json::from_str(&saved).unwrap();
    let mut resumed = Store::from_state(restored);

    assert_eq!(resumed.state(), store.state());
    resumed.dispatch(Action::add_item(fixture_product(&catalog, 12)));
    assert_eq!(resumed.cart().total_items(), 2);
}
