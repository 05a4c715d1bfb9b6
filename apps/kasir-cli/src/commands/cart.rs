//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Pending  │────►│ Settled  │       │
//! │  │  Cart    │     │          │     │ Checkout │     │ (empty)  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart        pay (sale.rs)                     │
//! │                        │                 │                              │
//! │                        ▼                 ▼                              │
//! │                    get_cart       short payment: back to In Cart       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging out does not empty the cart.

use kasir_core::{CartAddition, CartSummary, Store};
use tracing::{debug, info};

use super::rejected;
use crate::error::UiError;

/// Gets the current cart, priced against live inventory.
pub fn get_cart(store: &Store) -> Result<CartSummary, UiError> {
    debug!("get_cart command");
    store.cart_summary().map_err(|e| rejected("get_cart", e))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new line
/// - The request alone is checked against live stock
pub fn add_to_cart(store: &mut Store, name: &str, quantity: u32) -> Result<CartAddition, UiError> {
    debug!(name = %name, quantity, "add_to_cart command");

    let addition = store
        .add_to_cart(name, quantity)
        .map_err(|e| rejected("add_to_cart", e))?;

    info!(
        name = %addition.name,
        added = addition.added,
        in_cart = addition.in_cart,
        "Added to cart"
    );
    Ok(addition)
}
