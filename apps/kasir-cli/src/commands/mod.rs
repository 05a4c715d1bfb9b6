//! # Menu Commands Module
//!
//! Every action the menu can trigger, one function per action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (role gate helper, rejection logging)
//! ├── auth.rs     ◄─── Login, logout
//! ├── product.rs  ◄─── Catalog listing, lookup, restock
//! ├── cart.rs     ◄─── Add to cart, view cart
//! └── sale.rs     ◄─── Two-phase checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Menu                                                                   │
//! │  ────                                                                   │
//! │  "Quantity to buy: " ──► parse_quantity("2") ──► 2                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Commands                                                               │
//! │  ────────                                                               │
//! │  fn add_to_cart(                                                        │
//! │      store: &mut Store,    ◄── Only the state it needs                 │
//! │      name: &str,           ◄── From the prompt                         │
//! │      quantity: u32,        ◄── Already parsed                          │
//! │  ) -> Result<CartAddition, UiError>                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Menu renders the result (table or JSON) or the error                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never read input or print. They log with `tracing`: `debug!`
//! on entry and `info!` for state changes. Routine rejections (unknown
//! product, bad number, wrong role) log at `info!`; a failed login or a
//! checkout that fails after its total was shown logs at `warn!`.

pub mod auth;
pub mod cart;
pub mod product;
pub mod sale;

use kasir_core::{Operation, Store};
use tracing::{info, warn};

use crate::error::UiError;

/// Runs the role gate for `operation` without doing anything else.
///
/// Used before prompting, so a rejected role is never asked for input.
pub fn ensure_allowed(store: &Store, operation: Operation) -> Result<(), UiError> {
    store
        .authorize(operation)
        .map(|_| ())
        .map_err(|e| rejected("ensure_allowed", e))
}

/// Logs a routine rejection and converts the error for display.
pub(crate) fn rejected(command: &'static str, err: impl Into<UiError>) -> UiError {
    let err = err.into();
    info!(command, code = err.code.as_str(), message = %err.message, "command rejected");
    err
}

/// Logs a failure at `warn!` and converts the error for display.
pub(crate) fn failed(command: &'static str, err: impl Into<UiError>) -> UiError {
    let err = err.into();
    warn!(command, code = err.code.as_str(), message = %err.message, "command failed");
    err
}
