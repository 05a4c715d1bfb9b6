//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! This crate holds every rule of the till simulator: the catalog, the cart,
//! two-phase checkout, accounts and the role gate. It performs no I/O and
//! does no logging; the CLI drives it and reports what happened.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kasir-cli (text menu)                        │   │
//! │  │    Login ──► Role Menu ──► Catalog / Stock / Cart / Pay        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Store                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │ inventory │  │   cart    │  │ checkout  │  │   │
//! │  │   │  gate +   │  │  entries  │  │   lines   │  │  Pending  │  │   │
//! │  │   │  context  │  │  by name  │  │  by name  │  │  Settled  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • IN-MEMORY ONLY                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The catalog entry
//! - [`money`] - Whole-Rupiah money type
//! - [`inventory`] - Catalog keyed by product name
//! - [`cart`] - Pending purchase lines
//! - [`checkout`] - Two-phase settlement and receipts
//! - [`session`] - Accounts, login state and the role gate
//! - [`store`] - The context object tying it all together
//! - [`seed`] - Starting catalog and accounts
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules and number parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Money, Store};
//!
//! let mut store = Store::seeded();
//! store.login("buyer", "buyerpass").unwrap();
//! store.add_to_cart("Indomie Goreng", 2).unwrap();
//!
//! let checkout = store.begin_checkout().unwrap();
//! assert_eq!(checkout.total(), Money::from_units(6000));
//!
//! let receipt = checkout
//!     .pay(Money::from_units(10000))
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//! assert_eq!(receipt.change, Money::from_units(4000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod inventory;
pub mod money;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kasir_core::Money` instead of
// `use kasir_core::money::Money`

pub use cart::{Cart, CartLine, CartSummary, PricedLine};
pub use checkout::{Checkout, Receipt, Settlement, Shortfall};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use session::{Account, AccountDirectory, Operation, Role, Session};
pub use store::{CartAddition, Restocked, Store};
pub use types::CatalogEntry;
