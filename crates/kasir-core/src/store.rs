//! # Store
//!
//! The single context object every menu action goes through. It owns the
//! inventory, the cart, the account directory and the session, and runs
//! every operation through the role gate before touching any of them.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller ──► Store::op ──► Session::authorize(Operation)                 │
//! │                               │                                         │
//! │                  ┌────────────┴────────────┐                            │
//! │                  ▼                         ▼                            │
//! │          NotAuthenticated /          lookup + validate                  │
//! │          Forbidden (no change)             │                            │
//! │                                            ▼                            │
//! │                                      mutate state                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart belongs to the store, not to an account: it survives logout and
//! is seen by whoever logs in next.

use serde::Serialize;

use crate::cart::{Cart, CartSummary};
use crate::checkout::Checkout;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::seed;
use crate::session::{Account, AccountDirectory, Operation, Session};
use crate::types::CatalogEntry;
use crate::validation::validate_cart_quantity;

/// Result of a successful add-to-cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartAddition {
    pub name: String,
    /// Units added by this call.
    pub added: u32,
    /// Units of this product now in the cart.
    pub in_cart: u32,
}

/// Result of a successful restock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restocked {
    pub name: String,
    pub added: u32,
    pub stock: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    inventory: Inventory,
    cart: Cart,
    accounts: AccountDirectory,
    session: Session,
}

impl Store {
    pub fn new(inventory: Inventory, accounts: AccountDirectory) -> Self {
        Store {
            inventory,
            cart: Cart::new(),
            accounts,
            session: Session::new(),
        }
    }

    /// A store holding the seed catalog and the two seed accounts.
    pub fn seeded() -> Self {
        Store::new(seed::catalog(), seed::accounts())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs in, replacing whoever was logged in before.
    pub fn login(&mut self, identifier: &str, secret: &str) -> CoreResult<&Account> {
        self.session.login(&self.accounts, identifier, secret)
    }

    pub fn logout(&mut self) -> Option<Account> {
        self.session.logout()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.session.current()
    }

    /// Checks the role gate without doing anything.
    pub fn authorize(&self, operation: Operation) -> CoreResult<&Account> {
        self.session.authorize(operation)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn catalog(&self) -> CoreResult<&[CatalogEntry]> {
        self.session.authorize(Operation::ViewCatalog)?;
        Ok(self.inventory.list())
    }

    /// Looks a single product up by exact name.
    pub fn product(&self, name: &str) -> CoreResult<&CatalogEntry> {
        self.session.authorize(Operation::ViewCatalog)?;
        self.inventory.require(name)
    }

    /// Adds `quantity` units to a product's stock. Admin only.
    ///
    /// Zero is accepted and changes nothing.
    pub fn restock(&mut self, name: &str, quantity: u32) -> CoreResult<Restocked> {
        self.session.authorize(Operation::Restock)?;

        let entry = self.inventory.require_mut(name)?;
        entry.add_stock(quantity)?;

        Ok(Restocked {
            name: entry.name().to_string(),
            added: quantity,
            stock: entry.stock(),
        })
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Puts `quantity` units of a product in the cart. Buyer only.
    ///
    /// The request is checked against live stock on its own; units already
    /// in the cart are not counted. Checkout re-verifies the full line.
    pub fn add_to_cart(&mut self, name: &str, quantity: u32) -> CoreResult<CartAddition> {
        self.session.authorize(Operation::AddToCart)?;

        let entry = self.inventory.require(name)?;
        validate_cart_quantity(quantity)?;
        if !entry.can_supply(quantity) {
            return Err(CoreError::InsufficientStock {
                name: entry.name().to_string(),
                available: entry.stock(),
                requested: quantity,
            });
        }

        let in_cart = self.cart.add_item(entry, quantity)?;
        Ok(CartAddition {
            name: entry.name().to_string(),
            added: quantity,
            in_cart,
        })
    }

    pub fn cart_summary(&self) -> CoreResult<CartSummary> {
        self.session.authorize(Operation::ViewCart)?;
        self.cart.summary(&self.inventory)
    }

    /// Enters the Pending checkout state. Buyer only.
    pub fn begin_checkout(&mut self) -> CoreResult<Checkout<'_>> {
        self.session.authorize(Operation::Checkout)?;
        Checkout::begin(&mut self.cart, &mut self.inventory)
    }

    // =========================================================================
    // Ungated read access
    // =========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::Settlement;
    use crate::error::ValidationError;
    use crate::money::Money;
    use crate::session::Role;

    fn stock_of(store: &Store, name: &str) -> u32 {
        store.inventory().lookup(name).unwrap().stock()
    }

    fn logged_in(identifier: &str, secret: &str) -> Store {
        let mut store = Store::seeded();
        store.login(identifier, secret).unwrap();
        store
    }

    #[test]
    fn test_everything_requires_login() {
        let mut store = Store::seeded();

        assert_eq!(store.catalog().unwrap_err(), CoreError::NotAuthenticated);
        assert_eq!(
            store.restock("Gula 1kg", 1).unwrap_err(),
            CoreError::NotAuthenticated
        );
        assert_eq!(
            store.add_to_cart("Gula 1kg", 1).unwrap_err(),
            CoreError::NotAuthenticated
        );
        assert_eq!(store.cart_summary().unwrap_err(), CoreError::NotAuthenticated);
        assert_eq!(
            store.begin_checkout().unwrap_err(),
            CoreError::NotAuthenticated
        );
        assert_eq!(stock_of(&store, "Gula 1kg"), 8);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_failed_login() {
        let mut store = Store::seeded();
        assert_eq!(
            store.login("wronguser", "wrongpass").unwrap_err(),
            CoreError::AuthFailure
        );
        assert!(store.current_account().is_none());
    }

    #[test]
    fn test_admin_restock() {
        let mut store = logged_in("admin", "adminpass");

        let restocked = store.restock("Gula 1kg", 10).unwrap();

        assert_eq!(restocked.stock, 18);
        assert_eq!(stock_of(&store, "Gula 1kg"), 18);
    }

    #[test]
    fn test_restock_zero_is_a_no_op() {
        let mut store = logged_in("admin", "adminpass");
        assert_eq!(store.restock("Beras 1kg", 0).unwrap().stock, 15);
    }

    #[test]
    fn test_restock_unknown_product() {
        let mut store = logged_in("admin", "adminpass");
        assert_eq!(
            store.restock("Kopi", 5).unwrap_err(),
            CoreError::NotFound("Kopi".to_string())
        );
    }

    #[test]
    fn test_admin_cannot_shop() {
        let mut store = logged_in("admin", "adminpass");

        let err = store.add_to_cart("Indomie Goreng", 2).unwrap_err();
        assert_eq!(
            err,
            CoreError::Forbidden {
                role: Role::Admin,
                operation: Operation::AddToCart,
            }
        );
        assert!(store.cart_summary().is_err());
        assert!(store.begin_checkout().is_err());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_buyer_cannot_restock() {
        let mut store = logged_in("buyer", "buyerpass");

        assert!(matches!(
            store.restock("Gula 1kg", 10).unwrap_err(),
            CoreError::Forbidden { role: Role::Buyer, .. }
        ));
        assert_eq!(stock_of(&store, "Gula 1kg"), 8);
    }

    #[test]
    fn test_add_to_cart_checks_live_stock() {
        let mut store = logged_in("buyer", "buyerpass");

        let err = store.add_to_cart("Gula 1kg", 9).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                name: "Gula 1kg".to_string(),
                available: 8,
                requested: 9,
            }
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_does_not_count_units_already_in_cart() {
        let mut store = logged_in("buyer", "buyerpass");

        store.add_to_cart("Gula 1kg", 6).unwrap();
        let addition = store.add_to_cart("Gula 1kg", 6).unwrap();

        assert_eq!(addition.in_cart, 12);
        assert_eq!(stock_of(&store, "Gula 1kg"), 8);
    }

    #[test]
    fn test_add_to_cart_rejects_zero_and_unknown() {
        let mut store = logged_in("buyer", "buyerpass");

        assert_eq!(
            store.add_to_cart("Gula 1kg", 0).unwrap_err(),
            CoreError::Validation(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert_eq!(
            store.add_to_cart("gula 1kg", 1).unwrap_err(),
            CoreError::NotFound("gula 1kg".to_string())
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_purchase_scenario() {
        let mut store = logged_in("buyer", "buyerpass");
        store.add_to_cart("Indomie Goreng", 2).unwrap();

        let summary = store.cart_summary().unwrap();
        assert_eq!(summary.total, Money::from_units(6000));

        let checkout = store.begin_checkout().unwrap();
        assert_eq!(checkout.total(), Money::from_units(6000));
        let receipt = checkout
            .pay(Money::from_units(10000))
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(receipt.change, Money::from_units(4000));
        assert_eq!(stock_of(&store, "Indomie Goreng"), 18);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_short_payment_changes_nothing() {
        let mut store = logged_in("buyer", "buyerpass");
        store.add_to_cart("Indomie Goreng", 2).unwrap();

        let settlement = store
            .begin_checkout()
            .unwrap()
            .pay(Money::from_units(4000))
            .unwrap();

        assert!(!settlement.is_settled());
        assert_eq!(stock_of(&store, "Indomie Goreng"), 20);
        assert_eq!(store.cart().quantity_of("Indomie Goreng"), 2);
    }

    #[test]
    fn test_oversold_line_is_rejected_at_checkout() {
        let mut store = logged_in("buyer", "buyerpass");
        store.add_to_cart("Gula 1kg", 5).unwrap();
        store.add_to_cart("Gula 1kg", 5).unwrap();

        let err = store
            .begin_checkout()
            .unwrap()
            .pay(Money::from_units(1_000_000))
            .unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { available: 8, requested: 10, .. }));
        assert_eq!(stock_of(&store, "Gula 1kg"), 8);
        assert_eq!(store.cart().quantity_of("Gula 1kg"), 10);
    }

    #[test]
    fn test_cart_survives_logout() {
        let mut store = logged_in("buyer", "buyerpass");
        store.add_to_cart("Beras 1kg", 1).unwrap();

        store.logout();
        assert!(store.current_account().is_none());
        store.login("buyer", "buyerpass").unwrap();

        assert_eq!(store.cart_summary().unwrap().total, Money::from_units(12000));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut store = logged_in("buyer", "buyerpass");
        assert_eq!(store.begin_checkout().unwrap_err(), CoreError::EmptyCart);
    }

    #[test]
    fn test_admin_restock_then_buyer_sees_it() {
        let mut store = logged_in("admin", "adminpass");
        store.restock("Gula 1kg", 2).unwrap();
        store.logout();

        store.login("buyer", "buyerpass").unwrap();
        store.add_to_cart("Gula 1kg", 10).unwrap();
        let settlement = store
            .begin_checkout()
            .unwrap()
            .pay(Money::from_units(100000))
            .unwrap();

        assert!(matches!(settlement, Settlement::Settled(_)));
        assert_eq!(stock_of(&store, "Gula 1kg"), 0);
    }

    #[test]
    fn test_oversized_cart_total_is_rejected() {
        let mut inventory = seed::catalog();
        inventory.register(
            CatalogEntry::new("Emas 1kg", Money::from_units(i64::MAX / 2), 10).unwrap(),
        );
        let mut store = Store::new(inventory, seed::accounts());
        store.login("buyer", "buyerpass").unwrap();

        store.add_to_cart("Emas 1kg", 3).unwrap();

        assert_eq!(store.cart_summary().unwrap_err(), CoreError::AmountOverflow);
        assert_eq!(store.begin_checkout().unwrap_err(), CoreError::AmountOverflow);
        assert_eq!(stock_of(&store, "Emas 1kg"), 10);
        assert_eq!(store.cart().quantity_of("Emas 1kg"), 3);
    }
}
