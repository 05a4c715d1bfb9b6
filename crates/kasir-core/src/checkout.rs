//! # Checkout
//!
//! Settles the cart against a tendered payment.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Checkout::begin ──► Pending ──┬── tendered >= total ──► Settled       │
//! │   (total shown)                 │   • stock deducted per line           │
//! │                                 │   • cart cleared                      │
//! │                                 │   • change = tendered - total         │
//! │                                 │                                       │
//! │                                 └── tendered <  total ──► Aborted       │
//! │                                     • nothing changes                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A pending [`Checkout`] holds exclusive borrows of the cart and the
//! inventory, so neither can change between showing the total and taking
//! the payment. There is no partial settlement: either every line is
//! deducted or none is.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::{sum_subtotals, Cart, CartSummary, PricedLine};
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::validation::validate_payment_amount;

// =============================================================================
// Outcomes
// =============================================================================

/// Proof of a settled checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub receipt_number: String,
    pub lines: Vec<PricedLine>,
    pub total: Money,
    pub tendered: Money,
    pub change: Money,
    pub completed_at: DateTime<Utc>,
}

/// Why a checkout was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub total: Money,
    pub tendered: Money,
}

impl Shortfall {
    /// How much more the buyer would have to pay.
    pub fn missing(&self) -> Money {
        self.total - self.tendered
    }
}

/// Terminal state of a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Settlement {
    Settled(Receipt),
    Aborted(Shortfall),
}

impl Settlement {
    pub fn is_settled(&self) -> bool {
        matches!(self, Settlement::Settled(_))
    }

    /// Maps `Aborted` to `CoreError::InsufficientFunds`.
    pub fn into_result(self) -> CoreResult<Receipt> {
        match self {
            Settlement::Settled(receipt) => Ok(receipt),
            Settlement::Aborted(Shortfall { total, tendered }) => {
                Err(CoreError::InsufficientFunds { total, tendered })
            }
        }
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// A checkout in the Pending state.
#[derive(Debug)]
pub struct Checkout<'a> {
    cart: &'a mut Cart,
    inventory: &'a mut Inventory,
    lines: Vec<PricedLine>,
    total: Money,
}

impl<'a> Checkout<'a> {
    /// Prices the cart and enters the Pending state.
    ///
    /// An empty cart cannot be checked out.
    pub fn begin(cart: &'a mut Cart, inventory: &'a mut Inventory) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines = cart.priced_lines(inventory)?;
        let total = sum_subtotals(&lines)?;

        Ok(Checkout {
            cart,
            inventory,
            lines,
            total,
        })
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    /// The cart as it will be charged, for display before payment.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            total: self.total,
        }
    }

    /// Takes the payment and moves to Settled or Aborted.
    ///
    /// ## Errors
    /// - `Validation` if `tendered` is negative (nothing changes)
    /// - `InsufficientStock` if stock fell below a line's quantity after it
    ///   was added to the cart (nothing changes)
    pub fn pay(mut self, tendered: Money) -> CoreResult<Settlement> {
        validate_payment_amount(tendered)?;

        if tendered < self.total {
            return Ok(Settlement::Aborted(Shortfall {
                total: self.total,
                tendered,
            }));
        }

        // All-or-nothing: verify every line before touching any stock.
        for line in &self.lines {
            let entry = self.inventory.require(&line.name)?;
            if !entry.can_supply(line.quantity) {
                return Err(CoreError::InsufficientStock {
                    name: line.name.clone(),
                    available: entry.stock(),
                    requested: line.quantity,
                });
            }
        }

        for line in &self.lines {
            let deducted = self.inventory.require_mut(&line.name)?.deduct_stock(line.quantity);
            debug_assert!(deducted, "stock verified above");
        }
        self.cart.clear();

        let completed_at = Utc::now();
        Ok(Settlement::Settled(Receipt {
            id: Uuid::new_v4(),
            receipt_number: receipt_number(completed_at),
            change: tendered - self.total,
            lines: self.lines,
            total: self.total,
            tendered,
            completed_at,
        }))
    }
}

/// Human-readable receipt number: `yymmdd-HHMMSS-nnnn`.
fn receipt_number(at: DateTime<Utc>) -> String {
    let suffix = at.timestamp_subsec_nanos() % 10_000;
    format!("{}-{:04}", at.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogEntry;
    use proptest::prelude::*;

    fn entry(name: &str, price: i64, stock: u32) -> CatalogEntry {
        CatalogEntry::new(name, Money::from_units(price), stock).unwrap()
    }

    /// Inventory with Indomie Goreng (3000, stock 20) and a cart holding 2.
    fn indomie_setup() -> (Inventory, Cart) {
        let inventory: Inventory = [entry("Indomie Goreng", 3000, 20)].into_iter().collect();
        let mut cart = Cart::new();
        cart.add_item(inventory.lookup("Indomie Goreng").unwrap(), 2).unwrap();
        (inventory, cart)
    }

    #[test]
    fn test_checkout_successful_payment() {
        let (mut inventory, mut cart) = indomie_setup();

        let checkout = Checkout::begin(&mut cart, &mut inventory).unwrap();
        assert_eq!(checkout.total(), Money::from_units(6000));

        let receipt = checkout
            .pay(Money::from_units(10000))
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(receipt.change, Money::from_units(4000));
        assert_eq!(receipt.total, Money::from_units(6000));
        assert_eq!(receipt.tendered, Money::from_units(10000));
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(inventory.lookup("Indomie Goreng").unwrap().stock(), 18);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_insufficient_payment() {
        let (mut inventory, mut cart) = indomie_setup();
        let inventory_before = inventory.clone();
        let cart_before = cart.clone();

        let settlement = Checkout::begin(&mut cart, &mut inventory)
            .unwrap()
            .pay(Money::from_units(4000))
            .unwrap();

        assert_eq!(
            settlement,
            Settlement::Aborted(Shortfall {
                total: Money::from_units(6000),
                tendered: Money::from_units(4000),
            })
        );
        assert_eq!(inventory, inventory_before);
        assert_eq!(cart, cart_before);
        assert_eq!(inventory.lookup("Indomie Goreng").unwrap().stock(), 20);
        assert_eq!(cart.quantity_of("Indomie Goreng"), 2);
    }

    #[test]
    fn test_aborted_maps_to_insufficient_funds() {
        let (mut inventory, mut cart) = indomie_setup();

        let err = Checkout::begin(&mut cart, &mut inventory)
            .unwrap()
            .pay(Money::from_units(5999))
            .unwrap()
            .into_result()
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientFunds {
                total: Money::from_units(6000),
                tendered: Money::from_units(5999),
            }
        );
    }

    #[test]
    fn test_exact_payment_gives_zero_change() {
        let (mut inventory, mut cart) = indomie_setup();

        let receipt = Checkout::begin(&mut cart, &mut inventory)
            .unwrap()
            .pay(Money::from_units(6000))
            .unwrap()
            .into_result()
            .unwrap();

        assert!(receipt.change.is_zero());
    }

    #[test]
    fn test_empty_cart_cannot_begin() {
        let mut inventory: Inventory = [entry("Gula 1kg", 10000, 8)].into_iter().collect();
        let mut cart = Cart::new();

        let err = Checkout::begin(&mut cart, &mut inventory).unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
    }

    #[test]
    fn test_negative_tender_is_rejected_without_change() {
        let (mut inventory, mut cart) = indomie_setup();

        let err = Checkout::begin(&mut cart, &mut inventory)
            .unwrap()
            .pay(Money::from_units(-1))
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(cart.quantity_of("Indomie Goreng"), 2);
    }

    #[test]
    fn test_stock_race_deducts_nothing() {
        let mut inventory: Inventory = [entry("Gula 1kg", 10000, 8), entry("Beras 1kg", 12000, 15)]
            .into_iter()
            .collect();
        let mut cart = Cart::new();
        cart.add_item(inventory.lookup("Gula 1kg").unwrap(), 2).unwrap();
        cart.add_item(inventory.lookup("Beras 1kg").unwrap(), 5).unwrap();

        // Someone else bought most of the rice after it went into this cart.
        assert!(inventory.require_mut("Beras 1kg").unwrap().deduct_stock(12));

        let err = Checkout::begin(&mut cart, &mut inventory)
            .unwrap()
            .pay(Money::from_units(100_000))
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                name: "Beras 1kg".to_string(),
                available: 3,
                requested: 5,
            }
        );
        assert_eq!(inventory.lookup("Gula 1kg").unwrap().stock(), 8);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_receipt_number_format() {
        let at = DateTime::parse_from_rfc3339("2024-03-05T07:08:09.000012345Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(receipt_number(at), "240305-070809-2345");
    }

    #[test]
    fn test_settlement_serializes_with_status_tag() {
        let json = serde_json::to_value(Settlement::Aborted(Shortfall {
            total: Money::from_units(6000),
            tendered: Money::from_units(4000),
        }))
        .unwrap();

        assert_eq!(json["status"], "aborted");
        assert_eq!(json["total"], 6000);
    }

    proptest! {
        #[test]
        fn prop_settlement_matches_payment(qty in 1u32..=20, tendered in 0i64..100_000) {
            let mut inventory: Inventory = [entry("Indomie Goreng", 3000, 20)].into_iter().collect();
            let mut cart = Cart::new();
            cart.add_item(inventory.lookup("Indomie Goreng").unwrap(), qty).unwrap();
            let total = 3000 * i64::from(qty);

            let settlement = Checkout::begin(&mut cart, &mut inventory)
                .unwrap()
                .pay(Money::from_units(tendered))
                .unwrap();

            let stock = inventory.lookup("Indomie Goreng").unwrap().stock();
            match settlement {
                Settlement::Settled(receipt) => {
                    prop_assert!(tendered >= total);
                    prop_assert_eq!(receipt.change, Money::from_units(tendered - total));
                    prop_assert_eq!(stock, 20 - qty);
                    prop_assert!(cart.is_empty());
                }
                Settlement::Aborted(shortfall) => {
                    prop_assert!(tendered < total);
                    prop_assert_eq!(shortfall.missing(), Money::from_units(total - tendered));
                    prop_assert_eq!(stock, 20);
                    prop_assert_eq!(cart.quantity_of("Indomie Goreng"), qty);
                }
            }
        }
    }
}
