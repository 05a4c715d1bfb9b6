//! # Cart
//!
//! The buyer's pending purchase: one line per product, holding only the
//! product name and a quantity.
//!
//! ## Pricing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart                          Inventory                                │
//! │  ───────────────────           ─────────────────────────────────        │
//! │  "Indomie Goreng" × 2  ──────► Indomie Goreng  Rp3000  stock 20        │
//! │  "Gula 1kg"       × 1  ──────► Gula 1kg        Rp10000 stock 8         │
//! │                                                                         │
//! │  The cart never copies price or stock. Totals are resolved against     │
//! │  the inventory every time they are asked for.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is NOT checked here. The store checks live stock before calling
//! [`Cart::add_item`], and the quantity already sitting in the cart is not
//! counted against it.

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::CatalogEntry;
use crate::validation::validate_cart_quantity;

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
}

/// A cart line priced against the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

/// Cart listing plus total, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<PricedLine>,
    pub total: Money,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product name (adding again increases quantity)
/// - Every line quantity is > 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a product, accumulating onto an existing line.
    ///
    /// Returns the line's quantity after the add.
    pub fn add_item(&mut self, entry: &CatalogEntry, quantity: u32) -> CoreResult<u32> {
        validate_cart_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.name == entry.name()) {
            line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: i64::from(u32::MAX),
                }
            })?;
            return Ok(line.quantity);
        }

        self.lines.push(CartLine {
            name: entry.name().to_string(),
            quantity,
        });
        Ok(quantity)
    }

    /// Quantity held for `name`, zero if absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.name == name)
            .map_or(0, |l| l.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Prices every line against `inventory`, in the order lines were added.
    ///
    /// Fails with `NotFound` if a line names a product the inventory does
    /// not hold, and with `AmountOverflow` if a subtotal does not fit.
    pub fn priced_lines(&self, inventory: &Inventory) -> CoreResult<Vec<PricedLine>> {
        self.lines
            .iter()
            .map(|line| {
                let entry = inventory.require(&line.name)?;
                let subtotal = entry
                    .unit_price()
                    .checked_multiply_quantity(line.quantity)
                    .ok_or(CoreError::AmountOverflow)?;
                Ok(PricedLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: entry.unit_price(),
                    subtotal,
                })
            })
            .collect()
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total(&self, inventory: &Inventory) -> CoreResult<Money> {
        sum_subtotals(&self.priced_lines(inventory)?)
    }

    pub fn summary(&self, inventory: &Inventory) -> CoreResult<CartSummary> {
        let lines = self.priced_lines(inventory)?;
        let total = sum_subtotals(&lines)?;
        Ok(CartSummary { lines, total })
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Adds up line subtotals, failing with `AmountOverflow` past `i64::MAX`.
pub(crate) fn sum_subtotals(lines: &[PricedLine]) -> CoreResult<Money> {
    lines.iter().try_fold(Money::zero(), |acc, line| {
        acc.checked_add(line.subtotal).ok_or(CoreError::AmountOverflow)
    })
}
