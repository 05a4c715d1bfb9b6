//! # Domain Types
//!
//! The catalog entry: a named product with a unit price and a stock count.
//!
//! ```text
//! ┌─────────────────────────┐
//! │      CatalogEntry       │
//! │  ─────────────────────  │
//! │  name (unique key)      │
//! │  unit_price (Money)     │
//! │  stock (u32, never < 0) │
//! └─────────────────────────┘
//! ```
//!
//! Stock changes in exactly two places: admin restock (`add_stock`) and a
//! settled checkout (`deduct_stock`).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    unit_price: Money,
    stock: u32,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    ///
    /// The name is trimmed; it must not be empty and the price must not be
    /// negative.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        stock: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(unit_price)?;

        Ok(CatalogEntry {
            name: name.trim().to_string(),
            unit_price,
            stock,
        })
    }

    /// Builds an entry from values known to be valid (seed data).
    pub(crate) fn from_trusted(name: &str, unit_price: Money, stock: u32) -> Self {
        debug_assert!(validate_product_name(name).is_ok() && !unit_price.is_negative());
        CatalogEntry {
            name: name.to_string(),
            unit_price,
            stock,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Checks whether the current stock covers `quantity`.
    #[inline]
    pub fn can_supply(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }

    /// Removes `quantity` units from stock.
    ///
    /// Returns `false` and leaves stock untouched when `quantity` exceeds
    /// the current stock.
    pub fn deduct_stock(&mut self, quantity: u32) -> bool {
        if !self.can_supply(quantity) {
            return false;
        }
        self.stock -= quantity;
        true
    }

    /// Adds `quantity` units to stock.
    ///
    /// Fails only if the counter would overflow, in which case stock is
    /// unchanged.
    pub fn add_stock(&mut self, quantity: u32) -> CoreResult<()> {
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or_else(|| CoreError::StockOverflow {
                name: self.name.clone(),
                max: u32::MAX,
            })?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
