//! # Seed Data
//!
//! The catalog and accounts every run starts from. Nothing is persisted, so
//! each process begins with exactly this state.

use crate::inventory::Inventory;
use crate::money::Money;
use crate::session::{Account, AccountDirectory, Role};
use crate::types::CatalogEntry;

/// `(name, unit price, stock)` in display order.
pub const PRODUCTS: &[(&str, i64, u32)] = &[
    ("Indomie Goreng", 3000, 20),
    ("Beras 1kg", 12000, 15),
    ("Minyak Goreng 1L", 15000, 10),
    ("Gula 1kg", 10000, 8),
    ("Telur Ayam (1 butir)", 1500, 30),
];

/// `(identifier, secret, role)`.
pub const ACCOUNTS: &[(&str, &str, Role)] = &[
    ("admin", "adminpass", Role::Admin),
    ("buyer", "buyerpass", Role::Buyer),
];

pub fn catalog() -> Inventory {
    PRODUCTS
        .iter()
        .map(|&(name, price, stock)| CatalogEntry::from_trusted(name, Money::from_units(price), stock))
        .collect()
}

pub fn accounts() -> AccountDirectory {
    AccountDirectory::new(
        ACCOUNTS
            .iter()
            .map(|&(identifier, secret, role)| Account::new(identifier, secret, role))
            .collect(),
    )
}
