//! # Product Commands
//!
//! Catalog listing, single-product lookup and admin restock.

use kasir_core::{CatalogEntry, Restocked, Store};
use tracing::{debug, info};

use super::rejected;
use crate::error::UiError;

/// Lists every product in catalog order.
pub fn list_products(store: &Store) -> Result<&[CatalogEntry], UiError> {
    debug!("list_products command");
    store.catalog().map_err(|e| rejected("list_products", e))
}

/// Gets a single product by its exact, case-sensitive name.
///
/// The menu calls this right after the name prompt so an unknown product
/// is reported before the quantity is asked for.
pub fn find_product<'a>(store: &'a Store, name: &str) -> Result<&'a CatalogEntry, UiError> {
    debug!(name = %name, "find_product command");
    store.product(name).map_err(|e| rejected("find_product", e))
}

/// Adds stock to a product. Admin only.
///
/// ## Returns
/// The product name, units added and the new stock count
pub fn add_stock(store: &mut Store, name: &str, quantity: u32) -> Result<Restocked, UiError> {
    debug!(name = %name, quantity, "add_stock command");

    let restocked = store
        .restock(name, quantity)
        .map_err(|e| rejected("add_stock", e))?;

    info!(
        name = %restocked.name,
        added = restocked.added,
        stock = restocked.stock,
        "Stock added"
    );
    Ok(restocked)
}
