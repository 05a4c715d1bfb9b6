//! # Sale Commands
//!
//! Checkout runs in two calls with a prompt in between:
//!
//! ```text
//! begin_checkout(&mut store) ──► Checkout (Pending, total known)
//!         │
//!         │  menu shows the cart and asks for the amount paid
//!         ▼
//! pay(checkout, amount) ──► Settlement::Settled(Receipt)
//!                       └─► Settlement::Aborted(Shortfall)
//! ```
//!
//! The pending checkout borrows the store mutably, so nothing else can
//! touch the cart or stock until it is paid or dropped.

use kasir_core::{Checkout, Money, Settlement, Store};
use tracing::{debug, info};

use super::{failed, rejected};
use crate::error::UiError;

/// Starts a checkout. Buyer only; the cart must not be empty.
pub fn begin_checkout(store: &mut Store) -> Result<Checkout<'_>, UiError> {
    debug!("begin_checkout command");

    let checkout = store
        .begin_checkout()
        .map_err(|e| rejected("begin_checkout", e))?;

    debug!(total = %checkout.total(), lines = checkout.lines().len(), "Checkout pending");
    Ok(checkout)
}

/// Takes the payment.
///
/// A short payment is not an error here: it comes back as
/// `Settlement::Aborted` and the menu reports it.
pub fn pay(checkout: Checkout<'_>, amount: Money) -> Result<Settlement, UiError> {
    debug!(amount = %amount, total = %checkout.total(), "pay command");

    let settlement = checkout.pay(amount).map_err(|e| failed("pay", e))?;

    match &settlement {
        Settlement::Settled(receipt) => info!(
            receipt_id = %receipt.id,
            receipt_number = %receipt.receipt_number,
            total = %receipt.total,
            change = %receipt.change,
            lines = receipt.lines.len(),
            "Sale settled"
        ),
        Settlement::Aborted(shortfall) => info!(
            total = %shortfall.total,
            tendered = %shortfall.tendered,
            missing = %shortfall.missing(),
            "Payment short, checkout aborted"
        ),
    }

    Ok(settlement)
}
