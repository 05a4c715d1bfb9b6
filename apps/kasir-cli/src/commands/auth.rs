//! # Auth Commands
//!
//! Login and logout. Passwords are never logged.

use kasir_core::{Account, Role, Store};
use tracing::{debug, info};

use super::failed;
use crate::error::UiError;

/// Logs in, replacing whoever was logged in.
///
/// ## Returns
/// The role of the account now logged in, or `AUTH_FAILURE`
pub fn login(store: &mut Store, username: &str, password: &str) -> Result<Role, UiError> {
    debug!(username = %username, "login command");

    let account = store
        .login(username, password)
        .map_err(|e| failed("login", e))?;

    info!(username = %account.identifier(), role = %account.role(), "Logged in");
    Ok(account.role())
}

/// Logs out. The cart is left as it is.
pub fn logout(store: &mut Store) -> Option<Account> {
    debug!("logout command");

    let previous = store.logout();
    if let Some(account) = &previous {
        info!(
            username = %account.identifier(),
            cart_lines = store.cart().len(),
            "Logged out"
        );
    }
    previous
}
