//! # Accounts, Session and Role Gate
//!
//! ## Permission Table
//! ```text
//! ┌──────────────┬───────┬───────┐
//! │ Operation    │ Admin │ Buyer │
//! ├──────────────┼───────┼───────┤
//! │ ViewCatalog  │   ✔   │   ✔   │
//! │ Restock      │   ✔   │       │
//! │ AddToCart    │       │   ✔   │
//! │ ViewCart     │       │   ✔   │
//! │ Checkout     │       │   ✔   │
//! └──────────────┴───────┴───────┘
//! ```
//!
//! Secrets are compared as plain bytes. This is a till simulator, not a
//! security boundary; do not reuse this module where credentials matter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Role & Operation
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Buyer,
}

impl Role {
    /// Whether this role may perform `operation`.
    pub const fn permits(self, operation: Operation) -> bool {
        match (self, operation) {
            (_, Operation::ViewCatalog) => true,
            (Role::Admin, Operation::Restock) => true,
            (Role::Buyer, Operation::AddToCart | Operation::ViewCart | Operation::Checkout) => {
                true
            }
            _ => false,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Buyer => "buyer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a logged-in account can ask the store to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ViewCatalog,
    Restock,
    AddToCart,
    ViewCart,
    Checkout,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::ViewCatalog => "view the catalog",
            Operation::Restock => "restock products",
            Operation::AddToCart => "add to cart",
            Operation::ViewCart => "view the cart",
            Operation::Checkout => "check out",
        })
    }
}

// =============================================================================
// Account
// =============================================================================

/// A login. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    identifier: String,
    #[serde(skip_serializing)]
    secret: String,
    role: Role,
}

impl Account {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, role: Role) -> Self {
        Account {
            identifier: identifier.into(),
            secret: secret.into(),
            role,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Byte-exact secret comparison.
    pub fn verify_secret(&self, secret: &str) -> bool {
        self.secret == secret
    }
}

/// The fixed list of accounts the store knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        AccountDirectory { accounts }
    }

    /// First account whose identifier and secret both match exactly.
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.identifier == identifier && a.verify_secret(secret))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

// =============================================================================
// Session
// =============================================================================

/// The single "who is at the till" slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Account>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates against `directory` and, on success, becomes that
    /// account. A failed attempt leaves the session as it was.
    pub fn login(
        &mut self,
        directory: &AccountDirectory,
        identifier: &str,
        secret: &str,
    ) -> CoreResult<&Account> {
        let account = directory
            .authenticate(identifier, secret)
            .ok_or(CoreError::AuthFailure)?
            .clone();
        Ok(&*self.current.insert(account))
    }

    /// Ends the session, returning the account that was logged in.
    pub fn logout(&mut self) -> Option<Account> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The role gate.
    ///
    /// - No session → `NotAuthenticated`
    /// - Role lacks the operation → `Forbidden`
    pub fn authorize(&self, operation: Operation) -> CoreResult<&Account> {
        let account = self.current().ok_or(CoreError::NotAuthenticated)?;
        if account.role.permits(operation) {
            Ok(account)
        } else {
            Err(CoreError::Forbidden {
                role: account.role,
                operation,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AccountDirectory {
        AccountDirectory::new(vec![
            Account::new("admin", "adminpass", Role::Admin),
            Account::new("buyer", "buyerpass", Role::Buyer),
        ])
    }

    #[test]
    fn test_verify_secret() {
        let admin = Account::new("admin", "adminpass", Role::Admin);
        assert!(admin.verify_secret("adminpass"));
        assert!(!admin.verify_secret("wrongpass"));
        assert!(!admin.verify_secret("Adminpass"));
        assert!(!admin.verify_secret("adminpass "));
    }

    #[test]
    fn test_authenticate_returns_seeded_role() {
        let directory = directory();
        assert_eq!(
            directory.authenticate("admin", "adminpass").map(Account::role),
            Some(Role::Admin)
        );
        assert_eq!(
            directory.authenticate("buyer", "buyerpass").map(Account::role),
            Some(Role::Buyer)
        );
        assert!(directory.authenticate("buyer", "adminpass").is_none());
        assert!(directory.authenticate("wronguser", "wrongpass").is_none());
        assert!(directory.authenticate("", "").is_none());
    }

    #[test]
    fn test_authenticate_returns_first_match() {
        let directory = AccountDirectory::new(vec![
            Account::new("shared", "pw", Role::Buyer),
            Account::new("shared", "pw", Role::Admin),
        ]);
        assert_eq!(
            directory.authenticate("shared", "pw").map(Account::role),
            Some(Role::Buyer)
        );
    }

    #[test]
    fn test_login_and_logout() {
        let directory = directory();
        let mut session = Session::new();

        let account = session.login(&directory, "buyer", "buyerpass").unwrap();
        assert_eq!(account.identifier(), "buyer");
        assert!(session.is_authenticated());

        let previous = session.logout().unwrap();
        assert_eq!(previous.role(), Role::Buyer);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_failed_login_stays_unauthenticated() {
        let mut session = Session::new();
        let err = session.login(&directory(), "wronguser", "wrongpass").unwrap_err();
        assert_eq!(err, CoreError::AuthFailure);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_role_gate() {
        let directory = directory();
        let mut session = Session::new();
        assert_eq!(
            session.authorize(Operation::ViewCatalog).unwrap_err(),
            CoreError::NotAuthenticated
        );

        session.login(&directory, "admin", "adminpass").unwrap();
        assert!(session.authorize(Operation::ViewCatalog).is_ok());
        assert!(session.authorize(Operation::Restock).is_ok());
        assert_eq!(
            session.authorize(Operation::AddToCart).unwrap_err(),
            CoreError::Forbidden {
                role: Role::Admin,
                operation: Operation::AddToCart,
            }
        );

        session.login(&directory, "buyer", "buyerpass").unwrap();
        assert!(session.authorize(Operation::Checkout).is_ok());
        assert!(session.authorize(Operation::Restock).is_err());
    }

    #[test]
    fn test_secret_is_not_serialized() {
        let json = serde_json::to_string(&Account::new("admin", "adminpass", Role::Admin)).unwrap();
        assert!(!json.contains("adminpass"));
        assert!(json.contains("\"role\":\"admin\""));
    }
}
