//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule and role gate failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kasir-cli errors (in app)                                             │
//! │  └── UiError          - What the menu prints (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → UiError → console                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these errors is fatal. Every one of them leaves the store state
//! exactly as it was before the failed operation.

use thiserror::Error;

use crate::money::Money;
use crate::session::{Operation, Role};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No catalog entry with this exact (case-sensitive) name.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Requested quantity exceeds the live stock count.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 25)
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Indomie Goreng", available: 20, requested: 25 }
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Payment is below the cart total. Cart and inventory are untouched.
    #[error("Insufficient funds: total {total}, tendered {tendered}")]
    InsufficientFunds { total: Money, tendered: Money },

    /// No account matches the identifier/secret pair.
    #[error("Invalid username or password")]
    AuthFailure,

    /// Operation requires a logged-in account.
    #[error("Not logged in")]
    NotAuthenticated,

    /// The current role is not allowed to perform the operation.
    #[error("{role} accounts cannot {operation}")]
    Forbidden { role: Role, operation: Operation },

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Restocking would overflow the stock counter.
    #[error("Stock for {name} cannot exceed {max}")]
    StockOverflow { name: String, max: u32 },

    /// A subtotal or cart total does not fit in a `Money` amount.
    #[error("Cart amount is too large to price")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements and are raised
/// before any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Text could not be read as a whole number.
    #[error("{field} must be a whole number, got '{input}'")]
    InvalidNumber { field: String, input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
