//! # UI Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir POS                              │
//! │                                                                         │
//! │  Menu                        Commands                                   │
//! │  ────                        ────────                                   │
//! │                                                                         │
//! │  "2. Add to cart"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, UiError>                                              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Parse Error? ─── ValidationError::InvalidNumber ──┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Rule Error? ─── CoreError::InsufficientStock ── UiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every UiError is printed and the menu comes back. None is fatal.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In JSON output mode the error is printed as:
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Product not found: Kopi"
//! }
//! ```

use kasir_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error reported by a menu command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{}] {}", .code.as_str(), .message)]
pub struct UiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes shown in JSON output and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product name
    NotFound,

    /// Text where a whole number was expected, or a number out of range
    InvalidInput,

    /// Requested quantity exceeds stock
    InsufficientStock,

    /// Payment below the cart total
    InsufficientFunds,

    /// Username/password did not match
    AuthFailure,

    /// Not logged in, or the role may not do this
    Forbidden,

    /// Cart operation failed (e.g. paying for an empty cart)
    CartError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ErrorCode::AuthFailure => "AUTH_FAILURE",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl UiError {
    /// Creates a new UI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        UiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::InvalidInput, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to UI errors.
impl From<CoreError> for UiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(name) => UiError::not_found("Product", &name),
            CoreError::InsufficientStock {
                name,
                available,
                requested,
            } => UiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Sorry, not enough stock for {}: {} available, {} requested",
                    name, available, requested
                ),
            ),
            err @ CoreError::InsufficientFunds { .. } => UiError::new(
                ErrorCode::InsufficientFunds,
                format!("{}. Transaction cancelled", err),
            ),
            CoreError::AuthFailure => {
                UiError::new(ErrorCode::AuthFailure, "Invalid username or password")
            }
            CoreError::NotAuthenticated => {
                UiError::new(ErrorCode::Forbidden, "Please log in first")
            }
            err @ CoreError::Forbidden { .. } => UiError::new(ErrorCode::Forbidden, err.to_string()),
            CoreError::EmptyCart => UiError::new(ErrorCode::CartError, "Your cart is empty"),
            err @ CoreError::StockOverflow { .. } => UiError::invalid_input(err.to_string()),
            err @ CoreError::AmountOverflow => UiError::new(ErrorCode::CartError, err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for UiError {
    fn from(err: ValidationError) -> Self {
        UiError::invalid_input(err.to_string())
    }
}
