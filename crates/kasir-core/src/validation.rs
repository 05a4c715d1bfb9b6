//! # Validation Module
//!
//! Input validation utilities for Kasir POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (kasir-cli)                                   │
//! │  └── Raw text read from the operator                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Text → number parsing (InvalidNumber)                             │
//! │  └── Business rule checks (positive quantity, non-negative price)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Typed core API                                               │
//! │  └── u32 quantities make negative stock moves unrepresentable          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{parse_quantity, validate_cart_quantity};
//!
//! let qty = parse_quantity(" 3 ").unwrap();
//! validate_cart_quantity(qty).unwrap();
//! assert!(parse_quantity("tiga").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be positive (> 0); a cart line never holds zero units
pub fn validate_cart_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tendered payment amount.
///
/// ## Rules
/// - Must be non-negative; zero is a valid (if usually insufficient) offer
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "payment amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses a whole number typed by the operator.
///
/// Surrounding whitespace and a leading `+` are accepted. Anything else that
/// is not a base-10 integer is `InvalidNumber`.
fn parse_whole_number(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            input: input.trim().to_string(),
        })
}

/// Parses a stock or cart quantity.
///
/// ## Example
/// ```rust
/// use kasir_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("5").unwrap(), 5);
/// assert!(parse_quantity("-5").is_err());
/// assert!(parse_quantity("5.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let value = parse_whole_number("quantity", input)?;

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Parses a tendered payment amount.
pub fn parse_amount(input: &str) -> ValidationResult<Money> {
    let amount = Money::from_units(parse_whole_number("payment amount", input)?);
    validate_payment_amount(amount)?;
    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
