//! Field validation
//!
//! Standalone checks run on every write path before the store is touched.
//! Each returns the validated value or a [`ValidationError`]; none panic.

use thiserror::Error;

use crate::error::{AppError, ErrorCode};

/// Lowest price an offering may carry
pub const MIN_PRICE: i64 = 1;

/// Highest price an offering may carry
pub const MAX_PRICE: i64 = 30;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::ValidationFailed,
            ValidationError::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Offering price, guaranteed to lie in `MIN_PRICE..=MAX_PRICE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn get(self) -> i64 {
        self.0
    }
}

fn require_text(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::EmptyField { field }),
    }
}

/// Restaurant name must be present and non-empty.
pub fn validate_restaurant_name(value: Option<&str>) -> Result<String, ValidationError> {
    require_text(value, "Restaurant name")
}

/// Restaurant address must be present and non-empty.
pub fn validate_restaurant_address(value: Option<&str>) -> Result<String, ValidationError> {
    require_text(value, "Restaurant address")
}

/// Price must lie in `MIN_PRICE..=MAX_PRICE`.
pub fn validate_price(value: i64) -> Result<Price, ValidationError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "Price",
            value,
            min: MIN_PRICE,
            max: MAX_PRICE,
        });
    }
    Ok(Price(value))
}
