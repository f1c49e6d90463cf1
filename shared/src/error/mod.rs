//! Unified error system for the pizza API
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and body shape
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Restaurant errors
//! - 2xxx: Pizza errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // `{"error": "Restaurant not found"}`
//! let err = AppError::new(ErrorCode::RestaurantNotFound);
//!
//! // `{"errors": ["Pizza with id 9 not found"]}`
//! let err = AppError::with_message(ErrorCode::PizzaNotFound, "Pizza with id 9 not found")
//!     .listed();
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorShape};
