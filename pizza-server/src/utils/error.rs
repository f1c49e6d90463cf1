//! Unified error handling
//!
//! Re-exports the shared error types so handlers only import from `utils`.
//!
//! ```ignore
//! // {"error": "Restaurant not found"}, 404
//! Err(AppError::new(ErrorCode::RestaurantNotFound))
//!
//! // {"errors": ["Pizza with id 9 not found"]}, 404
//! Err(AppError::with_message(ErrorCode::PizzaNotFound, "Pizza with id 9 not found").listed())
//! ```

pub use shared::error::{AppError, ErrorCategory, ErrorCode, ErrorShape};
