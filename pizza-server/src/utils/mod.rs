//! Utilities - error types and logging
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`logger`] - tracing subscriber setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, ErrorCategory, ErrorCode, ErrorShape};
pub use result::AppResult;
