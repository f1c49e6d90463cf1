//! Shared types for the pizza API
//!
//! Domain models with their API views, the unified error type and the
//! field validation layer.

pub mod error;
pub mod models;
pub mod validation;
