//! API routing
//!
//! # Layout
//!
//! - [`home`] - greeting page
//! - [`restaurants`] - list, show and delete restaurants
//! - [`pizzas`] - list pizzas
//! - [`restaurant_pizzas`] - offer a pizza at a restaurant

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::middleware;

pub mod home;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(home::router())
        .merge(restaurants::router())
        .merge(pizzas::router())
        .merge(restaurant_pizzas::router())
}

/// Build the application with all middleware
///
/// Used by the HTTP server and by integration tests.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request spans
        .layer(TraceLayer::new_for_http())
}
