//! Restaurant Pizza API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/restaurant_pizzas", routes())
        // Trailing-slash form of the collection route
        .route("/restaurant_pizzas/", post(handler::create))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
