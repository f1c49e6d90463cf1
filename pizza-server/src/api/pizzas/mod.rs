//! Pizza API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/pizzas", routes())
        // Trailing-slash form of the collection route
        .route("/pizzas/", get(handler::list))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
