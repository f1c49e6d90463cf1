//! Greeting page
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET | HTML greeting |

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - greeting
pub async fn index() -> Html<&'static str> {
    Html("<h1>Welcome to the Pizza Restaurant API!</h1>")
}
