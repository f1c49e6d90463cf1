//! Pizza API Handlers

use axum::{Json, extract::State};
use shared::models::Pizza;

use crate::core::ServerState;
use crate::db::repository::pizza;
use crate::utils::AppResult;

/// GET /pizzas - all pizzas in id order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Pizza>>> {
    let pizzas = pizza::find_all(&state.pool).await?;
    Ok(Json(pizzas))
}
