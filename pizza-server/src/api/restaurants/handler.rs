//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::RestaurantView;

use crate::core::ServerState;
use crate::db::repository::restaurant;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /restaurants - all restaurants, without pizzas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RestaurantView>>> {
    let restaurants = restaurant::find_all(&state.pool).await?;
    Ok(Json(restaurants.into_iter().map(RestaurantView::from).collect()))
}

/// GET /restaurants/{id} - one restaurant with the pizzas it offers
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RestaurantView>> {
    let found = restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    let pizzas = restaurant::find_pizzas(&state.pool, id).await?;
    Ok(Json(RestaurantView::with_pizzas(found, pizzas)))
}

/// DELETE /restaurants/{id} - delete a restaurant and its offerings
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;

    let deleted = restaurant::delete(&state.pool, id).await.map_err(|e| {
        AppError::database(format!(
            "An error occurred while deleting the restaurant: {}",
            e.detail()
        ))
    })?;
    if !deleted {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }

    tracing::info!(restaurant_id = id, "Restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
