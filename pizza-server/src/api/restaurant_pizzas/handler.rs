//! Restaurant Pizza API Handlers
//!
//! Every error from this endpoint renders as `{"errors": [...]}`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{RestaurantPizzaCreate, RestaurantPizzaView};
use shared::validation::validate_price;

use crate::core::ServerState;
use crate::db::repository::{RepoError, pizza, restaurant, restaurant_pizza};
use crate::utils::{AppError, AppResult, ErrorCode};

const MISSING_FIELDS: &str = "Missing required fields: price, pizza_id, restaurant_id";

fn store_error(err: RepoError) -> AppError {
    AppError::database(format!("An error occurred: {}", err.detail())).listed()
}

/// POST /restaurant_pizzas - offer a pizza at a restaurant
///
/// Checks run in order: required fields, pizza exists, restaurant exists,
/// price in range. The response nests the pizza and the restaurant.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<RestaurantPizzaCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RestaurantPizzaView>)> {
    let Json(payload) =
        payload.map_err(|e| AppError::invalid_request(e.body_text()).listed())?;

    let (price, pizza_id, restaurant_id) = payload
        .required_fields()
        .ok_or_else(|| AppError::required_field(MISSING_FIELDS).listed())?;

    let pizza = pizza::find_by_id(&state.pool, pizza_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::PizzaNotFound,
                format!("Pizza with id {pizza_id} not found"),
            )
            .listed()
        })?;

    let restaurant = restaurant::find_by_id(&state.pool, restaurant_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant with id {restaurant_id} not found"),
            )
            .listed()
        })?;

    let price = validate_price(price).map_err(|e| AppError::from(e).listed())?;

    let created = restaurant_pizza::create(&state.pool, price, pizza.id, restaurant.id)
        .await
        .map_err(store_error)?;
    tracing::info!(
        restaurant_pizza_id = created.id,
        pizza_id = created.pizza_id,
        restaurant_id = created.restaurant_id,
        price = created.price,
        "Restaurant pizza created"
    );

    let view = load_view(&state, created.id).await.map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Reload a restaurant pizza with its parents; a vanished parent becomes `null`
async fn load_view(state: &ServerState, id: i64) -> Result<RestaurantPizzaView, RepoError> {
    let row = restaurant_pizza::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant pizza {id}")))?;
    let pizza = pizza::find_by_id(&state.pool, row.pizza_id).await?;
    let restaurant = restaurant::find_by_id(&state.pool, row.restaurant_id).await?;
    Ok(RestaurantPizzaView::with_parents(row, pizza, restaurant))
}
