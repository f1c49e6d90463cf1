//! Restaurant Repository
//!
//! Name and address are validated on every write, including in-place updates.

use super::{RepoError, RepoResult};
use shared::models::{Pizza, Restaurant, RestaurantCreate, RestaurantUpdate};
use shared::validation::{validate_restaurant_address, validate_restaurant_name};
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Restaurant>> {
    let restaurants =
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(restaurants)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let restaurant =
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(restaurant)
}

/// Pizzas offered by a restaurant, one per offering, in offering order
pub async fn find_pizzas(pool: &SqlitePool, restaurant_id: i64) -> RepoResult<Vec<Pizza>> {
    let pizzas = sqlx::query_as::<_, Pizza>(
        "SELECT p.id, p.name, p.ingredients FROM restaurant_pizzas rp \
         JOIN pizzas p ON p.id = rp.pizza_id \
         WHERE rp.restaurant_id = ? ORDER BY rp.id",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(pizzas)
}

pub async fn create<'c>(
    conn: impl SqliteExecutor<'c>,
    data: RestaurantCreate,
) -> RepoResult<Restaurant> {
    let name = validate_restaurant_name(Some(&data.name))?;
    let address = validate_restaurant_address(Some(&data.address))?;

    let restaurant = sqlx::query_as::<_, Restaurant>(
        "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
    )
    .bind(name)
    .bind(address)
    .fetch_one(conn)
    .await?;
    Ok(restaurant)
}

/// Update the given fields in place; absent fields keep their value
pub async fn update(pool: &SqlitePool, id: i64, data: RestaurantUpdate) -> RepoResult<Restaurant> {
    let name = data
        .name
        .as_deref()
        .map(|n| validate_restaurant_name(Some(n)))
        .transpose()?;
    let address = data
        .address
        .as_deref()
        .map(|a| validate_restaurant_address(Some(a)))
        .transpose()?;

    sqlx::query_as::<_, Restaurant>(
        "UPDATE restaurants SET name = COALESCE(?1, name), address = COALESCE(?2, address) \
         WHERE id = ?3 RETURNING id, name, address",
    )
    .bind(name)
    .bind(address)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id}")))
}

/// Delete a restaurant and, through ON DELETE CASCADE, all of its offerings
///
/// Runs in one transaction: either everything goes or nothing does.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        tracing::debug!(restaurant_id = id, "Restaurant deleted");
    }
    Ok(deleted)
}
