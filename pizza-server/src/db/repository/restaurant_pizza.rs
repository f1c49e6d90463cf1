//! Restaurant Pizza Repository

use super::RepoResult;
use shared::models::RestaurantPizza;
use shared::validation::Price;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<RestaurantPizza>> {
    let restaurant_pizza = sqlx::query_as::<_, RestaurantPizza>(
        "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(restaurant_pizza)
}

/// Insert on an existing connection or transaction
pub async fn insert<'c>(
    conn: impl SqliteExecutor<'c>,
    price: Price,
    pizza_id: i64,
    restaurant_id: i64,
) -> RepoResult<RestaurantPizza> {
    let row = sqlx::query_as::<_, RestaurantPizza>(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?) \
         RETURNING id, price, pizza_id, restaurant_id",
    )
    .bind(price.get())
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Insert in its own transaction
///
/// Taking a [`Price`] means the range check has already passed.
pub async fn create(
    pool: &SqlitePool,
    price: Price,
    pizza_id: i64,
    restaurant_id: i64,
) -> RepoResult<RestaurantPizza> {
    let mut tx = pool.begin().await?;
    let row = insert(&mut *tx, price, pizza_id, restaurant_id).await?;
    tx.commit().await?;
    Ok(row)
}
