//! Pizza Repository

use super::RepoResult;
use shared::models::{Pizza, PizzaCreate};
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Pizza>> {
    let pizzas =
        sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(pizzas)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Pizza>> {
    let pizza =
        sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(pizza)
}

pub async fn create<'c>(conn: impl SqliteExecutor<'c>, data: PizzaCreate) -> RepoResult<Pizza> {
    let pizza = sqlx::query_as::<_, Pizza>(
        "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
    )
    .bind(data.name)
    .bind(data.ingredients)
    .fetch_one(conn)
    .await?;
    Ok(pizza)
}

/// Delete a pizza; its offerings go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM pizzas WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
