//! Reset the database and load the sample catalogue

use anyhow::Context;
use pizza_server::db::{DbService, seed};
use pizza_server::setup_environment;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    let db = DbService::new(&config.database_uri)
        .await
        .with_context(|| format!("opening {}", config.database_uri))?;

    let summary = seed::seed_data(&db.pool)
        .await
        .context("seeding database")?;

    println!(
        "Seeded {} restaurants, {} pizzas and {} restaurant pizzas",
        summary.restaurants, summary.pizzas, summary.restaurant_pizzas
    );
    Ok(())
}
