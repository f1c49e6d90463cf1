//! Sample data
//!
//! Clears every table and loads a small fixed catalogue of restaurants,
//! pizzas and offerings in one transaction.

use serde::Serialize;
use shared::models::{PizzaCreate, RestaurantCreate};
use shared::validation::validate_price;
use sqlx::SqlitePool;

use super::repository::{RepoResult, pizza, restaurant, restaurant_pizza};

const RESTAURANTS: [(&str, &str); 4] = [
    ("Pizza Palace", "123 Main St"),
    ("Dominic's Pizza", "456 Oak Ave"),
    ("Mama Mia's Pizzeria", "789 Pine Ln"),
    ("Gourmet Slice", "101 Elm Blvd"),
];

const PIZZAS: [(&str, &str); 5] = [
    ("Margherita", "Tomato sauce, Mozzarella, Basil"),
    ("Pepperoni", "Tomato sauce, Mozzarella, Pepperoni"),
    (
        "Veggie Delight",
        "Tomato sauce, Mozzarella, Bell peppers, Onions, Mushrooms",
    ),
    ("Meat Lovers", "Tomato sauce, Mozzarella, Sausage, Bacon, Ham"),
    ("Hawaiian", "Tomato sauce, Mozzarella, Ham, Pineapple"),
];

/// (restaurant index, pizza index, price)
const OFFERINGS: [(usize, usize, i64); 9] = [
    (0, 0, 12),
    (0, 1, 15),
    (1, 1, 14),
    (1, 2, 13),
    (2, 0, 11),
    (2, 3, 18),
    (2, 4, 16),
    (3, 0, 10),
    (3, 2, 12),
];

/// Row counts inserted by [`seed_data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replace the database contents with the sample catalogue
pub async fn seed_data(pool: &SqlitePool) -> RepoResult<SeedSummary> {
    let mut tx = pool.begin().await?;

    tracing::info!("Clearing existing data");
    for table in ["restaurant_pizzas", "restaurants", "pizzas"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }

    tracing::info!("Seeding restaurants");
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let data = RestaurantCreate {
            name: name.into(),
            address: address.into(),
        };
        restaurants.push(restaurant::create(&mut *tx, data).await?);
    }

    tracing::info!("Seeding pizzas");
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let data = PizzaCreate {
            name: name.into(),
            ingredients: ingredients.into(),
        };
        pizzas.push(pizza::create(&mut *tx, data).await?);
    }

    tracing::info!("Adding pizzas to restaurants");
    for (r, p, price) in OFFERINGS {
        restaurant_pizza::insert(
            &mut *tx,
            validate_price(price)?,
            pizzas[p].id,
            restaurants[r].id,
        )
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        restaurants: restaurants.len(),
        pizzas: pizzas.len(),
        restaurant_pizzas: OFFERINGS.len(),
    };
    tracing::info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "Seeding done"
    );
    Ok(summary)
}
