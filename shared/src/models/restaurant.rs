//! Restaurant Model

use serde::{Deserialize, Serialize};

use super::Pizza;

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
}

/// Update restaurant payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Restaurant as returned by the API
///
/// `pizzas` is only emitted when the view was built with
/// [`RestaurantView::with_pizzas`]: one entry per offering, in offering
/// order, duplicates kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pizzas: Option<Vec<Pizza>>,
}

impl RestaurantView {
    pub fn new(restaurant: Restaurant) -> Self {
        Self {
            restaurant,
            pizzas: None,
        }
    }

    pub fn with_pizzas(restaurant: Restaurant, pizzas: Vec<Pizza>) -> Self {
        Self {
            restaurant,
            pizzas: Some(pizzas),
        }
    }
}

impl From<Restaurant> for RestaurantView {
    fn from(restaurant: Restaurant) -> Self {
        Self::new(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palace() -> Restaurant {
        Restaurant {
            id: 1,
            name: "Pizza Palace".into(),
            address: "123 Main St".into(),
        }
    }

    fn margherita() -> Pizza {
        Pizza {
            id: 1,
            name: "Margherita".into(),
            ingredients: "Tomato sauce, Mozzarella, Basil".into(),
        }
    }

    #[test]
    fn test_plain_view_has_no_pizzas_key() {
        let json = serde_json::to_value(RestaurantView::new(palace())).unwrap();
        assert_eq!(
            json,
            json!({"id": 1, "name": "Pizza Palace", "address": "123 Main St"})
        );
    }

    #[test]
    fn test_view_with_pizzas_keeps_duplicates() {
        let view = RestaurantView::with_pizzas(palace(), vec![margherita(), margherita()]);
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["pizzas"].as_array().unwrap().len(), 2);
        assert_eq!(json["pizzas"][1]["name"], "Margherita");
    }

    #[test]
    fn test_view_with_no_offerings_is_empty_list() {
        let json = serde_json::to_value(RestaurantView::with_pizzas(palace(), vec![])).unwrap();
        assert_eq!(json["pizzas"], json!([]));
    }
}
