//! Restaurant Pizza Model
//!
//! Join entity linking one restaurant and one pizza at a price.

use serde::{Deserialize, Serialize};

use super::{Pizza, Restaurant};

/// Restaurant pizza entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Create restaurant pizza payload, as received over HTTP
///
/// Every field is optional here; presence is checked by
/// [`RestaurantPizzaCreate::required_fields`] and the price range by
/// `validation::validate_price`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantPizzaCreate {
    pub price: Option<i64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

impl RestaurantPizzaCreate {
    /// Returns `(price, pizza_id, restaurant_id)` when the required fields are present.
    ///
    /// `price` and `pizza_id` must be non-zero; `restaurant_id` only has to be
    /// non-null, so `restaurant_id: 0` passes here and fails the lookup later.
    pub fn required_fields(&self) -> Option<(i64, i64, i64)> {
        let price = self.price.filter(|p| *p != 0)?;
        let pizza_id = self.pizza_id.filter(|id| *id != 0)?;
        let restaurant_id = self.restaurant_id?;
        Some((price, pizza_id, restaurant_id))
    }
}

/// Parents nested into a full restaurant pizza view
///
/// A parent that cannot be resolved serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaParents {
    pub pizza: Option<Pizza>,
    pub restaurant: Option<Restaurant>,
}

/// Restaurant pizza as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaView {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    #[serde(flatten)]
    pub parents: Option<RestaurantPizzaParents>,
}

impl RestaurantPizzaView {
    pub fn new(restaurant_pizza: RestaurantPizza) -> Self {
        Self {
            restaurant_pizza,
            parents: None,
        }
    }

    /// Full view: nested pizza and restaurant (the restaurant without its pizzas).
    pub fn with_parents(
        restaurant_pizza: RestaurantPizza,
        pizza: Option<Pizza>,
        restaurant: Option<Restaurant>,
    ) -> Self {
        Self {
            restaurant_pizza,
            parents: Some(RestaurantPizzaParents { pizza, restaurant }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offering() -> RestaurantPizza {
        RestaurantPizza {
            id: 3,
            price: 12,
            pizza_id: 1,
            restaurant_id: 2,
        }
    }

    #[test]
    fn test_required_fields_present() {
        let payload = RestaurantPizzaCreate {
            price: Some(12),
            pizza_id: Some(1),
            restaurant_id: Some(1),
        };
        assert_eq!(payload.required_fields(), Some((12, 1, 1)));
    }

    #[test]
    fn test_required_fields_zero_price_is_missing() {
        let payload = RestaurantPizzaCreate {
            price: Some(0),
            pizza_id: Some(1),
            restaurant_id: Some(1),
        };
        assert_eq!(payload.required_fields(), None);
    }

    #[test]
    fn test_required_fields_zero_pizza_id_is_missing() {
        let payload = RestaurantPizzaCreate {
            price: Some(5),
            pizza_id: Some(0),
            restaurant_id: Some(1),
        };
        assert_eq!(payload.required_fields(), None);
    }

    #[test]
    fn test_required_fields_zero_restaurant_id_is_present() {
        let payload = RestaurantPizzaCreate {
            price: Some(5),
            pizza_id: Some(1),
            restaurant_id: Some(0),
        };
        assert_eq!(payload.required_fields(), Some((5, 1, 0)));
    }

    #[test]
    fn test_required_fields_null_restaurant_id_is_missing() {
        let payload: RestaurantPizzaCreate =
            serde_json::from_value(json!({"price": 5, "pizza_id": 1, "restaurant_id": null}))
                .unwrap();
        assert_eq!(payload.required_fields(), None);
    }

    #[test]
    fn test_negative_price_passes_presence() {
        let payload = RestaurantPizzaCreate {
            price: Some(-3),
            pizza_id: Some(1),
            restaurant_id: Some(1),
        };
        assert_eq!(payload.required_fields(), Some((-3, 1, 1)));
    }

    #[test]
    fn test_plain_view() {
        let json = serde_json::to_value(RestaurantPizzaView::new(offering())).unwrap();
        assert_eq!(
            json,
            json!({"id": 3, "price": 12, "pizza_id": 1, "restaurant_id": 2})
        );
    }

    #[test]
    fn test_full_view_with_unresolved_parents_is_null() {
        let json =
            serde_json::to_value(RestaurantPizzaView::with_parents(offering(), None, None))
                .unwrap();
        assert_eq!(
            json,
            json!({
                "id": 3,
                "price": 12,
                "pizza_id": 1,
                "restaurant_id": 2,
                "pizza": null,
                "restaurant": null
            })
        );
    }

    #[test]
    fn test_full_view_nests_parents() {
        let pizza = Pizza {
            id: 1,
            name: "Margherita".into(),
            ingredients: "Tomato sauce, Mozzarella, Basil".into(),
        };
        let restaurant = Restaurant {
            id: 2,
            name: "Dominic's Pizza".into(),
            address: "456 Oak Ave".into(),
        };
        let view = RestaurantPizzaView::with_parents(
            offering(),
            Some(pizza.clone()),
            Some(restaurant.clone()),
        );
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["pizza"], serde_json::to_value(&pizza).unwrap());
        assert_eq!(json["restaurant"], serde_json::to_value(&restaurant).unwrap());
        assert!(json["restaurant"].get("pizzas").is_none());
    }
}
