//! Pizza Model

use serde::{Deserialize, Serialize};

/// Pizza entity
///
/// Serializes as `{id, name, ingredients}` with no nested data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Create pizza payload (seeding only, no HTTP endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaCreate {
    pub name: String,
    pub ingredients: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let pizza = Pizza {
            id: 1,
            name: "Margherita".into(),
            ingredients: "Tomato sauce, Mozzarella, Basil".into(),
        };
        assert_eq!(
            serde_json::to_value(&pizza).unwrap(),
            serde_json::json!({
                "id": 1,
                "name": "Margherita",
                "ingredients": "Tomato sauce, Mozzarella, Basil"
            })
        );
    }
}
