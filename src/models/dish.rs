use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A dish suggested by the model
///
/// The model gives no schema guarantees, so every field is optional on the
/// way in: missing or null fields become empty strings and numbers are kept
/// as their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time_required: String,
}

impl Dish {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Response body of the suggestion endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishList {
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl From<Vec<Dish>> for DishList {
    fn from(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_deserialization() {
        let json = r#"{
            "name": "Pancakes",
            "description": "Fluffy breakfast",
            "difficulty": "Easy",
            "cuisine": "American",
            "timeRequired": "20 mins"
        }"#;

        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.name, "Pancakes");
        assert_eq!(dish.time_required, "20 mins");
    }

    #[test]
    fn test_dish_tolerates_missing_and_numeric_fields() {
        let dish: Dish =
            serde_json::from_str(r#"{"name": "Omelette", "timeRequired": 10, "cuisine": null}"#)
                .unwrap();
        assert_eq!(dish.name, "Omelette");
        assert_eq!(dish.description, "");
        assert_eq!(dish.cuisine, "");
        assert_eq!(dish.time_required, "10");
    }

    #[test]
    fn test_dish_serializes_camel_case() {
        let json = serde_json::to_value(Dish::named("Soup")).unwrap();
        assert_eq!(json["name"], "Soup");
        assert!(json.get("timeRequired").is_some());
        assert!(json.get("time_required").is_none());
    }

    #[test]
    fn test_dish_list_missing_key_is_empty() {
        let list: DishList = serde_json::from_str("{}").unwrap();
        assert!(list.dishes.is_empty());
    }
}
