use serde::{Deserialize, Serialize};

pub mod dish;
pub mod filters;
pub mod ingredients;

pub use dish::{Dish, DishList};
pub use filters::{Filter, FilterSet};
pub use ingredients::IngredientList;

/// Request body of `POST /api/suggest-dishes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestDishesRequest {
    #[serde(default)]
    pub ingredients: IngredientList,
    #[serde(flatten)]
    pub filters: FilterSet,
}

/// Request body of `POST /api/get-recipe`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub ingredients: IngredientList,
}

/// Response body of `POST /api/get-recipe`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResponse {
    #[serde(default)]
    pub recipe: String,
}
