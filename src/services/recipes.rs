use crate::{
    error::{AppError, AppResult},
    models::RecipeRequest,
    services::{gateway::ModelGateway, prompts},
};

pub const MISSING_DISH_OR_INGREDIENTS: &str =
    "Dish name and ingredients are required to get a recipe.";

/// Asks the model for the full recipe of one dish
///
/// The reply is returned verbatim; recipes are free text and never parsed.
pub async fn fetch_recipe(gateway: &dyn ModelGateway, request: &RecipeRequest) -> AppResult<String> {
    let dish_name = request.dish_name.trim();
    if dish_name.is_empty() || request.ingredients.is_empty() {
        return Err(AppError::InvalidInput(
            MISSING_DISH_OR_INGREDIENTS.to_string(),
        ));
    }

    let prompt = prompts::build_recipe_prompt(dish_name, &request.ingredients);
    let recipe = gateway.generate(&prompt).await?;

    tracing::info!(
        dish = %dish_name,
        recipe_chars = recipe.len(),
        "Recipe generated"
    );

    Ok(recipe)
}
