use crate::{
    error::{AppError, AppResult},
    models::{Dish, SuggestDishesRequest},
    services::{gateway::ModelGateway, parser, prompts},
};

pub const MISSING_INGREDIENTS: &str = "Ingredients are required.";

/// Asks the model for dishes that can be made from the requested ingredients
///
/// Rejects an empty ingredient list before the model is contacted.
pub async fn suggest_dishes(
    gateway: &dyn ModelGateway,
    request: &SuggestDishesRequest,
) -> AppResult<Vec<Dish>> {
    if request.ingredients.is_empty() {
        return Err(AppError::InvalidInput(MISSING_INGREDIENTS.to_string()));
    }

    let prompt = prompts::build_suggestion_prompt(&request.ingredients, &request.filters);
    let text = gateway.generate(&prompt).await?;
    let dishes = parser::parse_dishes(&text)?;

    tracing::info!(
        ingredient_count = request.ingredients.len(),
        dish_count = dishes.len(),
        "Dish suggestions generated"
    );

    Ok(dishes)
}
