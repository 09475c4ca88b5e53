use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{DishList, RecipeRequest, RecipeResponse, SuggestDishesRequest},
    services::{recipes, suggestions},
};

use super::AppState;

const SUGGESTION_FAILURE: &str = "Failed to generate dish suggestions. Please try again later.";
const RECIPE_FAILURE: &str = "Failed to generate recipe. Please try again later.";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Suggest dishes for a list of ingredients and optional filters
pub async fn suggest_dishes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SuggestDishesRequest>, JsonRejection>,
) -> AppResult<Json<DishList>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        ingredient_count = request.ingredients.len(),
        difficulty = %request.filters.difficulty,
        cuisine = %request.filters.cuisine,
        time_required = %request.filters.time_required,
        "Processing dish suggestion request"
    );

    let dishes = suggestions::suggest_dishes(state.gateway.as_ref(), &request)
        .await
        .map_err(|e| e.with_public_message(SUGGESTION_FAILURE))?;

    Ok(Json(DishList::from(dishes)))
}

/// Generate the full recipe for one suggested dish
pub async fn get_recipe(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> AppResult<Json<RecipeResponse>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        dish = %request.dish_name,
        ingredient_count = request.ingredients.len(),
        "Processing recipe request"
    );

    let recipe = recipes::fetch_recipe(state.gateway.as_ref(), &request)
        .await
        .map_err(|e| e.with_public_message(RECIPE_FAILURE))?;

    Ok(Json(RecipeResponse { recipe }))
}
