use crate::models::{FilterSet, IngredientList};

/// Number of dishes requested per suggestion
pub const SUGGESTION_COUNT: usize = 10;

/// Builds the prompt asking the model for dish suggestions
///
/// Ingredients and filter values are interpolated as-is; nothing is escaped.
/// Filters set to "all" are left out entirely.
pub fn build_suggestion_prompt(ingredients: &IngredientList, filters: &FilterSet) -> String {
    let active = filters.active();
    let preferences = if active.is_empty() {
        "- None. Any difficulty, cuisine and cooking time is acceptable.".to_string()
    } else {
        active
            .iter()
            .map(|(label, value)| format!("- {}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are a culinary assistant. Study the ingredient list below and suggest {count} distinct, realistic dishes.

For every dish give:
- "name": the name of the dish.
- "description": one short sentence describing it.
- "difficulty": one of Easy, Medium or Hard.
- "cuisine": the cuisine it belongs to, such as Italian, Mexican or Asian.
- "timeRequired": the estimated total time, such as "30 mins" or "1 hour".

Rules:
1. JSON only. Reply with nothing but a JSON object with a single key "dishes" whose value is an array of dish objects. No prose, no markdown.
2. Stay with the ingredients. Base every dish on the listed ingredients. Do not suggest dishes that need unlisted items other than common pantry staples.
3. Preferences. When preferences are listed, favour dishes that match them.
4. Nothing fits. If the ingredients are nonsensical, too limited for any dish, or cannot satisfy the preferences, reply with {{"dishes": []}}.

Preferences:
{preferences}

Ingredients:
{ingredients}
"#,
        count = SUGGESTION_COUNT,
        preferences = preferences,
        ingredients = ingredients.joined(),
    )
}

/// Builds the prompt asking the model for one dish's full recipe
///
/// The reply is plain text and is passed to the client untouched.
pub fn build_recipe_prompt(dish_name: &str, ingredients: &IngredientList) -> String {
    format!(
        r#"Write a detailed, step-by-step recipe for "{dish_name}" using these ingredients: {ingredients}.

Structure:
- Title: the dish name in bold.
- Ingredients: a bulleted list with suggested quantities.
- Instructions: clear, numbered steps.
- Notes: preparation and cooking time, and serving suggestions.

Rules:
1. Plain text only. Reply with the recipe text and never use JSON.
2. Thin ingredient lists. If the dish needs more than what is listed, say that common pantry staples such as oil, salt and pepper are assumed, or suggest substitutions.
3. Impossible requests. If the dish name does not describe food, reply with a short, polite note that no recipe can be written from the given information.

Example:
**Classic Pasta with Tomato Sauce**

**Ingredients:**
* 200g spaghetti
* 1 can (400g) crushed tomatoes
* 2 cloves garlic, minced
* 1 tbsp olive oil
* Salt and pepper to taste

**Instructions:**
1. Cook the pasta according to the package directions.
2. ...

**Notes:**
* Prep time: 5 mins, Cook time: 15 mins
* Serves 2.
"#,
        dish_name = dish_name,
        ingredients = ingredients.joined(),
    )
}
