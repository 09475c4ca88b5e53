use crate::models::{Dish, FilterSet, IngredientList, RecipeRequest, SuggestDishesRequest};

use super::api::{ClientError, DishApi};

pub const NO_DISHES_MESSAGE: &str =
    "No dishes found with the selected ingredients and filters. Please try a different combination.";
pub const SUGGESTION_FAILURE_PREFIX: &str =
    "Something went wrong while fetching dish suggestions. Please try again later. Error: ";
pub const LOADING_RECIPE: &str = "Loading recipe...";
pub const RECIPE_MISSING: &str = "Failed to load recipe.";
pub const RECIPE_FETCH_FAILED: &str = "Could not fetch recipe. Please try again.";

/// Recipe side of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeState {
    NotLoaded,
    Loading,
    Loaded(String),
    Failed(&'static str),
}

/// A recipe fetch started by [`DishBrowser::click`]
///
/// `card_id` identifies the card that asked for it; hand it back to
/// [`DishBrowser::finish_recipe`] with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFetch {
    pub card_id: u64,
    pub request: RecipeRequest,
}

/// One flip card: a suggested dish plus the ingredients it was suggested for
#[derive(Debug, Clone)]
pub struct DishCard {
    id: u64,
    dish: Dish,
    ingredients: IngredientList,
    flipped: bool,
    recipe: RecipeState,
}

impl DishCard {
    fn new(id: u64, dish: Dish, ingredients: IngredientList) -> Self {
        Self {
            id,
            dish,
            ingredients,
            flipped: false,
            recipe: RecipeState::NotLoaded,
        }
    }

    /// Unique for the lifetime of the browser, across submissions
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn recipe(&self) -> &RecipeState {
        &self.recipe
    }

    /// Set once a non-empty recipe arrives; suppresses further fetches
    pub fn recipe_loaded(&self) -> bool {
        matches!(self.recipe, RecipeState::Loaded(_))
    }

    /// Text shown on the back of the card
    pub fn back_text(&self) -> &str {
        match &self.recipe {
            RecipeState::NotLoaded | RecipeState::Loading => LOADING_RECIPE,
            RecipeState::Loaded(recipe) => recipe,
            RecipeState::Failed(message) => message,
        }
    }

    /// Flips the card. Returns the request to send when the recipe side
    /// comes up and has neither loaded nor is already loading.
    fn click(&mut self) -> Option<RecipeRequest> {
        self.flipped = !self.flipped;
        if !self.flipped {
            return None;
        }

        match self.recipe {
            RecipeState::NotLoaded | RecipeState::Failed(_) => {
                self.recipe = RecipeState::Loading;
                Some(RecipeRequest {
                    dish_name: self.dish.name.clone(),
                    ingredients: self.ingredients.clone(),
                })
            }
            RecipeState::Loading | RecipeState::Loaded(_) => None,
        }
    }

    fn finish(&mut self, result: Result<String, ClientError>) {
        self.recipe = match result {
            Ok(recipe) if !recipe.is_empty() => RecipeState::Loaded(recipe),
            Ok(_) | Err(ClientError::MissingRecipe) => RecipeState::Failed(RECIPE_MISSING),
            Err(e) => {
                tracing::warn!(dish = %self.dish.name, error = %e, "Error fetching recipe");
                RecipeState::Failed(RECIPE_FETCH_FAILED)
            }
        };
    }
}

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet, or a submission is in flight
    Idle,
    Dishes,
    NoDishes,
    Failed(String),
}

/// Controller for the ingredient form and the card grid
///
/// Owns every piece of UI state; nothing is global, so independent browsers
/// never see each other's cards.
pub struct DishBrowser<A> {
    api: A,
    loading: bool,
    outcome: Outcome,
    cards: Vec<DishCard>,
    next_card_id: u64,
}

impl<A: DishApi> DishBrowser<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loading: false,
            outcome: Outcome::Idle,
            cards: Vec::new(),
            next_card_id: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn cards(&self) -> &[DishCard] {
        &self.cards
    }

    /// Validates the form and clears the results area
    ///
    /// Blank input is refused with [`ClientError::NoIngredients`], whose
    /// message is the alert shown to the user; state is left untouched.
    pub fn begin_submit(
        &mut self,
        raw_ingredients: &str,
        filters: FilterSet,
    ) -> Result<SuggestDishesRequest, ClientError> {
        let ingredients = IngredientList::parse(raw_ingredients);
        if ingredients.is_empty() {
            return Err(ClientError::NoIngredients);
        }

        self.loading = true;
        self.outcome = Outcome::Idle;
        self.cards.clear();

        Ok(SuggestDishesRequest {
            ingredients,
            filters,
        })
    }

    /// Applies the suggestion response to the results area
    pub fn finish_submit(
        &mut self,
        request: &SuggestDishesRequest,
        result: Result<Vec<Dish>, ClientError>,
    ) {
        self.loading = false;

        match result {
            Ok(dishes) if dishes.is_empty() => {
                self.outcome = Outcome::NoDishes;
            }
            Ok(dishes) => {
                let first_id = self.next_card_id;
                self.next_card_id += dishes.len() as u64;
                self.cards = dishes
                    .into_iter()
                    .zip(first_id..)
                    .map(|(dish, id)| DishCard::new(id, dish, request.ingredients.clone()))
                    .collect();
                self.outcome = Outcome::Dishes;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching dish suggestions");
                self.outcome = Outcome::Failed(format!("{}{}", SUGGESTION_FAILURE_PREFIX, e));
            }
        }
    }

    /// Submits the form and waits for suggestions
    ///
    /// Only input validation is returned as an error; request failures end up
    /// in [`DishBrowser::outcome`].
    pub async fn submit(
        &mut self,
        raw_ingredients: &str,
        filters: FilterSet,
    ) -> Result<(), ClientError> {
        let request = self.begin_submit(raw_ingredients, filters)?;
        let result = self.api.suggest_dishes(&request).await;
        self.finish_submit(&request, result);
        Ok(())
    }

    /// Flips card `index`, returning the fetch to start if one is needed
    pub fn click(&mut self, index: usize) -> Option<RecipeFetch> {
        let Some(card) = self.cards.get_mut(index) else {
            tracing::debug!(index, cards = self.cards.len(), "Ignoring click on missing card");
            return None;
        };

        let card_id = card.id;
        card.click().map(|request| RecipeFetch { card_id, request })
    }

    /// Records the outcome of a recipe fetch started by [`DishBrowser::click`]
    ///
    /// The result goes to the card with `card_id`, and only while that card is
    /// still waiting. Results for cards dropped by a later submission are
    /// discarded.
    pub fn finish_recipe(&mut self, card_id: u64, result: Result<String, ClientError>) {
        match self.cards.iter_mut().find(|card| card.id == card_id) {
            Some(card) if card.recipe == RecipeState::Loading => card.finish(result),
            Some(_) => {}
            None => tracing::debug!(card_id, "Discarding recipe for a replaced card"),
        }
    }

    /// Clicks card `index` and, when that starts a fetch, waits for the recipe
    pub async fn open_card(&mut self, index: usize) {
        if let Some(fetch) = self.click(index) {
            let result = self.api.get_recipe(&fetch.request).await;
            self.finish_recipe(fetch.card_id, result);
        }
    }
}
