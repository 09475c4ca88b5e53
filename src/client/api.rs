use reqwest::Client as HttpClient;

use crate::models::{Dish, DishList, RecipeRequest, RecipeResponse, SuggestDishesRequest};

/// Failures seen by the UI
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Please enter at least one ingredient.")]
    NoIngredients,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("Response did not contain a recipe")]
    MissingRecipe,
}

/// The two calls the browser makes against the server
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DishApi: Send + Sync {
    async fn suggest_dishes(&self, request: &SuggestDishesRequest) -> Result<Vec<Dish>, ClientError>;

    /// Returns the recipe text; an empty recipe is [`ClientError::MissingRecipe`]
    async fn get_recipe(&self, request: &RecipeRequest) -> Result<String, ClientError>;
}

/// [`DishApi`] over HTTP against a running server
#[derive(Debug, Clone)]
pub struct HttpDishApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpDishApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http_client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl DishApi for HttpDishApi {
    async fn suggest_dishes(&self, request: &SuggestDishesRequest) -> Result<Vec<Dish>, ClientError> {
        let list: DishList = self.post("/api/suggest-dishes", request).await?;
        Ok(list.dishes)
    }

    async fn get_recipe(&self, request: &RecipeRequest) -> Result<String, ClientError> {
        let response: RecipeResponse = self.post("/api/get-recipe", request).await?;
        if response.recipe.is_empty() {
            return Err(ClientError::MissingRecipe);
        }
        Ok(response.recipe)
    }
}
