//! Client side of the dish finder
//!
//! A typed client for the two API endpoints and the controller behind the
//! ingredient form and flip-card grid. The browser script in `public/`
//! follows the same state machine; this module lets it run without a DOM.

pub mod api;
pub mod controller;
pub mod view;

pub use api::{ClientError, DishApi, HttpDishApi};
pub use controller::{DishBrowser, DishCard, Outcome, RecipeFetch, RecipeState};
pub use view::ResultsView;
