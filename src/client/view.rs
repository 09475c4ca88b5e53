use askama::Template;

use super::api::DishApi;
use super::controller::{DishBrowser, DishCard, Outcome, NO_DISHES_MESSAGE};

/// One card as the template sees it
pub struct CardView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub difficulty: &'a str,
    pub cuisine: &'a str,
    pub time_required: &'a str,
    pub flipped: bool,
    pub recipe: &'a str,
}

impl<'a> From<&'a DishCard> for CardView<'a> {
    fn from(card: &'a DishCard) -> Self {
        let dish = card.dish();
        Self {
            name: &dish.name,
            description: &dish.description,
            difficulty: &dish.difficulty,
            cuisine: &dish.cuisine,
            time_required: &dish.time_required,
            flipped: card.is_flipped(),
            recipe: card.back_text(),
        }
    }
}

/// The results area: spinner, message or card grid. Model text is escaped.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsView<'a> {
    pub loading: bool,
    pub message: Option<&'a str>,
    pub cards: Vec<CardView<'a>>,
}

impl<A: DishApi> DishBrowser<A> {
    pub fn view(&self) -> ResultsView<'_> {
        let message = match self.outcome() {
            Outcome::NoDishes => Some(NO_DISHES_MESSAGE),
            Outcome::Failed(message) => Some(message.as_str()),
            Outcome::Idle | Outcome::Dishes => None,
        };

        ResultsView {
            loading: self.is_loading(),
            message,
            cards: self.cards().iter().map(CardView::from).collect(),
        }
    }

    /// Renders the results area as HTML
    pub fn render(&self) -> askama::Result<String> {
        self.view().render()
    }
}
