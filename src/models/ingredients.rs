use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Ordered list of trimmed, non-empty ingredient names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    /// Parses a comma-separated string as typed by the user
    pub fn parse(raw: &str) -> Self {
        Self::from_items(raw.split(','))
    }

    /// Builds a list from arbitrary items, trimming each and dropping blanks
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The list as it is embedded in prompts: `"egg, flour, milk"`
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for IngredientList {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}

impl From<IngredientList> for Vec<String> {
    fn from(list: IngredientList) -> Self {
        list.0
    }
}

impl Display for IngredientList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined())
    }
}
