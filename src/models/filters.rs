use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Wire value meaning "no constraint"
pub const ANY_FILTER: &str = "all";

/// One user preference. `"all"`, blank and missing values all mean [`Filter::Any`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Filter {
    #[default]
    Any,
    Only(String),
}

impl Filter {
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(Some(value.into()))
    }

    /// The constrained value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Filter::Any => None,
            Filter::Only(value) => Some(value),
        }
    }
}

impl From<Option<String>> for Filter {
    fn from(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() && !v.eq_ignore_ascii_case(ANY_FILTER) => Filter::Only(v),
            _ => Filter::Any,
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Any => write!(f, "{}", ANY_FILTER),
            Filter::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Difficulty, cuisine and time preferences sent with a suggestion request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default)]
    pub difficulty: Filter,
    #[serde(default)]
    pub cuisine: Filter,
    #[serde(default)]
    pub time_required: Filter,
}

impl FilterSet {
    /// Constrained filters as `(label, value)` pairs, in a fixed order
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        [
            ("Difficulty", &self.difficulty),
            ("Cuisine", &self.cuisine),
            ("Time required", &self.time_required),
        ]
        .into_iter()
        .filter_map(|(label, filter)| filter.value().map(|value| (label, value)))
        .collect()
    }
}
