use serde_json::Value;
use std::fmt::Display;

use crate::models::{Dish, DishList};

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Which part of the model's reply was parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAttempt {
    /// The interior of a fenced json block
    FencedBlock,
    /// The whole reply
    WholeText,
}

impl Display for ParseAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseAttempt::FencedBlock => write!(f, "fenced json block"),
            ParseAttempt::WholeText => write!(f, "whole response"),
        }
    }
}

/// The model's reply did not contain the JSON we asked for
#[derive(thiserror::Error, Debug)]
#[error("Invalid JSON in {attempt}: {message}")]
pub struct ParseError {
    pub attempt: ParseAttempt,
    pub message: String,
}

/// Returns the interior of the first fenced json block, if the text has one
fn extract_fenced_json(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let len = text[start..].find(FENCE_CLOSE)?;
    Some(text[start..start + len].trim())
}

/// Extracts the suggested dishes from the model's reply
///
/// A fenced json block takes precedence; when one exists only its interior is
/// parsed. Otherwise the whole reply must be JSON. Both `{"dishes": [...]}`
/// and a bare array are accepted.
pub fn parse_dishes(raw: &str) -> Result<Vec<Dish>, ParseError> {
    let (attempt, candidate) = match extract_fenced_json(raw) {
        Some(block) => (ParseAttempt::FencedBlock, block),
        None => (ParseAttempt::WholeText, raw.trim()),
    };

    let fail = |e: serde_json::Error| {
        tracing::error!(
            attempt = %attempt,
            error = %e,
            response = %raw,
            "Failed to parse dishes from model response"
        );
        ParseError {
            attempt,
            message: e.to_string(),
        }
    };

    // Top-level shape picks the target type
    let value: Value = serde_json::from_str(candidate).map_err(fail)?;
    match value {
        Value::Array(_) => serde_json::from_value::<Vec<Dish>>(value),
        other => serde_json::from_value::<DishList>(other).map(|list| list.dishes),
    }
    .map_err(fail)
}
