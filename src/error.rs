use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::{gateway::GatewayError, parser::ParseError};

const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model gateway error: {0}")]
    Upstream(#[from] GatewayError),

    #[error("Response parse error: {0}")]
    Parse(#[from] ParseError),

    /// A server-side failure paired with the message the client gets to see
    #[error("{message} ({source})")]
    Generation {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Replaces the client-facing message of a server-side failure
    ///
    /// Validation errors already carry a specific message and pass through.
    pub fn with_public_message(self, message: &'static str) -> Self {
        match self {
            err @ AppError::InvalidInput(_) => err,
            AppError::Generation { source, .. } => AppError::Generation { message, source },
            other => AppError::Generation {
                message,
                source: Box::new(other),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Parse(_) | AppError::Generation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidInput(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                msg.clone()
            }
            AppError::Generation { message, source } => {
                tracing::error!(error = %source, "Request failed");
                message.to_string()
            }
            AppError::Upstream(_) | AppError::Parse(_) => {
                tracing::error!(error = %self, "Request failed");
                GENERIC_FAILURE.to_string()
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
