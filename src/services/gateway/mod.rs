//! Generative model abstraction
//!
//! Everything the service knows about dishes and recipes comes from a
//! text-completion model. This module hides that model behind a single
//! capability, `generate(prompt) -> text`, so handlers can be driven by a
//! mock in tests and the backend can be swapped without touching them.
pub mod gemini;

pub use gemini::GeminiGateway;

/// Failure talking to the model backend
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("{provider} is not configured: {message}")]
    NotConfigured {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} request failed: {message}")]
    Request {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} API returned status {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} returned an unreadable response: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned no text")]
    EmptyResponse { provider: &'static str },
}

/// Trait for text-generation backends
///
/// Implementations are stateless between calls and safe to share across
/// request handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ModelGateway: Send + Sync {
    /// Sends a prompt and returns the model's reply text
    ///
    /// A reply with no text is an error, never an empty `Ok`.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
