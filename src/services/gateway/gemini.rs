//! Google Gemini gateway
//!
//! Calls the non-streaming `generateContent` endpoint of the Generative
//! Language API and returns the text of the first candidate.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::{GatewayError, ModelGateway};

const PROVIDER: &str = "Gemini";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GeminiGateway {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGateway {
    /// Creates a gateway whose calls give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Request {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }

    /// Joins the text parts of the first candidate
    fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse { provider: PROVIDER });
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if self.api_key.trim().is_empty() {
            return Err(GatewayError::NotConfigured {
                provider: PROVIDER,
                message: "GEMINI_API_KEY is not set".to_string(),
            });
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Request {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GatewayError::Request {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GatewayError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %body,
                "Failed to deserialize Gemini response"
            );
            GatewayError::InvalidResponse {
                provider: PROVIDER,
                message: e.to_string(),
            }
        })?;

        let text = Self::extract_text(parsed)?;

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            response_chars = text.len(),
            "Gemini generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
