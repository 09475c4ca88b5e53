#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dish_finder::api::{create_router, AppState};
use dish_finder::services::{GatewayError, ModelGateway};

pub const PANCAKES_JSON: &str = r#"{"dishes":[{"name":"Pancakes","description":"Fluffy breakfast","difficulty":"Easy","cuisine":"American","timeRequired":"20 mins"}]}"#;

/// Gateway returning canned replies chosen by prompt substring, recording every prompt
#[derive(Default)]
pub struct StubGateway {
    replies: Vec<(String, Result<String, String>)>,
    prompts: Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies with `text` to prompts containing `pattern`
    pub fn reply(mut self, pattern: &str, text: &str) -> Self {
        self.replies.push((pattern.to_string(), Ok(text.to_string())));
        self
    }

    /// Fails prompts containing `pattern`
    pub fn fail(mut self, pattern: &str, message: &str) -> Self {
        self.replies
            .push((pattern.to_string(), Err(message.to_string())));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ModelGateway for StubGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self
            .replies
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GatewayError::Request {
                provider: "stub",
                message,
            }),
            None => Err(GatewayError::EmptyResponse { provider: "stub" }),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn static_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/public")
}

pub fn create_app(gateway: Arc<StubGateway>) -> axum::Router {
    create_router(AppState::new(gateway, static_dir()))
}
