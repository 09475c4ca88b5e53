pub mod gateway;
pub mod parser;
pub mod prompts;
pub mod recipes;
pub mod suggestions;

pub use gateway::{GatewayError, GeminiGateway, ModelGateway};
