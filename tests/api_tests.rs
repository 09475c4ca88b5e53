mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use common::{create_app, StubGateway, PANCAKES_JSON};

const SUGGESTION_PROMPT: &str = "suggest 10 distinct";
const RECIPE_PROMPT: &str = "step-by-step recipe";

fn create_test_server(gateway: Arc<StubGateway>) -> TestServer {
    TestServer::new(create_app(gateway)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(Arc::new(StubGateway::new()));
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_suggest_dishes_returns_parsed_dishes() {
    let gateway = Arc::new(StubGateway::new().reply(SUGGESTION_PROMPT, PANCAKES_JSON));
    let server = create_test_server(gateway.clone());

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({
            "ingredients": ["egg", "flour"],
            "difficulty": "Easy",
            "cuisine": "all",
            "timeRequired": "all"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["dishes"].as_array().unwrap().len(), 1);
    assert_eq!(body["dishes"][0]["name"], "Pancakes");
    assert_eq!(body["dishes"][0]["timeRequired"], "20 mins");

    let prompts = gateway.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("egg, flour"));
    assert!(prompts[0].contains("Difficulty: Easy"));
    assert!(!prompts[0].contains("Cuisine:"));
}

#[tokio::test]
async fn test_suggest_dishes_accepts_fenced_reply() {
    let fenced = format!("```json\n{}\n```", PANCAKES_JSON);
    let gateway = Arc::new(StubGateway::new().reply(SUGGESTION_PROMPT, &fenced));
    let server = create_test_server(gateway);

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "ingredients": ["egg", "flour"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["dishes"][0]["name"], "Pancakes");
}

#[tokio::test]
async fn test_suggest_dishes_empty_result() {
    let gateway = Arc::new(StubGateway::new().reply(SUGGESTION_PROMPT, r#"{"dishes": []}"#));
    let server = create_test_server(gateway);

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "ingredients": ["gravel"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "dishes": [] }));
}

#[tokio::test]
async fn test_suggest_dishes_without_ingredients_is_bad_request() {
    let gateway = Arc::new(StubGateway::new().reply(SUGGESTION_PROMPT, PANCAKES_JSON));
    let server = create_test_server(gateway.clone());

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "ingredients": [] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Ingredients are required.");

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "difficulty": "Easy" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_suggest_dishes_unparseable_reply_is_server_error() {
    let gateway = Arc::new(StubGateway::new().reply(SUGGESTION_PROMPT, "Sorry, I can't help"));
    let server = create_test_server(gateway);

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "ingredients": ["egg"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to generate dish suggestions. Please try again later."
    );
}

#[tokio::test]
async fn test_suggest_dishes_gateway_failure_is_server_error() {
    let gateway = Arc::new(StubGateway::new().fail(SUGGESTION_PROMPT, "connection reset"));
    let server = create_test_server(gateway);

    let response = server
        .post("/api/suggest-dishes")
        .json(&json!({ "ingredients": ["egg"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(!body["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let gateway = Arc::new(StubGateway::new());
    let server = create_test_server(gateway.clone());

    let response = server.post("/api/suggest-dishes").text("ingredients=egg").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_get_recipe_returns_text_verbatim() {
    let recipe = "**Pancakes**\n\n**Ingredients:**\n* 2 eggs\n\n**Instructions:**\n1. Whisk.";
    let gateway = Arc::new(StubGateway::new().reply(RECIPE_PROMPT, recipe));
    let server = create_test_server(gateway.clone());

    let response = server
        .post("/api/get-recipe")
        .json(&json!({ "dishName": "Pancakes", "ingredients": ["egg", "flour"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recipe"], recipe);

    let prompts = gateway.prompts();
    assert!(prompts[0].contains(r#""Pancakes""#));
    assert!(prompts[0].contains("egg, flour"));
}

#[tokio::test]
async fn test_get_recipe_without_dish_name_is_bad_request() {
    let gateway = Arc::new(StubGateway::new().reply(RECIPE_PROMPT, "recipe"));
    let server = create_test_server(gateway.clone());

    let response = server
        .post("/api/get-recipe")
        .json(&json!({ "ingredients": ["egg"] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Dish name and ingredients are required to get a recipe."
    );

    let response = server
        .post("/api/get-recipe")
        .json(&json!({ "dishName": "Pancakes", "ingredients": [] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_get_recipe_gateway_failure_is_server_error() {
    let gateway = Arc::new(StubGateway::new().fail(RECIPE_PROMPT, "timeout"));
    let server = create_test_server(gateway);

    let response = server
        .post("/api/get-recipe")
        .json(&json!({ "dishName": "Pancakes", "ingredients": ["egg"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to generate recipe. Please try again later.");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server(Arc::new(StubGateway::new()));

    let id = "6f1c1c6e-2d8b-4c53-9a7e-3f8e2f1f0a11";
    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(id),
        )
        .await;
    assert_eq!(response.header("x-request-id"), id);

    let response = server.get("/health").await;
    let generated = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_serves_browser_ui() {
    let server = create_test_server(Arc::new(StubGateway::new()));

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("ingredients-input"));

    let response = server.get("/script.js").await;
    response.assert_status_ok();
    assert!(response.text().contains("/api/get-recipe"));
}
