use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use httpmock::prelude::*;
use serde_json::{Value, json};

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

fn test_server(gemini_base_url: &str) -> TestServer {
    let args = Args::parse_from([
        "ferriskitchen",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        gemini_base_url,
        "--llm-timeout-seconds",
        "5",
    ]);
    let app_state = state(Arc::new(args)).expect("state");
    let router = router(app_state).expect("router");

    TestServer::new(router).expect("test server")
}

fn recipe(name: &str) -> Value {
    json!({
        "recipeName": name,
        "description": "Comforting and simple.",
        "ingredients": ["1 lb chicken thighs", "1 cup jasmine rice", "2 tbsp olive oil", "salt"],
        "instructions": ["Rinse the rice.", "Brown the chicken.", "Simmer together for 20 minutes."],
        "servings": "4",
        "prepTime": "35 minutes"
    })
}

fn gemini_answer(text: String) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

async fn add(server: &TestServer, name: &str) -> Value {
    server
        .post("/kitchen/ingredients")
        .json(&json!({ "name": name }))
        .await
        .json::<Value>()
}

#[tokio::test]
async fn test_ingredients_are_deduplicated_case_insensitively() {
    let server = test_server("http://127.0.0.1:1");

    let response = server
        .post("/kitchen/ingredients")
        .json(&json!({ "name": " Chicken " }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .post("/kitchen/ingredients")
        .json(&json!({ "name": "chicken" }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["added"], false);
    assert_eq!(body["data"]["ingredients"], json!(["Chicken"]));
    assert_eq!(body["data"]["status"], json!({ "state": "idle" }));
}

#[tokio::test]
async fn test_empty_name_is_rejected_by_validation() {
    let server = test_server("http://127.0.0.1:1");

    let response = server
        .post("/kitchen/ingredients")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
}

#[tokio::test]
async fn test_remove_ingredient_by_position() {
    let server = test_server("http://127.0.0.1:1");
    add(&server, "Chicken").await;
    add(&server, "Rice").await;
    add(&server, "Garlic").await;

    let body = server
        .delete("/kitchen/ingredients/1")
        .await
        .json::<Value>();
    assert_eq!(body["removed"], "Rice");
    assert_eq!(body["data"]["ingredients"], json!(["Chicken", "Garlic"]));

    let body = server
        .delete("/kitchen/ingredients/7")
        .await
        .json::<Value>();
    assert_eq!(body["removed"], Value::Null);
    assert_eq!(body["data"]["ingredients"], json!(["Chicken", "Garlic"]));
}

#[tokio::test]
async fn test_generate_without_ingredients_stays_idle() {
    // Nothing listens on this port, so any outbound call would fail the generation.
    let server = test_server("http://127.0.0.1:1");

    let response = server.post("/kitchen/recipes").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"]["status"],
        json!({ "state": "idle" })
    );
}

#[tokio::test]
async fn test_generate_returns_recipes_in_order() {
    let gemini = MockServer::start_async().await;
    let recipes = json!([recipe("Chicken Fried Rice"), recipe("Chicken and Rice Soup")]);
    let mock = gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-2.5-flash:generateContent")
                .header("x-goog-api-key", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(gemini_answer(recipes.to_string()));
        })
        .await;

    let server = test_server(&gemini.base_url());
    add(&server, "Chicken").await;
    add(&server, "Rice").await;

    let response = server.post("/kitchen/recipes").await;

    mock.assert_async().await;
    response.assert_status_ok();
    let status = &response.json::<Value>()["data"]["status"];
    assert_eq!(status["state"], "ready");
    assert_eq!(status["recipes"], recipes);

    let snapshot = server.get("/kitchen").await.json::<Value>();
    assert_eq!(snapshot["data"]["status"]["recipes"], recipes);
}

#[tokio::test]
async fn test_generation_failure_is_reported_in_status() {
    let gemini = MockServer::start_async().await;
    gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("internal error");
        })
        .await;

    let server = test_server(&gemini.base_url());
    add(&server, "Tofu").await;

    let response = server.post("/kitchen/recipes").await;

    response.assert_status_ok();
    let status = &response.json::<Value>()["data"]["status"];
    assert_eq!(status["state"], "failed");
    let message = status["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to generate recipes:"), "{message}");
    assert!(message.contains("500"), "{message}");
}

#[tokio::test]
async fn test_incomplete_recipe_is_reported_as_failure() {
    let gemini = MockServer::start_async().await;
    let mut incomplete = recipe("No Time");
    incomplete.as_object_mut().unwrap().remove("prepTime");
    let answer = gemini_answer(json!([incomplete]).to_string());
    gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(answer);
        })
        .await;

    let server = test_server(&gemini.base_url());
    add(&server, "Eggs").await;

    let status = server.post("/kitchen/recipes").await.json::<Value>()["data"]["status"].clone();

    assert_eq!(status["state"], "failed");
    assert!(status.get("recipes").is_none());
    assert!(status["message"].as_str().unwrap().contains("prepTime"));
}
