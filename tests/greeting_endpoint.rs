//! End-to-end tests for the greeting endpoint.

use std::time::Duration;

use greeting_service::http::{GreetingClient, X_REQUEST_ID};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_greets_the_survivor() {
    let service = common::start_service(|_| {}).await;
    let client = common::client();

    let res = client.get(service.url("/greeting/John/Bob")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key(X_REQUEST_ID));
    assert_eq!(res.text().await.unwrap(), "Hello, Bob");

    let res = client.get(service.url("/greeting/Alice/John")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello, Alice");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_arity_failures_are_server_errors() {
    let service = common::start_service(|_| {}).await;
    let client = common::client();

    let res = client.get(service.url("/greeting/John/John")).send().await.unwrap();
    assert_eq!(res.status(), 500);
    let request_id = res.headers()[X_REQUEST_ID].to_str().unwrap().to_string();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "expected exactly one surviving name, found 0");
    assert_eq!(body["request_id"], request_id.as_str());
    assert_eq!(
        body["checkpoints"],
        serde_json::json!(["After transformation", "After joining"])
    );

    let res = client.get(service.url("/greeting/Alice/Bob")).send().await.unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "expected exactly one surviving name, found 2");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_names_with_reserved_characters() {
    let service = common::start_service(|_| {}).await;
    let client = GreetingClient::with_client(common::client(), service.url(""));

    for (first, last, expected) in [
        ("Mary?", "John", "Hello, Mary?"),
        ("John", "A/B", "Hello, A/B"),
        ("Zoë #1", "John", "Hello, Zoë #1"),
        ("John", "50%", "Hello, 50%"),
    ] {
        let (status, body) = client.greet(first, last).await.unwrap();
        assert_eq!(status, 200, "{} / {}", first, last);
        assert_eq!(body, expected);
    }

    let (status, _) = client.greet("Mary?", "Bob").await.unwrap();
    assert_eq!(status, 500);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_client_request_id_is_kept() {
    let service = common::start_service(|_| {}).await;

    let res = common::client()
        .get(service.url("/greeting/Alice/Bob"))
        .header(X_REQUEST_ID, "test-req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[X_REQUEST_ID], "test-req-42");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["request_id"], "test-req-42");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let service = common::start_service(|_| {}).await;
    let client = common::client();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let res = client.get(service.url("/greeting/John/Bob")).send().await.unwrap();
        bodies.push(res.text().await.unwrap());
    }
    assert!(bodies.iter().all(|b| b == "Hello, Bob"));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_diagnostic_settings_do_not_change_results() {
    let service = common::start_service(|config| {
        config.greeting.checkpoints = false;
        config.greeting.operator_debug = true;
    })
    .await;
    let client = common::client();

    let res = client.get(service.url("/greeting/John/Bob")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "Hello, Bob");

    let res = client.get(service.url("/greeting/John/John")).send().await.unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "expected exactly one surviving name, found 0");
    assert_eq!(body["checkpoints"], serde_json::json!([]));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_routes() {
    let service = common::start_service(|_| {}).await;
    let client = common::client();

    let res = client.get(service.url("/greeting/John")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let res = client.get(service.url("/hello")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let service = common::start_service(|_| {}).await;
    let client = common::client();

    let res = client.get(service.url("/greeting/John/Bob")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    assert_eq!(service.shutdown.trigger(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(client.get(service.url("/greeting/John/Bob")).send().await.is_err());
}
