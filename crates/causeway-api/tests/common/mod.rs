//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use causeway_api::routes;
use causeway_api::state::AppState;
use causeway_core::clock::Clock;
use causeway_core::repository::{CauseRepository, DonationRepository};
use causeway_test_support::{
    FailingCauseRepository, FailingDonationRepository, InMemoryCauseRepository,
    InMemoryDonationRepository, StepClock,
};

/// The full app router plus direct handles on the in-memory stores, so tests
/// can assert what was (or was not) persisted.
pub struct TestApp {
    pub router: Router,
    pub causes: Arc<InMemoryCauseRepository>,
    pub donations: Arc<InMemoryDonationRepository>,
}

fn build_router(causes: Arc<dyn CauseRepository>, donations: Arc<dyn DonationRepository>) -> Router {
    // Same route structure as main.rs.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/causes", routes::causes::router())
        .with_state(AppState::new(causes, donations))
}

/// Build the full app router over in-memory stores. The clock steps by one
/// second per reading so records get distinct, ordered timestamps.
pub fn build_test_app() -> TestApp {
    let clock: Arc<dyn Clock> = Arc::new(StepClock::new(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ));
    let causes = Arc::new(InMemoryCauseRepository::new(Arc::clone(&clock)));
    let donations = Arc::new(InMemoryDonationRepository::new(clock));

    TestApp {
        router: build_router(causes.clone(), donations.clone()),
        causes,
        donations,
    }
}

/// Build the app router over stores whose every operation fails.
pub fn build_failing_app() -> Router {
    build_router(
        Arc::new(FailingCauseRepository),
        Arc::new(FailingDonationRepository),
    )
}

/// Send a request with an optional JSON body and return status and raw body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes)
}

fn parse_json(bytes: &Bytes) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "GET", uri, None).await;
    (status, parse_json(&bytes))
}

/// Send a POST request with a JSON body and return the response as JSON.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "POST", uri, Some(body)).await;
    (status, parse_json(&bytes))
}

/// Send a PUT request with a JSON body and return the response as JSON.
pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "PUT", uri, Some(body)).await;
    (status, parse_json(&bytes))
}

/// Send a DELETE request and return status and raw body.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    send(app, "DELETE", uri, None).await
}

/// Create a cause through the API and return its generated id.
pub async fn seed_cause(app: &Router, body: &serde_json::Value) -> String {
    let (status, json) = post_json(app, "/api/v1/causes", body).await;
    assert_eq!(status, StatusCode::CREATED, "seeding cause failed: {json}");
    json["data"]["id"].as_str().unwrap().to_string()
}
