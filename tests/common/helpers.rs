// Test helper functions

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use boruto::core::config::Config;
use boruto::core::services::Services;
use boruto::core::types::{ApiResponse, Hero};
use boruto::http::build_router;
use tower::ServiceExt as TowerServiceExt;

/// Services over the bundled catalog with default settings
#[allow(dead_code)]
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(&Config::default()).expect("Bundled catalog should load"))
}

/// Router wired exactly like the server binary
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<Services>) {
    let services = create_test_services();
    (build_router(Arc::clone(&services)), services)
}

/// Issue a GET and collect status and body
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    (status, body)
}

/// Issue a GET and decode the response envelope
#[allow(dead_code)]
pub async fn get_envelope(app: &Router, uri: &str) -> (StatusCode, ApiResponse) {
    let (status, body) = get(app, uri).await;
    let envelope: ApiResponse = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Expected JSON envelope from {uri}, got {:?}: {e}",
            String::from_utf8_lossy(&body)
        )
    });
    (status, envelope)
}

/// Minimal hero for hand-built catalogs
#[allow(dead_code)]
pub fn sample_hero(id: u32, name: &str) -> Hero {
    Hero {
        id,
        name: name.to_string(),
        image: format!("/images/{}.jpg", name.to_lowercase()),
        about: format!("About {name}"),
        rating: 4.5,
        power: 90,
        month: "Jan".to_string(),
        day: "1".to_string(),
        family: vec![],
        abilities: vec![],
        nature_types: vec![],
    }
}
