// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use promo_desk::application::ports::{time::Clock, util::SlugGenerator};
use promo_desk::application::services::{ApplicationServices, Repositories};
use promo_desk::infrastructure::util::DefaultSlugGenerator;
use promo_desk::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    FixedClock, InMemoryArtists, InMemoryManagers, InMemoryPromotions, SharedState,
    store::shared_state,
};

/// Services wired to in-memory repositories, with handles for inspection.
pub struct TestContext {
    pub state: SharedState,
    pub artists: Arc<InMemoryArtists>,
    pub promotions: Arc<InMemoryPromotions>,
    pub managers: Arc<InMemoryManagers>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(Arc::new(FixedClock), Arc::new(DefaultSlugGenerator), 1000)
    }

    pub fn with_options(
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_max_suffix: u32,
    ) -> Self {
        let state = shared_state();
        let artists = Arc::new(InMemoryArtists::new(Arc::clone(&state)));
        let promotions = Arc::new(InMemoryPromotions::new(Arc::clone(&state)));
        let managers = Arc::new(InMemoryManagers::new(Arc::clone(&state)));

        let repos = Repositories {
            artist_write: artists.clone(),
            artist_read: artists.clone(),
            promotion_write: promotions.clone(),
            promotion_read: promotions.clone(),
            managers: managers.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            clock,
            slugger,
            slug_max_suffix,
        ));

        Self {
            state,
            artists,
            promotions,
            managers,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &[])
    }
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: TestContext::new().services,
    }
}

pub fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

/// Sends one request through the router and returns the response.
pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Asserts a JSON response with the given status and returns its body.
pub async fn expect_json(resp: Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let json = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    json
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
