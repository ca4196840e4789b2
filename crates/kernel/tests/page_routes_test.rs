#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the page props routes.
//!
//! Drives the real router with a mock content backend, verifying the
//! route-level data contract: props shape, revalidation interval,
//! preview token handling, and error status mapping.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use vetrina_kernel::app;
use vetrina_kernel::client::{ContentFetch, Params};
use vetrina_kernel::config::Config;
use vetrina_kernel::error::{AppError, AppResult};
use vetrina_kernel::query::Groq;
use vetrina_kernel::state::AppState;

struct MockBackend {
    preview_seen: std::sync::Mutex<Vec<bool>>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            preview_seen: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContentFetch for MockBackend {
    async fn fetch(&self, query: &Groq, params: &Params, preview: bool) -> AppResult<Value> {
        self.preview_seen.lock().unwrap().push(preview);

        let q = query.as_str();
        if q.contains("config__i18n_") {
            Ok(json!({ "name": "Vetrina" }))
        } else if q.contains("navigation__i18n_") {
            Ok(json!({ "items": [{ "label": "Blog", "href": "/en/blog" }] }))
        } else if q.contains("footer__i18n_") {
            Ok(json!({ "copyright": "© Vetrina" }))
        } else if q.contains("path == $path") {
            match params.get("path").and_then(Value::as_str) {
                Some("/en/blog/launch") => Ok(json!({
                    "id": "page_launch__i18n_en",
                    "type": "page.blog",
                    "title": "Launch",
                    "path": "/en/blog/launch",
                    "blocks": [],
                })),
                _ => Ok(Value::Null),
            }
        } else {
            // Sitemap rows, as projected by the sitemap query.
            Ok(json!([
                {
                    "id": "page_launch__i18n_en",
                    "type": "page.blog",
                    "title": "Launch",
                    "path": "/en/blog/launch",
                    "language": "en",
                    "updatedAt": "2024-02-01T00:00:00Z",
                },
                {
                    "id": "page_launch__i18n_it",
                    "type": "page.blog",
                    "title": "Lancio",
                    "path": "/it/blog/lancio",
                    "language": "it",
                    "updatedAt": "2024-02-01T00:00:00Z",
                },
            ]))
        }
    }
}

struct FailingBackend;

#[async_trait]
impl ContentFetch for FailingBackend {
    async fn fetch(&self, _query: &Groq, _params: &Params, _preview: bool) -> AppResult<Value> {
        Err(AppError::Fetch("connection refused".to_string()))
    }
}

fn test_config() -> Config {
    Config {
        port: 0,
        project_id: "testproject".to_string(),
        dataset: "production".to_string(),
        api_version: "2021-03-25".to_string(),
        preview_token: Some("secret".to_string()),
        request_timeout_secs: 10,
        theme_config_path: PathBuf::from("./theme.config.json"),
        theme_styles_path: PathBuf::from("./public/theme.styles.css"),
    }
}

fn test_app(fetcher: Arc<dyn ContentFetch>) -> axum::Router {
    app(AppState::with_fetcher(test_config(), fetcher))
}

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn resolves_page_with_full_props_contract() {
    let router = test_app(Arc::new(MockBackend::new()));
    let (status, props) = get_json(router, "/en/blog/launch").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(props["config"]["name"], "Vetrina");
    assert_eq!(props["navigation"]["items"][0]["label"], "Blog");
    assert_eq!(props["footer"]["copyright"], "© Vetrina");
    assert_eq!(props["page"]["title"], "Launch");
    assert_eq!(props["isPreviewMode"], false);
    assert_eq!(props["revalidate"], 10);
    // Sitemap item carries the localized paths for both languages.
    assert_eq!(props["sitemapItem"]["paths"]["en"], "/en/blog/launch");
    assert_eq!(props["sitemapItem"]["paths"]["it"], "/it/blog/lancio");
}

#[tokio::test]
async fn unknown_route_returns_not_found_props_not_404() {
    let router = test_app(Arc::new(MockBackend::new()));
    let (status, props) = get_json(router, "/en/nowhere").await;

    // The caller renders the localized not-found page from the props.
    assert_eq!(status, StatusCode::OK);
    assert!(props["page"].is_null());
    assert_eq!(props["sitemapItem"]["_id"], "page_notfound");
    assert_eq!(props["config"]["name"], "Vetrina");
}

#[tokio::test]
async fn unknown_language_is_rejected() {
    let router = test_app(Arc::new(MockBackend::new()));
    let (status, _) = get_json(router, "/de/blog/launch").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_preview_token_enables_preview_mode() {
    let backend = Arc::new(MockBackend::new());
    let router = test_app(backend.clone());
    let (status, props) = get_json(router, "/en/blog/launch?preview=secret").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(props["isPreviewMode"], true);
    // Every backend fetch ran on the preview path.
    assert!(backend.preview_seen.lock().unwrap().iter().all(|&p| p));
}

#[tokio::test]
async fn invalid_preview_token_falls_back_to_public() {
    let backend = Arc::new(MockBackend::new());
    let router = test_app(backend.clone());
    let (status, props) = get_json(router, "/en/blog/launch?preview=wrong").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(props["isPreviewMode"], false);
    assert!(backend.preview_seen.lock().unwrap().iter().all(|&p| !p));
}

#[tokio::test]
async fn backend_failure_maps_to_bad_gateway() {
    let router = test_app(Arc::new(FailingBackend));
    let (status, _) = get_json(router, "/en/blog/launch").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn language_root_resolves_without_rest_path() {
    let router = test_app(Arc::new(MockBackend::new()));
    let (status, props) = get_json(router, "/en").await;

    assert_eq!(status, StatusCode::OK);
    // No sitemap row for "/en" in the mock: not-found props.
    assert_eq!(props["sitemapItem"]["_id"], "page_notfound");
    assert_eq!(props["revalidate"], 10);
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let router = test_app(Arc::new(MockBackend::new()));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
