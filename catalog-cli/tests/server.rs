//! Launcher HTTP Tests
//!
//! Exercise the router directly with `oneshot` requests.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    datacatalog::create_router()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_api_info() {
    let response = get("/api/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_response(response).await;
    assert_eq!(json["name"], "datacatalog");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["storage_key"], "datacatalog.assets");
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let response = get("/does-not-exist.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
