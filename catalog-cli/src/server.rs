//! Web Server for the Data Catalog UI
//!
//! Serves the embedded single-page app. There is no catalog backend: the
//! browser keeps the forest in its own storage.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use catalog_shared::STORAGE_KEY;
use rust_embed::RustEmbed;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Embedded UI assets (compiled WASM app)
#[derive(RustEmbed)]
#[folder = "../ui/dist/"]
#[allow_missing = true]
struct UiAssets;

/// Launcher details reported to the UI
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub storage_key: &'static str,
}

impl ApiInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            storage_key: STORAGE_KEY,
        }
    }
}

/// Build the router serving the API endpoints and the embedded UI
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Launcher info
        .route("/api/info", get(api_info))
        // Serve UI assets - index.html for root
        .route("/", get(serve_index))
        // Static files and SPA routing
        .fallback(serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the web server
pub async fn start_server(port: u16) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let app = create_router();

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("UI server listening on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(handle)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    debug!("Health check endpoint called");
    (StatusCode::OK, "OK")
}

async fn api_info() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiInfo::current()))
}

/// Serve index.html
async fn serve_index() -> Response<Body> {
    serve_file("index.html")
}

/// Serve static files from embedded assets (fallback handler)
async fn serve_static(req: Request<Body>) -> Response<Body> {
    let path = req.uri().path();
    debug!("Fallback handler called for path: {}", path);

    if let Some(response) = try_serve_file(path) {
        return response;
    }

    // For SPA routing, serve index.html for non-asset paths
    if !is_asset_path(path) {
        return serve_file("index.html");
    }

    not_found()
}

/// Paths whose last segment has an extension are asset requests
fn is_asset_path(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

fn try_serve_file(path: &str) -> Option<Response<Body>> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    UiAssets::get(path).map(|content| {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        (
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            content.data.into_owned(),
        )
            .into_response()
    })
}

fn serve_file(path: &str) -> Response<Body> {
    match UiAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], content.data.into_owned()).into_response()
        }
        None => not_found(),
    }
}

fn not_found() -> Response<Body> {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths() {
        assert!(is_asset_path("/catalog_ui.js"));
        assert!(is_asset_path("/assets/app.wasm"));
        assert!(!is_asset_path("/"));
        assert!(!is_asset_path("/catalogs/ELM"));
        assert!(!is_asset_path("/v1.2/catalogs"));
    }

    #[test]
    fn test_api_info_reports_storage_key() {
        let info = ApiInfo::current();
        assert_eq!(info.name, "datacatalog");
        assert_eq!(info.storage_key, "datacatalog.assets");
    }
}
