//! HTTP surface: JSON API plus static file fallback.
//!
//! Routes:
//!
//! - `GET  /api/news` (`?refresh=true` forces a fetch)
//! - `POST /api/news/refresh`
//! - `GET  /api/health`
//! - `GET  /api/health/extended`
//!
//! Everything else is served from the static directory.

mod handlers;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::news::NewsService;

pub const NEWS_PATH: &str = "/api/news";
pub const REFRESH_PATH: &str = "/api/news/refresh";
pub const HEALTH_PATH: &str = "/api/health";
pub const EXTENDED_HEALTH_PATH: &str = "/api/health/extended";

/// Shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<NewsService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self {
            service,
            started_at: Instant::now(),
        }
    }
}

/// Builds the full application router.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(NEWS_PATH, get(handlers::get_news))
        .route(REFRESH_PATH, post(handlers::refresh_news))
        .route(HEALTH_PATH, get(handlers::health))
        .route(EXTENDED_HEALTH_PATH, get(handlers::extended_health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(answer_options))
        .layer(cors)
        .with_state(state)
}

/// Any `OPTIONS` request that gets past the CORS layer is answered with an
/// empty 200, whatever the path.
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// `Cache-Control` values for API responses.
pub(crate) mod cache_control {
    pub const CACHE_HIT: &str = "s-maxage=300";
    pub const FRESH: &str = "s-maxage=600";
    pub const NO_CACHE: &str = "no-cache";
}

pub(crate) fn with_cache_control(mut response: Response<Body>, value: &'static str) -> Response<Body> {
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    response
}
