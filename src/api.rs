//! HTTP API for the interview coach

mod handlers;
mod types;

pub use handlers::create_router;

use crate::config::CorsOrigins;
use crate::interview::Interviewer;
use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub interviewer: Arc<Interviewer>,
}

impl AppState {
    pub fn new(interviewer: Interviewer) -> Self {
        Self {
            interviewer: Arc::new(interviewer),
        }
    }
}

/// Permissive CORS for local development.
///
/// Credentials are allowed, so a wildcard cannot be sent literally: the
/// request's origin, method and headers are mirrored back instead.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = if origins.any {
        AllowOrigin::mirror_request()
    } else {
        let list: Vec<HeaderValue> = origins
            .explicit
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
