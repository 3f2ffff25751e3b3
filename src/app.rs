use axum::Router;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::core::waitlist::{WaitlistService, waitlist_router};

/// Assemble the HTTP application: the waitlist API plus the landing page
/// served from `site_root`.
pub fn build_app(service: WaitlistService, site_root: &str) -> Router {
    // Pre-compressed .br/.gz siblings are served when present
    let site = ServeDir::new(site_root)
        .precompressed_br()
        .precompressed_gzip();

    let api = waitlist_router(service).layer(CorsLayer::permissive());

    Router::new().merge(api).fallback_service(site).layer(
        CompressionLayer::new()
            .br(true)
            .gzip(true)
            .quality(CompressionLevel::Default),
    )
}
