use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. Published sites and the SSE stream are read-only
/// surfaces, so only safe methods are allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
}
