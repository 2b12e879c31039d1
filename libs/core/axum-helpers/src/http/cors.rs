use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// CORS layer that accepts any origin, method and header.
///
/// Browsers on any host may call the service; no credentials are involved.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
