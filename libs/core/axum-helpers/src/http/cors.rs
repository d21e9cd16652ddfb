use tower_http::cors::CorsLayer;

/// CORS layer that accepts any origin, method and header (no credentials).
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
