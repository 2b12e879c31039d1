use axum::{Router, routing::get};

pub mod health;
pub mod products;

pub const GREETING: &str = "David s Devcamp Backend!";

/// Greeting served at the root path
#[utoipa::path(
    get,
    path = "/",
    tag = "Catalog",
    responses(
        (status = 200, description = "Plain text greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    GREETING
}

/// Creates the API routes.
///
/// Takes a reference to AppState and initializes the domain services.
/// Returns a stateless Router (sub-routers have their state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/product", products::router(state))
}

/// Creates a router with the /ready endpoint that checks the database.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
