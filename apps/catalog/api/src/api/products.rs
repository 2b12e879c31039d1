use axum::Router;
use domain_products::{ProductService, SqlProductRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqlProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
