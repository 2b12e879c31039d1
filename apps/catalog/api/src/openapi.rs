use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog: add, list, fetch, edit, delete and bulk-add products"
    ),
    nest(
        (path = "/product", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
