//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, LookupIdPath,
    errors::responses::{
        BadRequestIdResponse, BadRequestJsonResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{BULK_JSON_REQUIRED, JSON_REQUIRED, ProductError, ProductResult};
use crate::models::{
    BulkProducts, CreateProduct, DeletedProduct, EmptyObject, Product, ProductLookup,
    UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        add_product,
        get_products,
        get_product,
        edit_product,
        delete_product,
        add_many_products,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, BulkProducts, ProductLookup, EmptyObject
        ),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestJsonResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// A request body that must be declared as JSON.
pub trait JsonBody: DeserializeOwned {
    /// Returned with 200 when the request has no JSON content type
    const CONTENT_TYPE_MESSAGE: &'static str;
}

impl JsonBody for CreateProduct {
    const CONTENT_TYPE_MESSAGE: &'static str = JSON_REQUIRED;
}

impl JsonBody for UpdateProduct {
    const CONTENT_TYPE_MESSAGE: &'static str = JSON_REQUIRED;
}

impl JsonBody for BulkProducts {
    const CONTENT_TYPE_MESSAGE: &'static str = BULK_JSON_REQUIRED;
}

/// `Json` extractor that reports a missing JSON content type with the
/// endpoint's own message instead of a 415.
#[derive(Debug, Clone)]
pub struct ProductJson<T>(pub T);

impl<S, T> FromRequest<S> for ProductJson<T>
where
    S: Send + Sync,
    T: JsonBody,
{
    type Rejection = ProductError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                Err(ProductError::ContentType(T::CONTENT_TYPE_MESSAGE))
            }
            Err(rejection) => Err(ProductError::InvalidJson(rejection)),
        }
    }
}

/// Create the products router, to be nested under `/product`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/add", post(add_product::<R>))
        .route("/add/many", post(add_many_products::<R>))
        .route("/get", get(get_products::<R>))
        .route("/get/{id}", get(get_product::<R>))
        .route("/edit/{id}", put(edit_product::<R>))
        .route("/delete/{id}", delete(delete_product::<R>))
        .with_state(shared_service)
}

/// Add a product
///
/// A body without a JSON content type, or missing one of `name`,
/// `description`, `price`, `category`, is answered with 200 and an error
/// message string.
#[utoipa::path(
    post,
    path = "/add",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Created product, or an error message string", body = Product),
        (status = 409, response = ConflictResponse),
        (status = 422, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductJson(input): ProductJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// List every product
#[utoipa::path(
    get,
    path = "/get",
    tag = "Products",
    responses(
        (status = 200, description = "All products in id order", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by id
///
/// An unknown id yields `{}`, including integers too large to be an id.
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product, or {} when absent", body = ProductLookup),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LookupIdPath(id): LookupIdPath,
) -> ProductResult<Json<ProductLookup>> {
    let product = match id {
        Some(id) => service.get_product(id).await?,
        None => None,
    };
    Ok(Json(product.into()))
}

/// Edit a product
///
/// Only fields present and non-null in the body are changed.
#[utoipa::path(
    put,
    path = "/edit/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated product, or an error message string", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn edit_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ProductJson(patch): ProductJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, patch).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "[\"The product has been deleted!\", product]"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<DeletedProduct>> {
    let product = service.delete_product(id).await?;
    Ok(Json(product.into()))
}

/// Add many products
///
/// Products whose name already exists are skipped; only the inserted ones
/// are returned.
#[utoipa::path(
    post,
    path = "/add/many",
    tag = "Products",
    request_body = BulkProducts,
    responses(
        (status = 200, description = "Inserted products, or an error message string", body = Vec<Product>),
        (status = 409, response = ConflictResponse),
        (status = 422, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_many_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductJson(body): ProductJson<BulkProducts>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.create_many(body.products).await?;
    Ok(Json(products))
}
