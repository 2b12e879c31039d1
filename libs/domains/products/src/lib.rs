//! Products Domain
//!
//! Product catalog CRUD over a relational store, with an in-memory store for
//! development and tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON content-type checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field validation, bulk de-duplication
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQL and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, wire types, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{ProductService, SqlProductRepository, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//!
//! let repository = SqlProductRepository::new(db);
//! let service = ProductService::new(repository);
//!
//! let router = axum::Router::new().nest("/product", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    BulkProducts, CreateProduct, DeletedProduct, NewProduct, Product, ProductLookup,
    RequiredField, UpdateProduct,
};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use sql::SqlProductRepository;
