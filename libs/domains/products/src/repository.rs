use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations enforce unique `name` and unique non-null `image`,
/// reporting collisions as `ProductError::ConstraintViolation`. Ids are
/// assigned by the store and never reused.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return it with its assigned id
    async fn insert(&self, input: NewProduct) -> ProductResult<Product>;

    /// All products in id order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Apply the fields present in `patch`.
    ///
    /// An empty patch returns the stored product without writing.
    async fn update(&self, id: i32, patch: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product, returning its last stored values
    async fn delete(&self, id: i32) -> ProductResult<Product>;

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;
}
