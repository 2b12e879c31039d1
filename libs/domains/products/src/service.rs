//! Product Service - Business logic layer

use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{CreateProduct, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validation of required fields and bulk de-duplication live here; storage
/// rules (uniqueness, id assignment) belong to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and insert a single product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let new_product = input.validate()?;
        self.repository.insert(new_product).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// `None` when no product has this id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: i32, patch: UpdateProduct) -> ProductResult<Product> {
        self.repository.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<Product> {
        self.repository.delete(id).await
    }

    /// Insert every product whose name is not taken yet.
    ///
    /// All items are validated first, so a missing field rejects the whole
    /// batch before anything is written. Names already stored, or repeated
    /// earlier in the batch, are skipped. Inserts are independent: a
    /// constraint failure stops the batch but keeps what was inserted before
    /// it.
    #[instrument(skip(self, inputs), fields(batch_size = inputs.len()))]
    pub async fn create_many(&self, inputs: Vec<CreateProduct>) -> ProductResult<Vec<Product>> {
        let new_products = inputs
            .into_iter()
            .map(CreateProduct::validate)
            .collect::<Result<Vec<NewProduct>, _>>()?;

        let mut seen = HashSet::new();
        let mut inserted = Vec::new();

        for new_product in new_products {
            if !seen.insert(new_product.name.clone())
                || self.repository.exists_by_name(&new_product.name).await?
            {
                tracing::debug!(name = %new_product.name, "Skipping product with existing name");
                continue;
            }

            inserted.push(self.repository.insert(new_product).await?);
        }

        tracing::info!(inserted = inserted.len(), "Bulk insert finished");
        Ok(inserted)
    }
}
