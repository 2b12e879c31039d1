use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

impl Store {
    /// Checks `name` and `image` against every product except `skip`.
    fn check_unique(
        &self,
        name: &str,
        image: Option<&str>,
        skip: Option<i32>,
    ) -> ProductResult<()> {
        for product in self.products.values() {
            if Some(product.id) == skip {
                continue;
            }
            if product.name == name {
                return Err(ProductError::ConstraintViolation(
                    "UNIQUE constraint failed: products.name".to_string(),
                ));
            }
            if image.is_some() && product.image.as_deref() == image {
                return Err(ProductError::ConstraintViolation(
                    "UNIQUE constraint failed: products.image".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Process-local product store with the same rules as the SQL table.
///
/// Ids grow monotonically and are not handed out again after a delete.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.check_unique(&input.name, input.image.as_deref(), None)?;

        store.last_id += 1;
        let product = Product::from_new(store.last_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, id: i32, patch: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let mut product = store
            .products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))?;
        if patch.is_empty() {
            return Ok(product);
        }

        product.apply_update(patch);
        store.check_unique(&product.name, product.image.as_deref(), Some(id))?;
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store.products.remove(&id).ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(product)
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.products.values().any(|p| p.name == name))
    }
}
