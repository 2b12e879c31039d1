use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{NewProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// [`ProductRepository`] over any sea-orm SQL backend.
///
/// Uniqueness is left to the table constraints; violations come back from
/// the driver and are mapped by `From<DbErr> for ProductError`.
#[derive(Clone)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> ProductResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn update(&self, id: i32, patch: UpdateProduct) -> ProductResult<Product> {
        let model = self.find_model(id).await?;
        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: entity::ActiveModel = model.into();
        active_model.apply_update(patch);
        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<Product> {
        let model = self.find_model(id).await?;
        model.clone().delete(&self.db).await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(model.into())
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
