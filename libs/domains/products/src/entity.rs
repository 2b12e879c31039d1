use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{NewProduct, Product, UpdateProduct};

/// Sea-ORM entity for the `products` table.
///
/// `id` is an auto-incremented integer; on SQLite the bootstrapped column is
/// `AUTOINCREMENT`, so ids of deleted rows are never handed out again.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub price: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "Text", nullable, unique)]
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            category: model.category,
            image: model.image,
        }
    }
}

impl From<NewProduct> for ActiveModel {
    fn from(input: NewProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            category: Set(input.category),
            image: Set(input.image),
        }
    }
}

impl ActiveModel {
    /// Marks the fields carried by `patch` as changed; everything else stays
    /// untouched so the UPDATE only lists those columns.
    pub fn apply_update(&mut self, patch: UpdateProduct) {
        if let Some(name) = patch.name {
            self.name = Set(name);
        }
        if let Some(description) = patch.description {
            self.description = Set(description);
        }
        if let Some(price) = patch.price {
            self.price = Set(price);
        }
        if let Some(category) = patch.category {
            self.category = Set(category);
        }
        if let Some(image) = patch.image {
            self.image = Set(Some(image));
        }
    }
}
