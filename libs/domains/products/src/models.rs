use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A sellable item as stored and as sent over the wire.
///
/// Field order here is the field order of every JSON response. `price` is
/// opaque text: it is never parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    /// `null` when the product has no image
    pub image: Option<String>,
}

impl Product {
    pub(crate) fn from_new(id: i32, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            image: input.image,
        }
    }

    /// Overwrite the fields carried by `patch`.
    pub fn apply_update(&mut self, patch: UpdateProduct) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

/// Mandatory product fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Description,
    Price,
    Category,
}

impl RequiredField {
    /// Message returned to the client when the field is absent or null.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Name => "Error: Please, provide a product name.",
            Self::Description => "Error: Please, provide a description.",
            Self::Price => "Error: Please, provide the price.",
            Self::Category => "Error: Please, provide a category.",
        }
    }
}

/// Body of `POST /product/add` and of each bulk item.
///
/// Every field is optional at the JSON level so that a missing or `null`
/// field reaches [`CreateProduct::validate`] and gets its own message
/// instead of a generic deserialization error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl CreateProduct {
    /// Checks name, description, price, category in that order; the first
    /// missing one is reported.
    pub fn validate(self) -> Result<NewProduct, RequiredField> {
        let name = self.name.ok_or(RequiredField::Name)?;
        let description = self.description.ok_or(RequiredField::Description)?;
        let price = self.price.ok_or(RequiredField::Price)?;
        let category = self.category.ok_or(RequiredField::Category)?;

        Ok(NewProduct {
            name,
            description,
            price,
            category,
            image: self.image,
        })
    }
}

/// A validated product ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

/// Body of `PUT /product/edit/{id}`.
///
/// Absent and `null` fields both mean "leave unchanged"; an image cannot be
/// cleared once set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

/// Body of `POST /product/add/many`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BulkProducts {
    pub products: Vec<CreateProduct>,
}

/// Response of `GET /product/get/{id}`: the product, or `{}` when there is
/// no product with that id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductLookup {
    Found(Product),
    Missing(EmptyObject),
}

impl From<Option<Product>> for ProductLookup {
    fn from(product: Option<Product>) -> Self {
        match product {
            Some(product) => Self::Found(product),
            None => Self::Missing(EmptyObject {}),
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmptyObject {}

pub const DELETED_MESSAGE: &str = "The product has been deleted!";

/// Response of `DELETE /product/delete/{id}`, serialized as the two-element
/// array `["The product has been deleted!", {product}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedProduct(pub &'static str, pub Product);

impl From<Product> for DeletedProduct {
    fn from(product: Product) -> Self {
        Self(DELETED_MESSAGE, product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            description: "A widget".into(),
            price: "9.99".into(),
            category: "tools".into(),
            image: None,
        }
    }

    #[test]
    fn test_product_wire_shape_keeps_field_order_and_null_image() {
        let body = serde_json::to_string(&widget()).unwrap();
        assert_eq!(
            body,
            r#"{"id":1,"name":"Widget","description":"A widget","price":"9.99","category":"tools","image":null}"#
        );
    }

    #[test]
    fn test_validate_reports_first_missing_field_in_order() {
        let input: CreateProduct = serde_json::from_value(json!({"price": "1"})).unwrap();
        assert_eq!(input.clone().validate(), Err(RequiredField::Name));

        let input = CreateProduct {
            name: Some("n".into()),
            price: Some("1".into()),
            ..Default::default()
        };
        assert_eq!(input.validate(), Err(RequiredField::Description));

        let input = CreateProduct {
            name: Some("n".into()),
            description: Some("d".into()),
            price: Some("1".into()),
            ..Default::default()
        };
        assert_eq!(input.validate(), Err(RequiredField::Category));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let input: CreateProduct = serde_json::from_value(json!({
            "name": "Widget",
            "description": "A widget",
            "price": null,
            "category": "tools"
        }))
        .unwrap();

        assert_eq!(input.validate(), Err(RequiredField::Price));
        assert_eq!(
            RequiredField::Price.message(),
            "Error: Please, provide the price."
        );
    }

    #[test]
    fn test_empty_strings_are_present() {
        let input = CreateProduct {
            name: Some(String::new()),
            description: Some(String::new()),
            price: Some(String::new()),
            category: Some(String::new()),
            image: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_apply_update_touches_only_given_fields() {
        let mut product = widget();
        product.apply_update(UpdateProduct {
            category: Some("garden".into()),
            ..Default::default()
        });

        assert_eq!(product.category, "garden");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, "9.99");
        assert!(UpdateProduct::default().is_empty());
    }

    #[test]
    fn test_lookup_serializes_missing_as_empty_object() {
        assert_eq!(
            serde_json::to_value(ProductLookup::from(None)).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(ProductLookup::from(Some(widget()))).unwrap()["name"],
            "Widget"
        );
    }

    #[test]
    fn test_deleted_product_is_a_two_element_array() {
        let value = serde_json::to_value(DeletedProduct::from(widget())).unwrap();
        assert_eq!(value[0], "The product has been deleted!");
        assert_eq!(value[1]["id"], 1);
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
