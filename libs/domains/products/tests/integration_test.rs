//! Integration tests for Products domain
//!
//! These tests run the SQL repository against an in-memory SQLite database
//! with the `products` table bootstrapped from the entity, so the unique
//! constraints and id assignment are the real ones.

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn sql_repo() -> SqlProductRepository {
    let db = TestDatabase::with_entity(entity::Entity).await;
    SqlProductRepository::new(db.connection())
}

fn new_product(builder: &TestDataBuilder, suffix: &str) -> NewProduct {
    NewProduct {
        name: builder.name("product", suffix),
        description: "Integration test product".to_string(),
        price: "19.90".to_string(),
        category: "tools".to_string(),
        image: None,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_insert_and_get_product() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("insert_and_get");

    let input = new_product(&builder, "main");
    let created = repo.insert(input.clone()).await.unwrap();

    assert_eq!(created.name, input.name);
    assert_eq!(created.description, input.description);
    assert_eq!(created.price, "19.90");
    assert_eq!(created.category, input.category);
    assert_eq!(created.image, None);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_price_is_stored_verbatim() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("price_verbatim");

    let mut input = new_product(&builder, "free");
    input.price = "free-ish, $0.00".to_string();
    let created = repo.insert(input).await.unwrap();

    let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.price, "free-ish, $0.00");
}

#[tokio::test]
async fn test_duplicate_name_constraint() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("duplicate_name");

    repo.insert(new_product(&builder, "dup")).await.unwrap();
    let result = repo.insert(new_product(&builder, "dup")).await;

    assert!(matches!(result, Err(ProductError::ConstraintViolation(_))));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_image_unique_only_when_not_null() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("image_unique");

    // any number of products without an image
    repo.insert(new_product(&builder, "a")).await.unwrap();
    repo.insert(new_product(&builder, "b")).await.unwrap();

    let mut with_image = new_product(&builder, "c");
    with_image.image = Some(builder.image_url("shared"));
    repo.insert(with_image).await.unwrap();

    let mut clash = new_product(&builder, "d");
    clash.image = Some(builder.image_url("shared"));
    let result = repo.insert(clash).await;

    assert!(matches!(result, Err(ProductError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("ids_not_reused");

    let first = repo.insert(new_product(&builder, "1")).await.unwrap();
    let second = repo.insert(new_product(&builder, "2")).await.unwrap();
    repo.delete(second.id).await.unwrap();
    let third = repo.insert(new_product(&builder, "3")).await.unwrap();

    assert_strictly_increasing(&[first.id, second.id, third.id], "assigned ids");
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("list_order");

    for suffix in ["x", "y", "z"] {
        repo.insert(new_product(&builder, suffix)).await.unwrap();
    }

    let products = repo.list().await.unwrap();
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    assert_eq!(products.len(), 3);
    assert_strictly_increasing(&ids, "listed ids");
    assert_eq!(products[0].name, builder.name("product", "x"));
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("update_subset");

    let created = repo.insert(new_product(&builder, "main")).await.unwrap();
    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                price: Some("24.00".to_string()),
                image: Some(builder.image_url("main")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, "24.00");
    assert_eq!(updated.image, Some(builder.image_url("main")));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.category, created.category);

    let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_empty_update_returns_record_unchanged() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("update_empty");

    let created = repo.insert(new_product(&builder, "main")).await.unwrap();
    let updated = repo
        .update(created.id, UpdateProduct::default())
        .await
        .unwrap();

    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_to_taken_name_is_a_constraint_violation() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("update_taken_name");

    let first = repo.insert(new_product(&builder, "first")).await.unwrap();
    let second = repo.insert(new_product(&builder, "second")).await.unwrap();

    let result = repo
        .update(
            second.id,
            UpdateProduct {
                name: Some(first.name.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(ProductError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_update_and_delete_missing_product() {
    let repo = sql_repo().await;

    let update = repo
        .update(
            404,
            UpdateProduct {
                name: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(update, Err(ProductError::NotFound(404))));

    let delete = repo.delete(404).await;
    assert!(matches!(delete, Err(ProductError::NotFound(404))));
}

#[tokio::test]
async fn test_delete_returns_last_values_and_removes_row() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("delete_product");

    let created = repo.insert(new_product(&builder, "main")).await.unwrap();
    let deleted = repo.delete(created.id).await.unwrap();

    assert_eq!(deleted, created);
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_exists_by_name() {
    let repo = sql_repo().await;
    let builder = TestDataBuilder::from_test_name("exists_by_name");

    let created = repo.insert(new_product(&builder, "main")).await.unwrap();

    assert!(repo.exists_by_name(&created.name).await.unwrap());
    assert!(!repo.exists_by_name("nobody").await.unwrap());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_bulk_add_skips_repeated_name_in_batch() {
    let service = ProductService::new(sql_repo().await);
    let builder = TestDataBuilder::from_test_name("bulk_repeated");

    let item = |suffix: &str| CreateProduct {
        name: Some(builder.name("bulk", suffix)),
        description: Some("d".to_string()),
        price: Some("1".to_string()),
        category: Some("c".to_string()),
        image: None,
    };

    let inserted = service
        .create_many(vec![item("same"), item("same"), item("other")])
        .await
        .unwrap();

    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].name, builder.name("bulk", "same"));
    assert_eq!(inserted[1].name, builder.name("bulk", "other"));

    // same payload again inserts nothing
    let again = service
        .create_many(vec![item("same"), item("same"), item("other")])
        .await
        .unwrap();
    assert!(again.is_empty());
    assert_eq!(service.list_products().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_bulk_add_keeps_inserts_before_constraint_failure() {
    let service = ProductService::new(sql_repo().await);
    let builder = TestDataBuilder::from_test_name("bulk_partial");

    let item = |suffix: &str, image: &str| CreateProduct {
        name: Some(builder.name("bulk", suffix)),
        description: Some("d".to_string()),
        price: Some("1".to_string()),
        category: Some("c".to_string()),
        image: Some(builder.image_url(image)),
    };

    let result = service
        .create_many(vec![item("a", "one"), item("b", "one"), item("c", "two")])
        .await;

    assert!(matches!(result, Err(ProductError::ConstraintViolation(_))));

    let stored = service.list_products().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, builder.name("bulk", "a"));
}
