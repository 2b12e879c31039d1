//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: private in-memory SQLite database, optionally with an
//!   entity's table bootstrapped
//! - `TestDataBuilder`: deterministic test data keyed by test name
//! - `assertions`: assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let db = TestDatabase::with_entity(product::Entity).await;
//!     let builder = TestDataBuilder::from_test_name("my_repository_test");
//!
//!     let name = builder.name("product", "main");
//! }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

/// Builder for deterministic, collision-free test values.
///
/// Values embed a seed derived from the test name, so two tests never
/// produce the same unique column value by accident.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name such as `"test-product-12345-main"`.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Unique image URL for columns that must not repeat.
    pub fn image_url(&self, suffix: &str) -> String {
        format!("https://img.test/{}/{}.png", self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that ids are strictly increasing (insertion order).
    pub fn assert_strictly_increasing(ids: &[i32], context: &str) {
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not strictly increasing: {:?}",
                context,
                ids
            );
        }
    }
}
