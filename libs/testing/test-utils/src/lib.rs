//! Shared test utilities for the catalog crates
//!
//! - `TestDatabase`: migrated SQLite (feature "sqlite", default) or PostgreSQL
//!   container (feature "postgres") database
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let db = TestDatabase::in_memory().await;
//!     let builder = TestDataBuilder::from_test_name("my_repository_test");
//!
//!     let seller_id = builder.seller_id();
//!     let name = builder.name("lamp", "main");
//! }
//! ```
//!
//! For the PostgreSQL suite add `features = ["postgres"]` to the
//! dev-dependency and call `TestDatabase::new()`.

use uuid::Uuid;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
mod database;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub use database::TestDatabase;

/// Seeded test data so failures reproduce
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name
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

    /// Seller id derived from the seed
    pub fn seller_id(&self) -> Uuid {
        self.uuid(0)
    }

    /// A second seller that never equals [`Self::seller_id`]
    pub fn other_seller_id(&self) -> Uuid {
        self.uuid(1)
    }

    fn uuid(&self, discriminator: u8) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        uuid_bytes[15] ^= discriminator.wrapping_add(1);
        uuid::Builder::from_random_bytes(uuid_bytes).into_uuid()
    }

    /// `"test-{prefix}-{seed}-{suffix}"`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("lamp", "main"), "test-lamp-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// `count` image URLs in a stable order
    pub fn image_urls(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://cdn.example.com/{}/{}.png", self.seed, i))
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Compare floats stored as double precision
    pub fn assert_f64_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected {}, got {}",
            context,
            expected,
            actual
        );
    }
}
