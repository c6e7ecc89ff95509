use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// What an update does with the stored image list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUrlsUpdate {
    /// Leave the stored value untouched, even if it does not decode
    Keep,
    /// Overwrite it with the product's list
    Replace,
}

/// Persistence for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a freshly generated id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Fails with `NotFound` when no product has this id
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// Like [`Self::get_by_id`], but a stored image list that does not decode
    /// reads as empty instead of failing, so the row can still be updated.
    async fn get_for_update(&self, id: Uuid) -> ProductResult<Product>;

    /// Every product; fails with `CatalogEmpty` instead of returning an empty list
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Replace the mutable fields of `product`.
    ///
    /// Succeeds only if the stored row still has `product.version`; otherwise
    /// fails with `Conflict`. Returns the product with its new version.
    async fn update(&self, product: Product, images: ImageUrlsUpdate) -> ProductResult<Product>;
}
