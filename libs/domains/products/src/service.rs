//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::{ImageUrlsUpdate, ProductRepository};

/// Transport-agnostic catalog operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new listing
    #[instrument(skip(self, input), fields(seller_id = %input.seller_id))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository.get_by_id(id).await
    }

    /// The whole catalog; an empty catalog is an error
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Apply `patch` to product `id` on behalf of `caller_seller_id`.
    ///
    /// Ownership is checked before anything else about the patch. A patch
    /// with no fields returns the stored product without writing. The stored
    /// image list is rewritten only when the patch carries one, so a row whose
    /// image list does not decode can still be updated or repaired.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: Uuid,
        caller_seller_id: &str,
        patch: UpdateProduct,
    ) -> ProductResult<Product> {
        let mut product = self.repository.get_for_update(id).await?;
        product.authorize(caller_seller_id)?;
        patch.validate()?;

        let images = match patch.image_urls {
            Some(_) => ImageUrlsUpdate::Replace,
            None => ImageUrlsUpdate::Keep,
        };

        if !product.apply_update(patch) {
            debug!("Empty update, nothing to write");
            return Ok(product);
        }

        self.repository.update(product, images).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn stored_product(seller_id: Uuid) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Desk Lamp".to_string(),
            quantity: 10,
            product_type: "lighting".to_string(),
            category: "home".to_string(),
            image_urls: vec!["a.png".to_string()],
            price: 39.5,
            width: 12.0,
            height: 40.0,
            weight: 1.2,
            shipping_base_price: 4.99,
            base_delivery_timelines: 3,
            seller_id,
            version: 0,
        }
    }

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Desk Lamp".to_string(),
            quantity: 10,
            product_type: "lighting".to_string(),
            category: "home".to_string(),
            image_urls: vec![],
            price: 39.5,
            width: 0.0,
            height: 0.0,
            weight: 0.0,
            shipping_base_price: 4.99,
            base_delivery_timelines: 3,
            seller_id: Uuid::now_v7(),
        }
    }

    #[tokio::test]
    async fn test_create_product_validates_before_storing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let input = CreateProduct {
            category: String::new(),
            ..create_input()
        };

        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_product_stores_valid_input() {
        let input = create_input();
        let seller_id = input.seller_id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .with(eq(input.clone()))
            .times(1)
            .returning(move |_| Ok(stored_product(seller_id)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(input).await.unwrap();

        assert_eq!(product.seller_id, seller_id);
    }

    #[tokio::test]
    async fn test_get_product_passes_not_found_through() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_list_products_empty_catalog() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(ProductError::CatalogEmpty));

        let service = ProductService::new(mock_repo);
        assert!(matches!(
            service.list_products().await,
            Err(ProductError::CatalogEmpty)
        ));
    }

    #[tokio::test]
    async fn test_update_product_rejects_other_seller() {
        let owner = Uuid::now_v7();
        let product = stored_product(owner);
        let id = product.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .returning(move |_| Ok(product.clone()));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let patch = UpdateProduct {
            quantity: Some(1),
            ..Default::default()
        };

        let err = service
            .update_product(id, &Uuid::now_v7().to_string(), patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_update_product_checks_owner_before_validating() {
        let product = stored_product(Uuid::now_v7());
        let id = product.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .returning(move |_| Ok(product.clone()));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let invalid = UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        };

        let err = service
            .update_product(id, "someone-else", invalid)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_update_product_empty_patch_is_noop() {
        let owner = Uuid::now_v7();
        let product = stored_product(owner);
        let expected = product.clone();

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .returning(move |_| Ok(product.clone()));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(expected.id, &owner.to_string(), UpdateProduct::default())
            .await
            .unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_update_product_merges_and_stores() {
        let owner = Uuid::now_v7();
        let product = stored_product(owner);
        let id = product.id;

        let mut expected = product.clone();
        expected.quantity = 2;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .with(eq(id))
            .returning(move |_| Ok(product.clone()));
        mock_repo
            .expect_update()
            .with(eq(expected), eq(ImageUrlsUpdate::Keep))
            .times(1)
            .returning(|product, _| {
                Ok(Product {
                    version: product.version + 1,
                    ..product
                })
            });

        let service = ProductService::new(mock_repo);
        let patch = UpdateProduct {
            quantity: Some(2),
            ..Default::default()
        };

        let updated = service
            .update_product(id, &owner.to_string(), patch)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 2);
        assert_eq!(updated.name, "Desk Lamp");
        assert_eq!(updated.version, 1);
    }

    #[tokio::test]
    async fn test_update_product_surfaces_conflict() {
        let owner = Uuid::now_v7();
        let product = stored_product(owner);
        let id = product.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .returning(move |_| Ok(product.clone()));
        mock_repo
            .expect_update()
            .returning(|product, _| Err(ProductError::Conflict(product.id)));

        let service = ProductService::new(mock_repo);
        let patch = UpdateProduct {
            price: Some(10.0),
            ..Default::default()
        };

        let err = service
            .update_product(id, &owner.to_string(), patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Conflict(conflicted) if conflicted == id));
    }

    #[tokio::test]
    async fn test_update_product_with_images_replaces_them() {
        let owner = Uuid::now_v7();
        let product = stored_product(owner);
        let id = product.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_for_update()
            .returning(move |_| Ok(product.clone()));
        mock_repo
            .expect_update()
            .withf(|product, images| {
                product.image_urls == vec!["fresh.png".to_string()]
                    && *images == ImageUrlsUpdate::Replace
            })
            .times(1)
            .returning(|product, _| Ok(product));

        let service = ProductService::new(mock_repo);
        let patch = UpdateProduct {
            image_urls: Some(vec!["fresh.png".to_string()]),
            ..Default::default()
        };

        service
            .update_product(id, &owner.to_string(), patch)
            .await
            .unwrap();
    }
}
