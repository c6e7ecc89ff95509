use async_trait::async_trait;
use database::{BaseRepository, Conditions};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    image_urls::DecodePolicy,
    models::{CreateProduct, Product},
    repository::{ImageUrlsUpdate, ProductRepository},
};

/// [`ProductRepository`] on SeaORM, used with PostgreSQL in production
#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// The single row with `id`, images decoded under `policy`
    async fn fetch_one(&self, id: Uuid, policy: DecodePolicy) -> ProductResult<Product> {
        let mut rows = self
            .base
            .query_by_condition(Conditions::new().eq(entity::Column::Id, id))
            .await?;

        match rows.len() {
            0 => Err(ProductError::NotFound(id)),
            1 => rows.remove(0).into_product(policy),
            n => Err(ProductError::TypeMismatch(format!(
                "expected one product with id {}, found {}",
                id, n
            ))),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip_all, fields(seller_id = %input.seller_id))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        info!(product_id = %model.id, "Created product");
        model.into_product(DecodePolicy::Strict)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Product> {
        self.fetch_one(id, DecodePolicy::Strict).await
    }

    #[instrument(skip(self))]
    async fn get_for_update(&self, id: Uuid) -> ProductResult<Product> {
        self.fetch_one(id, DecodePolicy::Lenient).await
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let rows = self.base.query_by_condition(Conditions::new()).await?;

        if rows.is_empty() {
            return Err(ProductError::CatalogEmpty);
        }

        rows.into_iter()
            .map(|row| row.into_product(DecodePolicy::Lenient))
            .collect()
    }

    #[instrument(skip_all, fields(product_id = %product.id, version = product.version, ?images))]
    async fn update(&self, product: Product, images: ImageUrlsUpdate) -> ProductResult<Product> {
        let conditions = Conditions::new()
            .eq(entity::Column::Id, product.id)
            .eq(entity::Column::SellerId, product.seller_id)
            .eq(entity::Column::Version, product.version);

        let affected = self
            .base
            .update(entity::ActiveModel::replacing(&product, images), conditions)
            .await?;

        if affected == 0 {
            return Err(ProductError::Conflict(product.id));
        }

        info!("Updated product");
        Ok(Product {
            version: product.version + 1,
            ..product
        })
    }
}
