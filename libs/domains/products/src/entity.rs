use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::error::ProductResult;
use crate::image_urls::{self, DecodePolicy};
use crate::models::{CreateProduct, Product};
use crate::repository::ImageUrlsUpdate;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(column_name = "type")]
    pub product_type: String,
    pub category: String,
    /// JSON array, see [`crate::image_urls`]
    #[sea_orm(column_type = "Text")]
    pub image_urls: String,
    pub price: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub shipping_base_price: f64,
    pub base_delivery_timelines: i32,
    pub seller_id: Uuid,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record, decoding the image list under `policy`
    pub fn into_product(self, policy: DecodePolicy) -> ProductResult<Product> {
        let image_urls = image_urls::decode_with(self.id, &self.image_urls, policy)?;

        Ok(Product {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            product_type: self.product_type,
            category: self.category,
            image_urls,
            price: self.price,
            width: self.width,
            height: self.height,
            weight: self.weight,
            shipping_base_price: self.shipping_base_price,
            base_delivery_timelines: self.base_delivery_timelines,
            seller_id: self.seller_id,
            version: self.version,
        })
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            quantity: Set(input.quantity),
            product_type: Set(input.product_type),
            category: Set(input.category),
            image_urls: Set(image_urls::encode(&input.image_urls)),
            price: Set(input.price),
            width: Set(input.width),
            height: Set(input.height),
            weight: Set(input.weight),
            shipping_base_price: Set(input.shipping_base_price),
            base_delivery_timelines: Set(input.base_delivery_timelines),
            seller_id: Set(input.seller_id),
            version: Set(0),
        }
    }
}

impl ActiveModel {
    /// Every mutable column of `product` plus the next version.
    ///
    /// `id` and `seller_id` stay `NotSet` so an update can never rewrite them.
    /// With [`ImageUrlsUpdate::Keep`] the stored image text is left as is.
    pub fn replacing(product: &Product, images: ImageUrlsUpdate) -> Self {
        let image_urls = match images {
            ImageUrlsUpdate::Keep => NotSet,
            ImageUrlsUpdate::Replace => Set(image_urls::encode(&product.image_urls)),
        };

        ActiveModel {
            id: NotSet,
            name: Set(product.name.clone()),
            quantity: Set(product.quantity),
            product_type: Set(product.product_type.clone()),
            category: Set(product.category.clone()),
            image_urls,
            price: Set(product.price),
            width: Set(product.width),
            height: Set(product.height),
            weight: Set(product.weight),
            shipping_base_price: Set(product.shipping_base_price),
            base_delivery_timelines: Set(product.base_delivery_timelines),
            seller_id: NotSet,
            version: Set(product.version + 1),
        }
    }
}
