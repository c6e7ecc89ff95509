//! Conversions between the catalog protobuf messages and domain types.
//!
//! Update messages use zero values as "absent": an empty string, a number that
//! is not strictly positive, a missing or zero-sized `size` and an empty image
//! list all leave the stored value unchanged.

use rpc::catalog::v1 as proto;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Parse a product id received on the wire
pub fn parse_product_id(raw: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ProductError::InvalidArgument("Unable to parse product id".to_string()))
}

/// Seller identity declared by an update request.
///
/// The request-level `seller_id` wins; older clients only set it on the
/// embedded product.
pub fn caller_seller_id(request: &proto::UpdateProductRequest) -> &str {
    if !request.seller_id.trim().is_empty() {
        return &request.seller_id;
    }

    request
        .product
        .as_ref()
        .map(|product| product.seller_id.as_str())
        .unwrap_or_default()
}

impl TryFrom<proto::Product> for CreateProduct {
    type Error = ProductError;

    fn try_from(product: proto::Product) -> Result<Self, Self::Error> {
        let seller_id = Uuid::parse_str(product.seller_id.trim())
            .map_err(|_| ProductError::InvalidArgument("Unable to parse seller id".to_string()))?;
        let size = product.size.unwrap_or_default();

        Ok(CreateProduct {
            name: product.name,
            quantity: product.quantity,
            product_type: product.r#type,
            category: product.category,
            image_urls: product.image_urls,
            price: product.price,
            width: size.width,
            height: size.height,
            weight: product.weight,
            shipping_base_price: product.shipping_base_price,
            base_delivery_timelines: product.base_delivery_timelines,
            seller_id,
        })
    }
}

impl From<Product> for proto::Product {
    fn from(product: Product) -> Self {
        proto::Product {
            product_id: product.id.to_string(),
            name: product.name,
            quantity: product.quantity,
            r#type: product.product_type,
            category: product.category,
            image_urls: product.image_urls,
            price: product.price,
            size: Some(proto::product::Size {
                width: product.width,
                height: product.height,
            }),
            weight: product.weight,
            shipping_base_price: product.shipping_base_price,
            base_delivery_timelines: product.base_delivery_timelines,
            seller_id: product.seller_id.to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn positive<T: PartialOrd + Default + Copy>(value: T) -> Option<T> {
    (value > T::default()).then_some(value)
}

impl From<&proto::Product> for UpdateProduct {
    fn from(product: &proto::Product) -> Self {
        let size = product.size.as_ref();

        UpdateProduct {
            name: non_empty(&product.name),
            quantity: positive(product.quantity),
            product_type: non_empty(&product.r#type),
            category: non_empty(&product.category),
            image_urls: (!product.image_urls.is_empty()).then(|| product.image_urls.clone()),
            price: positive(product.price),
            width: size.and_then(|s| positive(s.width)),
            height: size.and_then(|s| positive(s.height)),
            weight: positive(product.weight),
            shipping_base_price: positive(product.shipping_base_price),
            base_delivery_timelines: positive(product.base_delivery_timelines),
        }
    }
}
