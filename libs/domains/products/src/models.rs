use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// A catalog listing owned by a single seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub product_type: String,
    pub category: String,
    /// Ordered as supplied by the seller
    pub image_urls: Vec<String>,
    pub price: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub shipping_base_price: f64,
    /// Days
    pub base_delivery_timelines: i32,
    pub seller_id: Uuid,
    /// Bumped on every stored update
    #[serde(skip)]
    pub version: i32,
}

impl Product {
    /// Check that `caller_seller_id` owns this product.
    ///
    /// An identifier that is not a UUID can never match and is rejected the same way.
    pub fn authorize(&self, caller_seller_id: &str) -> ProductResult<()> {
        match Uuid::parse_str(caller_seller_id.trim()) {
            Ok(caller) if caller == self.seller_id => Ok(()),
            _ => Err(ProductError::Unauthorized(self.id)),
        }
    }

    /// Overwrite every field present in `patch`.
    ///
    /// Returns `true` when at least one field was present.
    pub fn apply_update(&mut self, patch: UpdateProduct) -> bool {
        if patch.is_empty() {
            return false;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(product_type) = patch.product_type {
            self.product_type = product_type;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_urls) = patch.image_urls {
            self.image_urls = image_urls;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(shipping_base_price) = patch.shipping_base_price {
            self.shipping_base_price = shipping_base_price;
        }
        if let Some(base_delivery_timelines) = patch.base_delivery_timelines {
            self.base_delivery_timelines = base_delivery_timelines;
        }

        true
    }
}

/// Input for a new listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(length(min = 1, max = 20))]
    pub product_type: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub width: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub height: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub weight: f64,
    #[validate(range(min = 0.0))]
    pub shipping_base_price: f64,
    #[validate(range(min = 0))]
    pub base_delivery_timelines: i32,
    pub seller_id: Uuid,
}

/// Sparse patch for an existing listing; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub product_type: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    pub image_urls: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub shipping_base_price: Option<f64>,
    #[validate(range(min = 0))]
    pub base_delivery_timelines: Option<i32>,
}

impl UpdateProduct {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Desk Lamp".to_string(),
            quantity: 10,
            product_type: "lighting".to_string(),
            category: "home".to_string(),
            image_urls: vec!["a.png".to_string(), "b.png".to_string()],
            price: 39.5,
            width: 12.0,
            height: 40.0,
            weight: 1.2,
            shipping_base_price: 4.99,
            base_delivery_timelines: 3,
            seller_id: Uuid::now_v7(),
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

    #[test]
    fn test_authorize_owner() {
        let product = product();
        assert!(product.authorize(&product.seller_id.to_string()).is_ok());
        assert!(product.authorize(&format!(" {} ", product.seller_id)).is_ok());
    }

    #[test]
    fn test_authorize_rejects_other_seller() {
        let product = product();
        let err = product.authorize(&Uuid::now_v7().to_string()).unwrap_err();
        assert!(matches!(err, ProductError::Unauthorized(id) if id == product.id));
    }

    #[test]
    fn test_authorize_rejects_unparseable_caller() {
        let product = product();
        assert!(matches!(
            product.authorize("not-a-uuid"),
            Err(ProductError::Unauthorized(_))
        ));
        assert!(matches!(product.authorize(""), Err(ProductError::Unauthorized(_))));
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut product = product();
        let before = product.clone();

        assert!(!product.apply_update(UpdateProduct::default()));
        assert_eq!(product, before);
    }

    #[test]
    fn test_apply_update_changes_only_present_fields() {
        let mut product = product();
        let before = product.clone();

        let changed = product.apply_update(UpdateProduct {
            quantity: Some(3),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(product.quantity, 3);
        assert_eq!(Product { quantity: before.quantity, ..product }, before);
    }

    #[test]
    fn test_apply_update_accepts_explicit_zero() {
        let mut product = product();

        product.apply_update(UpdateProduct {
            quantity: Some(0),
            image_urls: Some(vec![]),
            ..Default::default()
        });

        assert_eq!(product.quantity, 0);
        assert!(product.image_urls.is_empty());
    }

    #[test]
    fn test_create_product_validation() {
        assert!(create_input().validate().is_ok());

        let empty_name = CreateProduct {
            name: String::new(),
            ..create_input()
        };
        assert!(empty_name.validate().is_err());

        let long_type = CreateProduct {
            product_type: "x".repeat(21),
            ..create_input()
        };
        assert!(long_type.validate().is_err());

        let negative_price = CreateProduct {
            price: -1.0,
            ..create_input()
        };
        let errors = negative_price.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_update_product_validation() {
        assert!(UpdateProduct::default().validate().is_ok());

        let blank_name = UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());

        let negative_quantity = UpdateProduct {
            quantity: Some(-4),
            ..Default::default()
        };
        assert!(negative_quantity.validate().is_err());
    }

    #[test]
    fn test_update_product_is_empty() {
        assert!(UpdateProduct::default().is_empty());
        assert!(
            !UpdateProduct {
                weight: Some(2.0),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
