//! Products Domain
//!
//! Catalog listings stored in a relational table and served over gRPC.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Service    │  ← Validation, ownership checks, sparse merge
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │  Repository  │  ← ProductRepository trait + SeaORM implementation
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │    Entity    │  ← `products` table, image list stored as JSON text
//! └──────────────┘
//! ```
//!
//! `conversions` maps the `catalog.v1` protobuf messages onto the domain
//! types; `image_urls` owns the JSON codec for the image column.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{PgProductRepository, ProductService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//! let service = ProductService::new(PgProductRepository::new(db));
//! let catalog = service.list_products().await?;
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod image_urls;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use image_urls::DecodePolicy;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::{ImageUrlsUpdate, ProductRepository};
pub use service::ProductService;
