//! Products gRPC Service
//!
//! Serves `catalog.v1.ProductService` over a relational catalog.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, zstd)
//! ProductServiceImpl (service.rs)
//!   ↓ (proto ↔ domain via domain_products::conversions)
//! ProductService (domain layer)
//!   ↓
//! PgProductRepository → BaseRepository<products>
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: environment configuration
//! - `server`: startup, health reporting and shutdown
//! - `service`: gRPC trait implementation

pub mod config;
pub mod server;
pub mod service;

pub use config::Config;
pub use server::{product_service, run};
pub use service::ProductServiceImpl;
