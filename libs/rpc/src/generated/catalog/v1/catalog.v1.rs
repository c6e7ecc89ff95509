// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    /// Server-assigned UUID. Ignored on create and update.
    #[prost(string, tag = "1")]
    pub product_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(string, tag = "4")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub category: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "6")]
    pub image_urls: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(double, tag = "7")]
    pub price: f64,
    #[prost(message, optional, tag = "8")]
    pub size: ::core::option::Option<product::Size>,
    #[prost(double, tag = "9")]
    pub weight: f64,
    #[prost(double, tag = "10")]
    pub shipping_base_price: f64,
    #[prost(int32, tag = "11")]
    pub base_delivery_timelines: i32,
    /// Owning seller UUID. Required on create.
    #[prost(string, tag = "12")]
    pub seller_id: ::prost::alloc::string::String,
}
/// Nested message and enum types in `Product`.
pub mod product {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Size {
        #[prost(double, tag = "1")]
        pub width: f64,
        #[prost(double, tag = "2")]
        pub height: f64,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(message, optional, tag = "1")]
    pub product: ::core::option::Option<Product>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateProductResponse {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub product_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductResponse {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub product: ::core::option::Option<Product>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetProductsRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductsResponse {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub products: ::prost::alloc::vec::Vec<Product>,
}
/// Sparse update: empty strings, zero numbers, a missing size and an empty
/// image list leave the stored value unchanged.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(string, tag = "1")]
    pub product_id: ::prost::alloc::string::String,
    /// Seller performing the update; must own the product.
    #[prost(string, tag = "2")]
    pub seller_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub product: ::core::option::Option<Product>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateProductResponse {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
}
include!("catalog.v1.tonic.rs");
// @@protoc_insertion_point(module)
