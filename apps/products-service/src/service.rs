//! `catalog.v1.ProductService` implementation
//!
//! Handlers convert with `domain_products::conversions`, call the domain
//! service once and turn failures into a `Status` carrying the error's code.

use domain_products::{
    CreateProduct, ProductError, ProductRepository, ProductService, UpdateProduct,
    conversions as conv,
};
use rpc::catalog::v1::{
    CreateProductRequest, CreateProductResponse, GetProductRequest, GetProductResponse,
    GetProductsRequest, GetProductsResponse, Product as ProtoProduct, UpdateProductRequest,
    UpdateProductResponse, product_service_server::ProductService as ProductServiceRpc,
};
use tonic::{Code, Request, Response, Status};
use tracing::{error, info, instrument, warn};

pub const CREATED_MESSAGE: &str = "Successfully created the product listing";
pub const RETRIEVED_MESSAGE: &str = "Successfully retrieved the product";
pub const UPDATED_MESSAGE: &str = "Successfully updated the product listing";

/// Status for a failed `action`, e.g. "Failed to create the product. error: ..."
fn failure(action: &str, err: ProductError) -> Status {
    let code = err.code();
    match code {
        Code::Internal | Code::Unavailable | Code::DataLoss => {
            error!(error = %err, action, "Request failed")
        }
        _ => warn!(error = %err, action, "Request rejected"),
    }
    Status::new(code, format!("Failed to {}. error: {}", action, err))
}

/// gRPC adapter over the domain [`ProductService`]
pub struct ProductServiceImpl<R>
where
    R: ProductRepository + 'static,
{
    service: ProductService<R>,
}

impl<R> ProductServiceImpl<R>
where
    R: ProductRepository + 'static,
{
    pub fn new(service: ProductService<R>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> ProductServiceRpc for ProductServiceImpl<R>
where
    R: ProductRepository + 'static,
{
    #[instrument(skip_all)]
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        const ACTION: &str = "create the product";

        let product = request.into_inner().product.ok_or_else(|| {
            failure(
                ACTION,
                ProductError::InvalidArgument("product is required".to_string()),
            )
        })?;
        let input = CreateProduct::try_from(product).map_err(|e| failure(ACTION, e))?;

        let created = self
            .service
            .create_product(input)
            .await
            .map_err(|e| failure(ACTION, e))?;

        info!(product_id = %created.id, "Product listing created");
        Ok(Response::new(CreateProductResponse {
            message: CREATED_MESSAGE.to_string(),
        }))
    }

    #[instrument(skip_all)]
    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        const ACTION: &str = "retrieve the product";

        let id = conv::parse_product_id(&request.into_inner().product_id)
            .map_err(|e| failure(ACTION, e))?;
        let product = self
            .service
            .get_product(id)
            .await
            .map_err(|e| failure(ACTION, e))?;

        Ok(Response::new(GetProductResponse {
            message: RETRIEVED_MESSAGE.to_string(),
            product: Some(product.into()),
        }))
    }

    #[instrument(skip_all)]
    async fn get_products(
        &self,
        _request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let products = self
            .service
            .list_products()
            .await
            .map_err(|e| failure("retrieve the products", e))?;

        Ok(Response::new(GetProductsResponse {
            message: RETRIEVED_MESSAGE.to_string(),
            products: products.into_iter().map(ProtoProduct::from).collect(),
        }))
    }

    #[instrument(skip_all)]
    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<UpdateProductResponse>, Status> {
        const ACTION: &str = "update the product";

        let req = request.into_inner();
        let id = conv::parse_product_id(&req.product_id).map_err(|e| failure(ACTION, e))?;
        let patch = req
            .product
            .as_ref()
            .map(UpdateProduct::from)
            .unwrap_or_default();

        let updated = self
            .service
            .update_product(id, conv::caller_seller_id(&req), patch)
            .await
            .map_err(|e| failure(ACTION, e))?;

        info!(product_id = %updated.id, version = updated.version, "Product listing updated");
        Ok(Response::new(UpdateProductResponse {
            message: UPDATED_MESSAGE.to_string(),
        }))
    }
}
