use database::DatabaseError;
use thiserror::Error;
use tonic::{Code, Status};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid input: {0}")]
    InvalidArgument(String),

    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("No products found")]
    CatalogEmpty,

    #[error("Unauthorized to perform this operation on product {0}")]
    Unauthorized(Uuid),

    #[error(transparent)]
    Storage(#[from] DatabaseError),

    /// The store returned a result of an unexpected shape
    #[error("Unexpected query result: {0}")]
    TypeMismatch(String),

    #[error("No products found: stored image urls of product {id} are malformed: {reason}")]
    MalformedImageUrls { id: Uuid, reason: String },

    #[error("Product {0} was modified concurrently, retry the update")]
    Conflict(Uuid),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// gRPC status code for this error
    pub fn code(&self) -> Code {
        match self {
            ProductError::InvalidArgument(_) => Code::InvalidArgument,
            ProductError::NotFound(_) | ProductError::CatalogEmpty => Code::NotFound,
            ProductError::Unauthorized(_) => Code::PermissionDenied,
            ProductError::Storage(e) if e.is_connection_error() => Code::Unavailable,
            ProductError::Storage(_) | ProductError::TypeMismatch(_) => Code::Internal,
            ProductError::MalformedImageUrls { .. } => Code::DataLoss,
            ProductError::Conflict(_) => Code::Aborted,
        }
    }
}

impl From<ProductError> for Status {
    fn from(err: ProductError) -> Self {
        Status::new(err.code(), err.to_string())
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(err: validator::ValidationErrors) -> Self {
        ProductError::InvalidArgument(err.to_string())
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Storage(DatabaseError::from(err))
    }
}
