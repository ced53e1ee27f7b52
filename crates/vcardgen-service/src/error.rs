use thiserror::Error;

use crate::contact::ValidationErrorSet;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] vcardgen_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] vcardgen_core::error::CoreError),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrorSet),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
