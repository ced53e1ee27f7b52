use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] vcardgen_service::error::ServiceError),

    #[error(transparent)]
    RfcError(#[from] vcardgen_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] vcardgen_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
