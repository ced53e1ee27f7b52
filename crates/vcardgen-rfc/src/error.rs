use thiserror::Error;

/// vCard encoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Invalid property name: {0:?}")]
    InvalidPropertyName(String),

    #[error("Invalid parameter name: {0:?}")]
    InvalidParameterName(String),

    #[error("Invalid value {value:?} for parameter {name}")]
    InvalidParameterValue { name: String, value: String },

    #[error("Pre-folded block must end with CRLF")]
    UnterminatedBlock,
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
