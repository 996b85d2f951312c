pub type AscseeResult<T> = Result<T, AscseeError>;

#[derive(thiserror::Error, Debug)]
pub enum AscseeError {
    #[error("order file not found: {0}")]
    NotFound(String),

    #[error("malformed order data: {0}")]
    MalformedData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("conversion error: {0}")]
    Conversion(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AscseeError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedData(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }
}
