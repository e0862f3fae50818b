use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unsupported value modifier: {0}")]
    UnsupportedVariant(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
