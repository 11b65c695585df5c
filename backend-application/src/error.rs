use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing JSON body")]
    MissingBody,
    #[error("missing fields: {0}")]
    MissingFields(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid timestamp format: {0}")]
    InvalidTimestamp(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
