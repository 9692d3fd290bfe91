use thiserror::Error;

/// Errors raised while rebuilding a model from plain data.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("snapshot is missing required field: {0}")]
    MissingField(&'static str),
    #[error("malformed snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}
