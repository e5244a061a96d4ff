use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Invalid taxonomy data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed URI component '{0}'")]
    InvalidUri(String),
}
