// src/error.rs
use folio_listing::ListingError;
use folio_source::SourceError;
use folio_taxonomy::TaxonomyError;
use thiserror::Error;

/// The error type for loading a site and building its views.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Content source error: {0}")]
    Source(#[from] SourceError),

    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Post '{slug}' is invalid: {message}")]
    InvalidPost { slug: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}
