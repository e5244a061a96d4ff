use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Page numbers start at 1, got current page {current} of {total}")]
    InvalidPage { current: u32, total: u32 },

    #[error("Page size must be at least 1")]
    ZeroPageSize,

    #[error("Unrecognized date '{0}', expected ISO-8601")]
    InvalidDate(String),
}
