//! Content sources for the folio blog core.
//!
//! Everything the site renders from (the post index, author records, the
//! category and tag sidecars, the site config) is a flat JSON artifact with a
//! fixed name, listed in [`artifacts`]. A site reads each artifact once at
//! build time through a [`ContentSource`] and keeps only the parsed data.
//!
//! - [`FilesystemSource`]: artifacts as files in one content directory
//! - [`InMemorySource`]: artifacts supplied up front, as in tests

mod filesystem;
mod memory;

pub use filesystem::FilesystemSource;
pub use memory::InMemorySource;

use std::fmt::Debug;
use thiserror::Error;

/// Well-known artifact names.
pub mod artifacts {
    pub const SITE_CONFIG: &str = "site.json";
    pub const POSTS: &str = "posts.json";
    pub const AUTHORS: &str = "authors.json";
    pub const CATEGORY_DATA: &str = "category-data.json";
    pub const TAG_DATA: &str = "tag-data.json";
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Content artifact not found: {0}")]
    NotFound(String),

    /// Artifact names are bare file names; anything with a directory part is refused.
    #[error("Invalid artifact name '{0}'")]
    InvalidName(String),

    #[error("Failed to read content artifact '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A place content artifacts are read from.
pub trait ContentSource: Debug {
    /// Reads an artifact, `Ok(None)` when the source has no such artifact.
    fn load_optional(&self, name: &str) -> Result<Option<Vec<u8>>, SourceError>;

    /// Reads an artifact the site cannot do without.
    fn load(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.load_optional(name)?
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }

    /// Where the artifacts come from, for log lines.
    fn describe(&self) -> String;
}
