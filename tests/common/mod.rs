#![allow(dead_code)]

pub mod fixtures;

use folio::{FolioError, InMemorySource, Site, SiteConfig};
use folio::source::artifacts;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// An in-memory content source holding the standard fixtures.
pub fn fixture_source() -> InMemorySource {
    source_with(
        fixtures::posts(),
        fixtures::category_data(),
        Some(fixtures::authors()),
    )
}

/// An in-memory content source with the given artifacts.
pub fn source_with(posts: Value, category_data: Value, authors: Option<Value>) -> InMemorySource {
    let mut source = InMemorySource::new()
        .with(artifacts::POSTS, posts.to_string())
        .with(artifacts::CATEGORY_DATA, category_data.to_string());
    if let Some(authors) = authors {
        source.insert(artifacts::AUTHORS, authors.to_string());
    }
    source
}

/// The standard fixture site: four posts per page, English dates.
pub fn fixture_site() -> Result<Site, FolioError> {
    let _ = env_logger::builder().is_test(true).try_init();
    Site::builder()
        .with_source(fixture_source())
        .with_config(fixtures::config())
        .build()
}

pub fn site_with_config(config: SiteConfig) -> Result<Site, FolioError> {
    let _ = env_logger::builder().is_test(true).try_init();
    Site::builder()
        .with_source(fixture_source())
        .with_config(config)
        .build()
}
