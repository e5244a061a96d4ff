//! Category and tag aggregation.
//!
//! The category sidecar (`category-data.json`) is produced offline and holds
//! two mappings: category name to post count, and parent category to its
//! ordered child names. This crate turns that data into the sorted views the
//! presentation layer renders:
//!
//! - a flat, alphabetically sorted index of every category ([`category_index`])
//! - a two-level sidebar tree with the current category highlighted ([`sidebar`])
//! - a weighted tag cloud ([`tag_cloud`])
//!
//! Counts are never defaulted. A category referenced without a count comes
//! back as `None` so the gap in the upstream data stays visible.

pub mod active;
pub mod aggregate;
pub mod collate;
pub mod data;
pub mod error;
pub mod slug;
pub mod tags;
pub mod uri;

pub use active::ActiveCategory;
pub use aggregate::{CategoryEntry, SidebarNode, category_index, sidebar};
pub use collate::{locale_cmp, name_collator};
pub use data::{CategoryCount, CategoryData, CategoryRelation};
pub use error::TaxonomyError;
pub use slug::slugify;
pub use tags::{DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE, TagCount, TagWeight, tag_cloud};
pub use uri::{decode_uri, encode_uri};

/// Route prefix under which category listings live.
pub const CATEGORY_ROUTE: &str = "/categories";
/// Route prefix under which tag listings live.
pub const TAG_ROUTE: &str = "/tags";
