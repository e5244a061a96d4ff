//! # folio
//!
//! The data core of a personal blog theme. Page components stay in the
//! presentation layer; this crate prepares what they render:
//!
//! - **toc**: hierarchical section numbers for a post's table of contents
//! - **taxonomy**: sorted category listings, the two-level sidebar tree with
//!   the active category highlighted, and the tag cloud
//! - **listing**: pagination links, post ordering and filtering, dates
//! - **source**: where content artifacts (`posts.json`, `category-data.json`,
//!   ...) are read from
//!
//! A [`Site`] loads every artifact once through a [`SiteBuilder`] and passes
//! the parsed data explicitly into the components above. The components
//! themselves are pure functions over in-memory data.

// Re-export member crates
pub use folio_listing as listing;
pub use folio_source as source;
pub use folio_taxonomy as taxonomy;
pub use folio_toc as toc;
pub use folio_types as types;

pub mod config;
pub mod error;
pub mod site;
pub mod views;

pub use config::{SiteConfig, TagCloudConfig};
pub use error::FolioError;
pub use site::{BLOG_ROUTE, Site, SiteBuilder};
pub use views::{HomeView, ListView, NavLink, PostCard, PostView, TermLink, TocLine};

// Re-export commonly used types from member crates
pub use folio_listing::{PageLinks, Pagination};
pub use folio_source::{ContentSource, FilesystemSource, InMemorySource, SourceError};
pub use folio_taxonomy::{ActiveCategory, CategoryData, CategoryEntry, SidebarNode, TagCount, TagWeight};
pub use folio_types::{Author, HeadingEntry, NumberedHeading, Post, PostSummary};
