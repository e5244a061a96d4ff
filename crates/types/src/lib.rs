pub mod document;
pub mod post;

pub use document::{HeadingEntry, NumberedHeading};
pub use post::{Author, Post, PostLink, PostSummary};
