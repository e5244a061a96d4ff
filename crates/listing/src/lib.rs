//! Post listings for the folio blog core.
//!
//! - **pagination**: previous/next page arithmetic and link targets
//! - **posts**: ordering, draft filtering, category filtering and neighbours
//! - **dates**: parsing content dates and formatting them per locale

pub mod dates;
pub mod error;
pub mod pagination;
pub mod posts;

pub use dates::{format_date, parse_date};
pub use error::ListingError;
pub use pagination::{PageLinks, Pagination, base_segment, page_slice, total_pages};
pub use posts::{Neighbors, category_title, filter_by_category, neighbors, published, sort_newest_first};
