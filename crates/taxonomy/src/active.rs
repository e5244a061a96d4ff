use crate::CATEGORY_ROUTE;
use crate::slug::slugify;
use crate::uri::decode_uri;
use log::debug;

/// The category selected by the current route, normalized to its slug.
///
/// Recomputed on every render from the current path; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCategory {
    slug: String,
}

impl ActiveCategory {
    /// Resolves the active category from a full route path such as
    /// `/categories/taipei-city` or `/categories/%E5%8F%B0%E5%8C%97/page/2`.
    ///
    /// Returns `None` when the path is not a category route or the segment
    /// cannot be decoded.
    pub fn from_pathname(pathname: &str) -> Option<Self> {
        let prefix = format!("{CATEGORY_ROUTE}/");
        let (_, rest) = pathname.split_once(prefix.as_str())?;
        let segment = rest.split('/').next().unwrap_or_default();
        Self::from_segment(segment)
    }

    /// Resolves the active category from a raw (still encoded) route segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        if segment.is_empty() {
            return None;
        }
        match decode_uri(segment) {
            Ok(decoded) => {
                let slug = slugify(&decoded);
                debug!("Active category segment '{}' resolved to '{}'", segment, slug);
                Some(Self { slug })
            }
            Err(e) => {
                debug!("Ignoring active category: {}", e);
                None
            }
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Whether a rendered category name refers to this category.
    pub fn matches(&self, name: &str) -> bool {
        slugify(name) == self.slug
    }
}
