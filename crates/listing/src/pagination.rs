use crate::error::ListingError;
use serde::{Deserialize, Serialize};

/// Position within a paginated listing. Both numbers start at 1.
///
/// Only [`Pagination::new`] builds one, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PageNumbers")]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageNumbers {
    current_page: u32,
    total_pages: u32,
}

impl TryFrom<PageNumbers> for Pagination {
    type Error = ListingError;

    fn try_from(numbers: PageNumbers) -> Result<Self, Self::Error> {
        Self::new(numbers.current_page, numbers.total_pages)
    }
}

/// Everything the previous/next controls need to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: u32,
    pub next_page: u32,
    /// `None` when there is no previous page.
    pub prev_href: Option<String>,
    /// `None` when there is no next page.
    pub next_href: Option<String>,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Result<Self, ListingError> {
        if current_page == 0 || total_pages == 0 {
            return Err(ListingError::InvalidPage {
                current: current_page,
                total: total_pages,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
        })
    }

    /// Pagination for `current_page` of a listing with `item_count` items.
    pub fn for_items(
        current_page: u32,
        item_count: usize,
        per_page: usize,
    ) -> Result<Self, ListingError> {
        Self::new(current_page, total_pages(item_count, per_page)?)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn prev_page(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1)
    }

    /// Controls are only rendered for listings spanning more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Resolves link targets under `/{base}`.
    ///
    /// Page 1 lives at the bare listing path `/{base}/`; every other page at
    /// `/{base}/page/{n}`. The previous link collapses to the bare path when it
    /// points at page 1, the next link always uses the indexed form.
    pub fn links(&self, base: &str) -> PageLinks {
        let prev_href = self.has_prev().then(|| {
            let target = self.prev_page();
            if target == 1 {
                format!("/{base}/")
            } else {
                format!("/{base}/page/{target}")
            }
        });
        let next_href = self
            .has_next()
            .then(|| format!("/{base}/page/{}", self.next_page()));

        PageLinks {
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            prev_page: self.prev_page(),
            next_page: self.next_page(),
            prev_href,
            next_href,
        }
    }
}

/// Number of pages needed for `item_count` items; an empty listing still has one page.
pub fn total_pages(item_count: usize, per_page: usize) -> Result<u32, ListingError> {
    if per_page == 0 {
        return Err(ListingError::ZeroPageSize);
    }
    let pages = item_count.div_ceil(per_page).max(1);
    Ok(u32::try_from(pages).unwrap_or(u32::MAX))
}

/// Items shown on `page`, or `None` when the page is out of range.
pub fn page_slice<T>(items: &[T], page: u32, per_page: usize) -> Option<&[T]> {
    if page == 0 || per_page == 0 {
        return None;
    }
    let start = (page as usize - 1).checked_mul(per_page)?;
    if start >= items.len() && !(page == 1 && items.is_empty()) {
        return None;
    }
    let end = start.saturating_add(per_page).min(items.len());
    Some(&items[start..end])
}

/// First segment of a route path: `/blog/page/3` gives `blog`.
pub fn base_segment(pathname: &str) -> &str {
    pathname.split('/').nth(1).unwrap_or_default()
}
