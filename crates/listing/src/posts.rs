use crate::dates::parse_date;
use folio_taxonomy::slugify;
use folio_types::Post;
use log::warn;
use std::cmp::Reverse;

/// Sorts posts newest first. Posts with unparseable dates go last.
///
/// The sort is stable, so posts sharing a date keep their relative order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| {
        let date = parse_date(&post.date);
        if let Err(e) = &date {
            warn!("Post '{}' sorts last: {}", post.slug, e);
        }
        Reverse(date.ok())
    });
}

/// Posts visible on the site: drafts are dropped unless `include_drafts` is set.
pub fn published(posts: &[Post], include_drafts: bool) -> impl Iterator<Item = &Post> {
    posts.iter().filter(move |post| include_drafts || !post.draft)
}

/// Posts filed under the category whose slug is `category_slug`.
pub fn filter_by_category<'a>(posts: &'a [Post], category_slug: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.categories.iter().any(|c| slugify(c) == category_slug))
        .collect()
}

/// Heading for a category page built from its decoded route segment.
///
/// The first character is uppercased and the spaces in the remainder become
/// dashes: `taipei city` gives `Taipei-city`.
pub fn category_title(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.as_str().split(' ').collect::<Vec<_>>().join("-");
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// The posts either side of one post in a newest-first listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    /// The next older post.
    pub prev: Option<&'a Post>,
    /// The next newer post.
    pub next: Option<&'a Post>,
}

/// Finds the neighbours of the post with `slug` in a newest-first list.
pub fn neighbors<'a>(posts: &'a [Post], slug: &str) -> Option<Neighbors<'a>> {
    let index = posts.iter().position(|post| post.slug == slug)?;
    Some(Neighbors {
        prev: posts.get(index + 1),
        next: index.checked_sub(1).and_then(|i| posts.get(i)),
    })
}
