use crate::TAG_ROUTE;
use crate::collate::name_collator;
use crate::error::TaxonomyError;
use crate::slug::slugify;
use folio_types::Post;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MIN_FONT_SIZE: u32 = 12;
pub const DEFAULT_MAX_FONT_SIZE: u32 = 35;

/// Tag slug to number of posts carrying that tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCount(BTreeMap<String, u32>);

impl TagCount {
    /// Counts slugged tags across `posts`.
    ///
    /// This is what the offline build step writes to `tag-data.json`. Every
    /// post given is counted, drafts included; the caller decides which
    /// posts are visible.
    pub fn tally<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Self {
        let mut counts = BTreeMap::new();
        for post in posts {
            for tag in &post.tags {
                *counts.entry(slugify(tag)).or_insert(0) += 1;
            }
        }
        Self(counts)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn get(&self, slug: &str) -> Option<u32> {
        self.0.get(slug).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A tag sized for the tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagWeight {
    pub value: String,
    pub count: u32,
    pub font_size: u32,
}

impl TagWeight {
    pub fn href(&self) -> String {
        format!("{TAG_ROUTE}/{}", slugify(&self.value))
    }
}

/// Sizes every tag linearly between `min_size` and `max_size` by its count.
///
/// When all tags share one count there is no range to interpolate over and
/// every tag gets the rounded midpoint. Output is sorted by tag name.
pub fn tag_cloud(counts: &TagCount, min_size: u32, max_size: u32) -> Vec<TagWeight> {
    let (min, max) = match counts.iter().map(|(_, c)| c).minmax().into_option() {
        Some(bounds) => bounds,
        None => return Vec::new(),
    };

    let size_for = |count: u32| -> u32 {
        let (lo, hi) = (f64::from(min_size), f64::from(max_size));
        if max == min {
            return ((lo + hi) / 2.0).round() as u32;
        }
        let t = f64::from(count - min) / f64::from(max - min);
        (lo + t * (hi - lo)).round() as u32
    };

    let mut collator = name_collator();
    counts
        .iter()
        .sorted_by(|(a, _), (b, _)| collator.collate(*a, *b))
        .map(|(value, count)| TagWeight {
            value: value.to_string(),
            count,
            font_size: size_for(count),
        })
        .collect()
}
