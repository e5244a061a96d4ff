use crate::error::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Category name to number of posts filed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCount(BTreeMap<String, u32>);

impl CategoryCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post count for `name`, or `None` when the sidecar has no entry.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, count: u32) {
        self.0.insert(name.into(), count);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for CategoryCount {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Parent category name to its child names, in the order the build step wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRelation(BTreeMap<String, Vec<String>>);

impl CategoryRelation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self, parent: &str) -> Option<&[String]> {
        self.0.get(parent).map(Vec::as_slice)
    }

    pub fn insert(&mut self, parent: impl Into<String>, children: Vec<String>) {
        self.0.insert(parent.into(), children);
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every name mentioned in the relation, parents and children alike.
    pub fn referenced(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|(parent, children)| std::iter::once(parent).chain(children))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The category sidecar as generated by the offline build step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(rename = "catgCount")]
    pub counts: CategoryCount,
    #[serde(rename = "catgRel", default)]
    pub relations: CategoryRelation,
}

impl CategoryData {
    pub fn new(counts: CategoryCount, relations: CategoryRelation) -> Self {
        Self { counts, relations }
    }

    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Names referenced by the relation or by `post_categories` that have no count.
    ///
    /// The result is sorted and deduplicated. An empty result means the
    /// sidecar is consistent with the given posts.
    pub fn missing_counts<'a>(
        &'a self,
        post_categories: impl IntoIterator<Item = &'a str>,
    ) -> Vec<&'a str> {
        self.relations
            .referenced()
            .chain(post_categories)
            .filter(|name| self.counts.get(name).is_none())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
