use crate::CATEGORY_ROUTE;
use crate::active::ActiveCategory;
use crate::collate::name_collator;
use crate::data::{CategoryCount, CategoryData};
use crate::slug::slugify;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

/// One rendered category: a link in the sidebar or the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub slug: String,
    /// `None` when the sidecar has no count for this name.
    pub count: Option<u32>,
    /// Active entries render as a plain highlighted label instead of a link.
    pub active: bool,
}

impl CategoryEntry {
    fn new(name: &str, counts: &CategoryCount) -> Self {
        let count = counts.get(name);
        if count.is_none() {
            warn!("Category '{}' has no post count in the category data", name);
        }
        Self {
            name: name.to_string(),
            slug: slugify(name),
            count,
            active: false,
        }
    }

    /// Link target, absent for the active entry.
    pub fn href(&self) -> Option<String> {
        (!self.active).then(|| format!("{CATEGORY_ROUTE}/{}", self.slug))
    }

    /// Display text, e.g. `Taipei (3)`.
    pub fn label(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.name, count),
            None => self.name.clone(),
        }
    }
}

/// A top-level sidebar category and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    #[serde(flatten)]
    pub entry: CategoryEntry,
    pub children: Vec<CategoryEntry>,
}

impl SidebarNode {
    fn entries_mut(&mut self) -> impl Iterator<Item = &mut CategoryEntry> {
        std::iter::once(&mut self.entry).chain(self.children.iter_mut())
    }
}

/// Every category with its count, sorted alphabetically.
pub fn category_index(counts: &CategoryCount) -> Vec<CategoryEntry> {
    let mut collator = name_collator();
    counts
        .names()
        .sorted_by(|a, b| collator.collate(*a, *b))
        .map(|name| CategoryEntry::new(name, counts))
        .collect()
}

/// The two-level sidebar tree.
///
/// Parents are sorted alphabetically; children keep the order the build step
/// recorded. At most one entry is marked active: the first one, in render
/// order, whose slug matches `active`.
pub fn sidebar(data: &CategoryData, active: Option<&ActiveCategory>) -> Vec<SidebarNode> {
    let mut collator = name_collator();
    let mut tree: Vec<SidebarNode> = data
        .relations
        .parents()
        .sorted_by(|a, b| collator.collate(*a, *b))
        .map(|parent| SidebarNode {
            entry: CategoryEntry::new(parent, &data.counts),
            children: data
                .relations
                .children(parent)
                .unwrap_or_default()
                .iter()
                .map(|child| CategoryEntry::new(child, &data.counts))
                .collect(),
        })
        .collect();

    if let Some(active) = active {
        let hit = tree
            .iter_mut()
            .flat_map(SidebarNode::entries_mut)
            .find(|entry| active.matches(&entry.name));
        match hit {
            Some(entry) => entry.active = true,
            None => debug!("No sidebar entry matches category '{}'", active.slug()),
        }
    }

    tree
}
