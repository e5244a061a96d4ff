//! Outline numbering for a post's table of contents.
//!
//! Headings arrive as a flat list in document order, each with a depth.
//! [`number`] walks that list once and attaches a legal-style section number
//! (`1`, `1.1`, `1.2`, `2`, ...) to every entry.
//!
//! The counter stack only ever grows by one level per heading. A jump from
//! depth 1 straight to depth 3 therefore yields `1.1`, not `1.0.1`: the
//! length of the stack, not the raw depth, decides how many components the
//! number has.

mod counter;

pub use counter::SectionCounter;

use folio_types::{HeadingEntry, NumberedHeading};
use log::trace;

/// Numbers every heading of one document.
///
/// Uses a fresh [`SectionCounter`], so numbering never leaks between posts.
pub fn number(entries: &[HeadingEntry]) -> Vec<NumberedHeading> {
    let mut counter = SectionCounter::new();
    let numbered: Vec<NumberedHeading> = entries
        .iter()
        .map(|entry| NumberedHeading {
            heading: entry.clone(),
            number: counter.advance(entry.depth),
        })
        .collect();
    trace!("Numbered {} toc entries", numbered.len());
    numbered
}
