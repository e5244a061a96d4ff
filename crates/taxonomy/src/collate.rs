//! Alphabetical ordering for taxonomy names.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring, the
//! same ordering a browser's default collator applies. Accented letters sort
//! with their base letter, lowercase comes before uppercase when names differ
//! only in case, and punctuation is not ignored.

use feruca::{Collator, Tailoring};
use std::cmp::Ordering;

/// A collator for sorting many names; build one per sort and reuse it.
pub fn name_collator() -> Collator {
    // Variable weighting off: spaces and punctuation count at the first level.
    Collator::new(Tailoring::default(), false, true)
}

/// Compares two taxonomy names.
///
/// Names that collate equal fall back to comparing code points, so the order
/// is total and sorting is deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    name_collator().collate(a, b)
}
