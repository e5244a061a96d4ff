use itertools::Itertools;
use std::cmp::Ordering;
use std::num::NonZeroU8;

/// Running per-level counters for one document's outline.
#[derive(Debug, Clone, Default)]
pub struct SectionCounter {
    counters: Vec<u32>,
}

impl SectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the next heading at `depth` and returns its dotted number.
    ///
    /// A deeper heading opens exactly one new level (starting at 1) no matter
    /// how many levels it skips. A heading at the current level increments the
    /// last counter. A shallower heading closes the levels below it and
    /// increments its own.
    pub fn advance(&mut self, depth: NonZeroU8) -> String {
        let depth = usize::from(depth.get());
        match self.counters.len().cmp(&depth) {
            Ordering::Less => self.counters.push(1),
            Ordering::Equal => self.counters[depth - 1] += 1,
            Ordering::Greater => {
                self.counters.truncate(depth);
                self.counters[depth - 1] += 1;
            }
        }
        self.current()
    }

    /// The number of the most recent heading, empty before the first one.
    pub fn current(&self) -> String {
        self.counters.iter().join(".")
    }

    pub fn level(&self) -> usize {
        self.counters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: u8) -> NonZeroU8 {
        NonZeroU8::new(n).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let counter = SectionCounter::new();
        assert_eq!(counter.current(), "");
        assert_eq!(counter.level(), 0);
    }

    #[test]
    fn test_advance_tracks_level() {
        let mut counter = SectionCounter::new();
        assert_eq!(counter.advance(d(1)), "1");
        assert_eq!(counter.advance(d(4)), "1.1");
        assert_eq!(counter.level(), 2);
        assert_eq!(counter.advance(d(4)), "1.1.1");
        assert_eq!(counter.advance(d(1)), "2");
        assert_eq!(counter.level(), 1);
    }
}
