use crate::{ContentSource, SourceError};
use std::collections::HashMap;

/// Artifacts handed over up front, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    artifacts: HashMap<String, Vec<u8>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an artifact, replacing one of the same name.
    pub fn with(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.artifacts.insert(name.into(), data.into());
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<N: Into<String>, D: Into<Vec<u8>>> FromIterator<(N, D)> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = (N, D)>>(iter: I) -> Self {
        Self {
            artifacts: iter
                .into_iter()
                .map(|(name, data)| (name.into(), data.into()))
                .collect(),
        }
    }
}

impl ContentSource for InMemorySource {
    fn load_optional(&self, name: &str) -> Result<Option<Vec<u8>>, SourceError> {
        Ok(self.artifacts.get(name).cloned())
    }

    fn describe(&self) -> String {
        format!("{} in-memory artifacts", self.artifacts.len())
    }
}
