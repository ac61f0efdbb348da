use indexmap::{IndexMap, IndexSet};

use crate::validator::FileName;

/// Distinct accepted base names, grouped by extension.
///
/// Extensions and names keep first-seen order so iteration is deterministic
/// for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    extensions: IndexMap<String, IndexSet<String>>,
}

impl Aggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted file. Returns `false` if the pair was already present.
    pub fn insert(&mut self, file_name: FileName) -> bool {
        self.extensions
            .entry(file_name.extension)
            .or_default()
            .insert(file_name.name)
    }

    /// Union `other` into `self`, extension by extension.
    pub fn merge(&mut self, other: Self) {
        for (extension, names) in other.extensions {
            self.extensions.entry(extension).or_default().extend(names);
        }
    }

    /// Number of distinct names seen with `extension`.
    #[must_use]
    pub fn count(&self, extension: &str) -> usize {
        self.extensions.get(extension).map_or(0, IndexSet::len)
    }

    /// `(extension, distinct name count)` pairs in first-seen order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.extensions
            .iter()
            .map(|(extension, names)| (extension.as_str(), names.len()))
    }

    #[must_use]
    pub fn names(&self, extension: &str) -> Option<&IndexSet<String>> {
        self.extensions.get(extension)
    }

    /// Number of distinct extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
