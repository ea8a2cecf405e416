//! The set of files touched by the change under review.

pub mod git;

use regex::Regex;

/// Ordered, immutable list of changed paths, relative to the review root.
///
/// Order only affects report order. Duplicates are kept as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<String>,
}

impl ChangeSet {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Paths matching `pattern`, in change-set order.
    pub fn grep(&self, pattern: &Regex) -> Vec<&str> {
        self.paths
            .iter()
            .map(String::as_str)
            .filter(|path| pattern.is_match(path))
            .collect()
    }

    /// Whether any path matches `pattern`.
    pub fn any(&self, pattern: &Regex) -> bool {
        self.paths.iter().any(|path| pattern.is_match(path))
    }
}

impl<S: Into<String>> FromIterator<S> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
