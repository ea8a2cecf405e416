//! The change under review: a root directory and its changed files.

use std::path::{Path, PathBuf};

use crate::changes::ChangeSet;
use crate::error::Error;

/// Read-only input shared by every policy in a run.
#[derive(Debug, Clone)]
pub struct Review {
    root: PathBuf,
    changes: ChangeSet,
}

impl Review {
    pub fn new(root: impl Into<PathBuf>, changes: ChangeSet) -> Self {
        Self {
            root: root.into(),
            changes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    /// Read the current content of a changed file. Not cached.
    pub fn read(&self, path: &str) -> Result<String, Error> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| Error::Read { path: full, source })
    }
}
