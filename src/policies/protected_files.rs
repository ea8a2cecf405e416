//! Flag edits to configuration paths that rarely change on purpose.

use regex::Regex;

use super::{compile, Policy};
use crate::config::ProtectedFilesConfig;
use crate::error::Error;
use crate::report::{Reporter, Severity};
use crate::review::Review;

const CAUTION: &str = "- [ ] This file is not normally edited. Double check you meant to do this.";

pub struct ProtectedFiles {
    /// `None` when no paths are configured.
    paths: Option<Regex>,
    severity: Severity,
}

impl ProtectedFiles {
    pub fn from_config(config: &ProtectedFilesConfig) -> Result<Self, Error> {
        let paths = if config.paths.is_empty() {
            None
        } else {
            let alternation = config
                .paths
                .iter()
                .map(|fragment| format!("(?:{})", fragment))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile("protected_files.paths", &alternation)?)
        };
        Ok(Self {
            paths,
            severity: config.severity,
        })
    }
}

impl Policy for ProtectedFiles {
    fn name(&self) -> &'static str {
        "protected_files"
    }

    fn check(&self, review: &Review, reporter: &mut dyn Reporter) -> Result<(), Error> {
        let Some(paths) = &self.paths else {
            return Ok(());
        };
        let channel = self.severity.channel();
        for file in review.changes().grep(paths) {
            channel(&mut *reporter, CAUTION, Some(file));
        }
        Ok(())
    }
}
