//! Generic scan-and-report routine.
//!
//! Selects changed files by path, reads each one in full and reports every
//! line matching a content pattern. This works on whole files, not diff
//! hunks, so lines that predate the change are reported too.

use regex::Regex;
use tracing::debug;

use crate::error::Error;
use crate::report::{Reporter, Severity};
use crate::review::Review;

/// What to scan for and how loudly to report it.
#[derive(Debug, Clone)]
pub struct LineRule {
    /// Pattern over changed paths.
    pub files: Regex,
    /// Pattern over single lines of content.
    pub lines: Regex,
    pub severity: Severity,
}

/// Report every line of every selected file that matches `rule.lines`.
///
/// Reports go out in change-set order, then line order, one per matching
/// line. The first unreadable file aborts the scan.
pub fn scan<F>(
    review: &Review,
    rule: &LineRule,
    build_message: F,
    reporter: &mut dyn Reporter,
) -> Result<(), Error>
where
    F: Fn(&str, &str) -> String,
{
    let channel = rule.severity.channel();

    for file in review.changes().grep(&rule.files) {
        let content = review.read(file)?;
        let mut matches = 0;

        for line in content.lines().filter(|line| rule.lines.is_match(line)) {
            channel(&mut *reporter, &build_message(file, line), Some(file));
            matches += 1;
        }

        debug!(file, matches, "Scanned file");
    }

    Ok(())
}
