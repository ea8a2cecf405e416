//! Forbid leftover console calls in script files.

use super::{compile, Policy};
use crate::config::DebugStatementsConfig;
use crate::error::Error;
use crate::report::Reporter;
use crate::review::Review;
use crate::scan::{scan, LineRule};

pub struct DebugStatements {
    rule: LineRule,
}

impl DebugStatements {
    pub fn from_config(config: &DebugStatementsConfig) -> Result<Self, Error> {
        Ok(Self {
            rule: LineRule {
                files: compile("debug_statements.files", &config.files)?,
                lines: compile("debug_statements.lines", &config.lines)?,
                severity: config.severity,
            },
        })
    }
}

impl Policy for DebugStatements {
    fn name(&self) -> &'static str {
        "debug_statements"
    }

    fn check(&self, review: &Review, reporter: &mut dyn Reporter) -> Result<(), Error> {
        scan(
            review,
            &self.rule,
            |file, _line| format!("The file \"{}\" may contain console commands.", file),
            reporter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::ChangeSet;
    use crate::report::{ReviewLog, Severity};
    use std::fs;
    use tempfile::TempDir;

    fn policy() -> DebugStatements {
        DebugStatements::from_config(&DebugStatementsConfig::default()).unwrap()
    }

    fn write(temp: &TempDir, path: &str, content: &str) {
        let full = temp.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_console_log_blocks() {
        let temp = TempDir::new().unwrap();
        write(&temp, "src/app.ts", "const x = 1;\nconsole.log(\"x\")\n");
        let review = Review::new(temp.path(), ["src/app.ts"].into_iter().collect());
        let mut log = ReviewLog::new();

        policy().check(&review, &mut log).unwrap();

        assert_eq!(log.reports().len(), 1);
        let report = &log.reports()[0];
        assert_eq!(report.severity, Severity::Blocking);
        assert_eq!(report.file.as_deref(), Some("src/app.ts"));
        assert!(report.message.contains("src/app.ts"));
        assert!(log.is_failed());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        write(&temp, "web/Widget.JSX", "console.warn(1)\nconsole.error(2)\n");
        let review = Review::new(temp.path(), ["web/Widget.JSX"].into_iter().collect());
        let mut log = ReviewLog::new();

        policy().check(&review, &mut log).unwrap();

        assert_eq!(log.blocking_count(), 2);
    }

    #[test]
    fn test_non_script_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write(&temp, "docs/guide.md", "console.log(\"example\")\n");
        write(&temp, "src/clean.ts", "export const a = 1;\n");
        let changes: ChangeSet = ["docs/guide.md", "src/clean.ts"].into_iter().collect();
        let review = Review::new(temp.path(), changes);
        let mut log = ReviewLog::new();

        policy().check(&review, &mut log).unwrap();

        assert!(log.reports().is_empty());
    }

    #[test]
    fn test_configured_severity() {
        let temp = TempDir::new().unwrap();
        write(&temp, "a.js", "console.debug(1)\n");
        let review = Review::new(temp.path(), ["a.js"].into_iter().collect());
        let config = DebugStatementsConfig {
            severity: Severity::Advisory,
            ..Default::default()
        };
        let mut log = ReviewLog::new();

        DebugStatements::from_config(&config)
            .unwrap()
            .check(&review, &mut log)
            .unwrap();

        assert_eq!(log.advisory_count(), 1);
        assert!(!log.is_failed());
    }
}
