//! Reporting channel: severities, the reporter seam, and the review log.

pub mod log;

pub use log::{Report, ReviewLog};

use serde::{Deserialize, Serialize};

/// How a report is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Discarded.
    #[serde(alias = "noop")]
    Silent,
    /// Visible, never affects the outcome.
    #[serde(alias = "message", alias = "warn")]
    Advisory,
    /// Visible and fails the run.
    #[serde(alias = "fail")]
    Blocking,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Silent => write!(f, "silent"),
            Severity::Advisory => write!(f, "advisory"),
            Severity::Blocking => write!(f, "blocking"),
        }
    }
}

/// Destination for review messages.
pub trait Reporter {
    /// Post a visible, non-blocking message, optionally tied to a file.
    fn advisory(&mut self, message: &str, file: Option<&str>);

    /// Post a visible message and mark the run as failed.
    fn blocking(&mut self, message: &str, file: Option<&str>);
}

/// A resolved reporting channel.
pub type Channel = fn(&mut dyn Reporter, &str, Option<&str>);

impl Severity {
    /// Resolve the channel this severity reports through.
    pub fn channel(self) -> Channel {
        match self {
            Severity::Silent => discard,
            Severity::Advisory => advise,
            Severity::Blocking => block,
        }
    }

    /// Send `message` through this severity's channel.
    pub fn emit(self, reporter: &mut dyn Reporter, message: &str, file: Option<&str>) {
        (self.channel())(reporter, message, file)
    }
}

fn discard(_reporter: &mut dyn Reporter, _message: &str, _file: Option<&str>) {}

fn advise(reporter: &mut dyn Reporter, message: &str, file: Option<&str>) {
    reporter.advisory(message, file);
}

fn block(reporter: &mut dyn Reporter, message: &str, file: Option<&str>) {
    reporter.blocking(message, file);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        severity: Severity,
    }

    fn parse(value: &str) -> Severity {
        let wrapper: Wrapper = toml::from_str(&format!("severity = \"{}\"", value)).unwrap();
        wrapper.severity
    }

    #[test]
    fn test_severity_names_and_aliases() {
        assert_eq!(parse("silent"), Severity::Silent);
        assert_eq!(parse("noop"), Severity::Silent);
        assert_eq!(parse("advisory"), Severity::Advisory);
        assert_eq!(parse("message"), Severity::Advisory);
        assert_eq!(parse("warn"), Severity::Advisory);
        assert_eq!(parse("blocking"), Severity::Blocking);
        assert_eq!(parse("fail"), Severity::Blocking);
    }

    #[test]
    fn test_channel_dispatch() {
        let mut log = ReviewLog::new();

        Severity::Silent.emit(&mut log, "dropped", None);
        Severity::Advisory.emit(&mut log, "heads up", Some(".env"));
        Severity::Blocking.emit(&mut log, "no", Some("src/app.ts"));

        let reports = log.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].severity, Severity::Advisory);
        assert_eq!(reports[0].file.as_deref(), Some(".env"));
        assert_eq!(reports[1].severity, Severity::Blocking);
        assert!(log.is_failed());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Blocking.to_string(), "blocking");
        assert_eq!(Severity::Silent.to_string(), "silent");
    }
}
