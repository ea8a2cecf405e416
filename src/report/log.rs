//! Recording reporter and output rendering.

use serde::Serialize;
use tracing::debug;

use super::{Reporter, Severity};
use crate::error::Error;

/// One message emitted during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub message: String,
}

/// Collects reports in emission order and decides the run outcome.
#[derive(Debug, Default)]
pub struct ReviewLog {
    reports: Vec<Report>,
}

#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    blocking: usize,
    advisory: usize,
    reports: &'a [Report],
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn blocking_count(&self) -> usize {
        self.count(Severity::Blocking)
    }

    pub fn advisory_count(&self) -> usize {
        self.count(Severity::Advisory)
    }

    /// The run fails iff anything blocking was reported.
    pub fn is_failed(&self) -> bool {
        self.blocking_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.reports.iter().filter(|r| r.severity == severity).count()
    }

    fn record(&mut self, severity: Severity, message: &str, file: Option<&str>) {
        debug!(%severity, file = file.unwrap_or("-"), "Recorded report");
        self.reports.push(Report {
            severity,
            file: file.map(str::to_string),
            message: message.to_string(),
        });
    }

    /// Plain-text rendering, one block per report plus a tally line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.reports {
            let label = match (report.severity, &report.file) {
                (Severity::Blocking, _) => "fail",
                (_, Some(_)) => "warn",
                (_, None) => "message",
            };
            match &report.file {
                Some(file) => out.push_str(&format!("{} {}: {}\n", label, file, report.message)),
                None => out.push_str(&format!("{}: {}\n", label, report.message)),
            }
        }
        out.push_str(&format!(
            "{} blocking, {} advisory\n",
            self.blocking_count(),
            self.advisory_count()
        ));
        out
    }

    pub fn render_json(&self) -> Result<String, Error> {
        let out = JsonOut {
            ok: !self.is_failed(),
            blocking: self.blocking_count(),
            advisory: self.advisory_count(),
            reports: &self.reports,
        };
        Ok(serde_json::to_string_pretty(&out)?)
    }
}

impl Reporter for ReviewLog {
    fn advisory(&mut self, message: &str, file: Option<&str>) {
        self.record(Severity::Advisory, message, file);
    }

    fn blocking(&mut self, message: &str, file: Option<&str>) {
        self.record(Severity::Blocking, message, file);
    }
}
