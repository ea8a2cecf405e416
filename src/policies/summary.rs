//! Informational list of every changed file.

use super::Policy;
use crate::error::Error;
use crate::report::Reporter;
use crate::review::Review;

pub struct Summary;

impl Summary {
    fn message(paths: &[String]) -> String {
        format!("Changed Files in this PR: \n - {}", paths.join("\n - "))
    }
}

impl Policy for Summary {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn check(&self, review: &Review, reporter: &mut dyn Reporter) -> Result<(), Error> {
        let changes = review.changes();
        if changes.is_empty() {
            return Ok(());
        }
        reporter.advisory(&Self::message(changes.paths()), None);
        Ok(())
    }
}
