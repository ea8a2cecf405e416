//! Run the review.

use std::path::Path;

use tracing::info;

use super::{changed_files, Format, RangeArgs};
use crate::changes::ChangeSet;
use crate::config::Config;
use crate::error::Error;
use crate::policies;
use crate::report::ReviewLog;
use crate::review::Review;

/// Run the check command and return the process exit code.
///
/// Exit code is 1 iff a blocking report was emitted.
pub fn run(
    root: &Path,
    config: &Config,
    range: &RangeArgs,
    files: Option<Vec<String>>,
    format: Format,
) -> Result<i32, Error> {
    let changes = match files {
        Some(files) => ChangeSet::new(files),
        None => changed_files(root, config, range)?,
    };

    let policies = policies::build(config)?;
    let review = Review::new(root, changes);
    let mut log = ReviewLog::new();
    policies::run_all(&policies, &review, &mut log)?;

    match format {
        Format::Text => print!("{}", log.render_text()),
        Format::Json => println!("{}", log.render_json()?),
    }

    info!(
        blocking = log.blocking_count(),
        advisory = log.advisory_count(),
        "Review finished"
    );

    Ok(if log.is_failed() { 1 } else { 0 })
}
