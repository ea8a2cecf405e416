//! Review policies.
//!
//! Each policy is an independent check over the same read-only [`Review`].
//! They run in a fixed order and report through the injected reporter.

pub mod debug_statements;
pub mod protected_files;
pub mod schema_migration;
pub mod summary;

pub use debug_statements::DebugStatements;
pub use protected_files::ProtectedFiles;
pub use schema_migration::SchemaMigration;
pub use summary::Summary;

use regex::Regex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::report::Reporter;
use crate::review::Review;

/// A single check run once per review.
pub trait Policy {
    fn name(&self) -> &'static str;

    /// Run the check, emitting zero reports on pass.
    fn check(&self, review: &Review, reporter: &mut dyn Reporter) -> Result<(), Error>;
}

/// Build every enabled policy, in run order.
pub fn build(config: &Config) -> Result<Vec<Box<dyn Policy>>, Error> {
    let mut policies: Vec<Box<dyn Policy>> = Vec::new();

    if config.summary.enabled {
        policies.push(Box::new(Summary));
    }
    if config.debug_statements.enabled {
        policies.push(Box::new(DebugStatements::from_config(
            &config.debug_statements,
        )?));
    }
    if config.schema_migration.enabled {
        policies.push(Box::new(SchemaMigration::from_config(
            &config.schema_migration,
        )?));
    }
    if config.protected_files.enabled {
        policies.push(Box::new(ProtectedFiles::from_config(
            &config.protected_files,
        )?));
    }

    Ok(policies)
}

/// Run policies in order. A read error stops the run; blocking reports don't.
pub fn run_all(
    policies: &[Box<dyn Policy>],
    review: &Review,
    reporter: &mut dyn Reporter,
) -> Result<(), Error> {
    info!(
        policies = policies.len(),
        files = review.changes().len(),
        "Running review"
    );
    for policy in policies {
        debug!(policy = policy.name(), "Running policy");
        policy.check(review, reporter)?;
    }
    Ok(())
}

/// Compile a configured pattern, naming the config key on failure.
pub(crate) fn compile(key: &str, pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        key: key.to_string(),
        source,
    })
}
