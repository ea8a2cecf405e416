//! Schema definition changes must come with a migration.
//!
//! Both steps are existence queries over the change set; no file content is
//! read. When several schema files change only the first one is named, but
//! any of them triggers the migration requirement.

use regex::Regex;
use tracing::debug;

use super::{compile, Policy};
use crate::config::SchemaMigrationConfig;
use crate::error::Error;
use crate::report::{Reporter, Severity};
use crate::review::Review;

const MISSING_MIGRATION: &str = "No schema migrations detected. Please add a new migration.";

pub struct SchemaMigration {
    schema_files: Regex,
    migration_files: Regex,
    severity: Severity,
}

impl SchemaMigration {
    pub fn from_config(config: &SchemaMigrationConfig) -> Result<Self, Error> {
        Ok(Self {
            schema_files: compile("schema_migration.schema_files", &config.schema_files)?,
            migration_files: compile(
                "schema_migration.migration_files",
                &config.migration_files,
            )?,
            severity: config.severity,
        })
    }

    fn changed_message(schema: &str) -> String {
        format!(
            "# Schema changes detected:\n- {}\n\n**Please make sure you updated your types accordingly.**\n",
            schema
        )
    }
}

impl Policy for SchemaMigration {
    fn name(&self) -> &'static str {
        "schema_migration"
    }

    fn check(&self, review: &Review, reporter: &mut dyn Reporter) -> Result<(), Error> {
        let changes = review.changes();
        let Some(&schema) = changes.grep(&self.schema_files).first() else {
            return Ok(());
        };

        reporter.advisory(&Self::changed_message(schema), None);

        if changes.any(&self.migration_files) {
            debug!(schema, "Schema change has a migration");
        } else {
            self.severity.emit(reporter, MISSING_MIGRATION, Some(schema));
        }

        Ok(())
    }
}
