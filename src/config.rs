//! Configuration management for prcheck.
//!
//! Policies read their patterns and severities from `prcheck.toml` at the
//! review root. Every field has a default, so the file is optional and may
//! be partial.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::report::Severity;

/// Config file name, relative to the review root.
pub const CONFIG_FILE: &str = "prcheck.toml";

/// Top-level prcheck configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub debug_statements: DebugStatementsConfig,

    #[serde(default)]
    pub schema_migration: SchemaMigrationConfig,

    #[serde(default)]
    pub protected_files: ProtectedFilesConfig,
}

/// Revisions used to compute the change set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_head")]
    pub head: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            head: default_head(),
        }
    }
}

/// Changed-files summary message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Leftover console calls in script files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugStatementsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_blocking")]
    pub severity: Severity,

    /// Pattern over changed paths.
    #[serde(default = "default_script_files")]
    pub files: String,

    /// Pattern over single lines of content.
    #[serde(default = "default_debug_lines")]
    pub lines: String,
}

impl Default for DebugStatementsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Blocking,
            files: default_script_files(),
            lines: default_debug_lines(),
        }
    }
}

/// Schema definition changes must ship with a migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaMigrationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_schema_files")]
    pub schema_files: String,

    #[serde(default = "default_migration_files")]
    pub migration_files: String,

    /// Severity of the missing-migration report.
    #[serde(default = "default_blocking")]
    pub severity: Severity,
}

impl Default for SchemaMigrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            schema_files: default_schema_files(),
            migration_files: default_migration_files(),
            severity: Severity::Blocking,
        }
    }
}

/// Paths that are rarely edited on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedFilesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_advisory")]
    pub severity: Severity,

    /// Path fragments (regex), matched as one alternation.
    #[serde(default = "default_protected_paths")]
    pub paths: Vec<String>,
}

impl Default for ProtectedFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Advisory,
            paths: default_protected_paths(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base() -> String {
    "origin/main".to_string()
}

fn default_head() -> String {
    "HEAD".to_string()
}

fn default_blocking() -> Severity {
    Severity::Blocking
}

fn default_advisory() -> Severity {
    Severity::Advisory
}

fn default_script_files() -> String {
    r"(?i)\.[tj]sx?$".to_string()
}

fn default_debug_lines() -> String {
    r"console\.[a-z]+".to_string()
}

fn default_schema_files() -> String {
    r"schema\.prisma".to_string()
}

fn default_migration_files() -> String {
    "prisma/migrations".to_string()
}

fn default_protected_paths() -> Vec<String> {
    vec![
        r"\.env".to_string(),
        r"\.github".to_string(),
        r"\.vscode".to_string(),
    ]
}

impl Config {
    /// Default config path for a review root.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load config from `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load config from `path`, falling back to defaults if it doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Write config to `path` with a header comment.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = self.to_toml()?;
        let with_header = format!(
            "# prcheck configuration\n# Patterns are regular expressions matched against changed paths and lines\n\n{}",
            content
        );
        std::fs::write(path, with_header)?;
        Ok(())
    }
}
