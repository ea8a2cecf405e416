//! CLI commands for prcheck.

pub mod check;
pub mod config;
pub mod files;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::changes::{git, ChangeSet};
use crate::config::Config;
use crate::error::Error;

/// prcheck - pattern-based pull request review checks
#[derive(Parser)]
#[command(name = "prcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository root that changed paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/prcheck.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every enabled policy against the changed files
    Check {
        #[command(flatten)]
        range: RangeArgs,

        /// Use these paths instead of asking git
        #[arg(long, num_args = 1..)]
        files: Option<Vec<String>>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the changed files
    Files {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Print the effective configuration
    Config,

    /// Write a default prcheck.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Revision range overrides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Base revision (defaults to git.base from config)
    #[arg(long)]
    pub base: Option<String>,

    /// Head revision (defaults to git.head from config)
    #[arg(long)]
    pub head: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Config path in effect for this invocation.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| Config::path(&self.root))
    }

    /// Load the config. An explicit `--config` must exist; the default
    /// `<root>/prcheck.toml` is optional.
    pub fn load_config(&self) -> Result<Config, Error> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_or_default(&Config::path(&self.root)),
        }
    }
}

/// Compute the change set for `range`, falling back to the configured revisions.
pub(crate) fn changed_files(
    root: &Path,
    config: &Config,
    range: &RangeArgs,
) -> Result<ChangeSet, Error> {
    let base = range.base.as_deref().unwrap_or(&config.git.base);
    let head = range.head.as_deref().unwrap_or(&config.git.head);
    git::changed_files(root, base, head)
}
