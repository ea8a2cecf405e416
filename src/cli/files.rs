//! List the files the review would see.

use std::path::Path;

use super::{changed_files, RangeArgs};
use crate::config::Config;
use crate::error::Error;

pub fn run(root: &Path, config: &Config, range: &RangeArgs) -> Result<(), Error> {
    let changes = changed_files(root, config, range)?;
    if changes.is_empty() {
        eprintln!("No changed files.");
        return Ok(());
    }
    for path in changes.paths() {
        println!("{}", path);
    }
    Ok(())
}
