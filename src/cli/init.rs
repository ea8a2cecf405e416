//! Write a default config file.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Error;

/// Write the default config to `path`.
pub fn run(path: &Path, force: bool) -> Result<(), Error> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }

    Config::default().save(path)?;
    info!(path = %path.display(), "Wrote default config");
    println!("Created {}", path.display());
    Ok(())
}
