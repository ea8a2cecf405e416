//! Show the effective configuration.

use std::path::Path;

use crate::config::Config;
use crate::error::Error;

/// Print the config in effect, noting where it came from.
pub fn show(path: &Path, config: &Config) -> Result<(), Error> {
    if path.exists() {
        println!("# Loaded from {}", path.display());
    } else {
        println!("# No config at {}, using defaults", path.display());
    }
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
