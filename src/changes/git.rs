//! Change-set provider backed by `git diff`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::ChangeSet;
use crate::error::Error;

/// Files created or modified between `base` and `head`.
///
/// Uses the merge-base form (`base...head`) so only the branch's own
/// changes count. Deleted files are left out since there is nothing to read.
/// Output is NUL-separated so paths come back unquoted.
pub fn changed_files(root: &Path, base: &str, head: &str) -> Result<ChangeSet, Error> {
    let range = format!("{}...{}", base, head);
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["diff", "--name-only", "-z", "--diff-filter=d", range.as_str()])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(format!(
            "git diff {} failed: {}",
            range,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let changes = parse_name_only(&stdout);
    debug!(range = %range, files = changes.len(), "Computed change set");
    Ok(changes)
}

/// Parse `git diff --name-only -z` output.
fn parse_name_only(output: &str) -> ChangeSet {
    output.split('\0').filter(|path| !path.is_empty()).collect()
}
