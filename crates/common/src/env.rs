//! Environment/runtime helpers
//!
//! Sanity checks to ensure the local state directory exists before the
//! session file is opened.

use std::path::Path;

use tracing::debug;

/// Ensure the parent directory of a state file exists.
pub async fn ensure_state_dir(file: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = file.as_ref();
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        debug!(dir = %parent.display(), "creating state directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
