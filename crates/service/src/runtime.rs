//! Runtime wiring shared by front ends.
//!
//! Thin layer over `common::env` and `configs` so binaries get a ready
//! client without assembling the session store themselves.

use crate::api::ApiClient;
use crate::session::{FileTokenStore, Session};

/// Ensure the directory holding the session file exists.
pub async fn ensure_env(session_path: &str) -> anyhow::Result<()> {
    common::env::ensure_state_dir(session_path).await
}

/// Client backed by the file session configured in `cfg`.
pub async fn connect(cfg: &configs::AppConfig) -> anyhow::Result<ApiClient> {
    ensure_env(&cfg.session.path).await?;
    let store = FileTokenStore::open(&cfg.session.path).await?;
    let client = ApiClient::from_config(&cfg.api, Session::new(store))?;
    Ok(client)
}
