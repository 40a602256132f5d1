//! Admin session state.
//!
//! The token lives behind a [`TokenStore`]; [`Session`] is the only place
//! that reads or changes it.

pub mod file;
pub mod memory;
pub mod store;

use std::sync::Arc;

use tracing::info;

use crate::errors::SessionError;
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use store::TokenStore;

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// Current token; blank values count as absent.
    pub async fn get_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.store.load().await?.filter(|t| !t.trim().is_empty()))
    }

    pub async fn set_token(&self, token: String) -> Result<(), SessionError> {
        self.store.save(token).await?;
        info!(event = "session_started", "session token stored");
        Ok(())
    }

    pub async fn clear_token(&self) -> Result<(), SessionError> {
        self.store.clear().await?;
        info!(event = "session_cleared", "session token cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.get_token().await?.is_some())
    }
}
