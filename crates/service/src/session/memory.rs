use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::SessionError;
use crate::session::store::TokenStore;

/// Process-local token store, used by tests and one-shot commands.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, SessionError> {
        self.token.lock().map_err(|_| SessionError::Storage("token lock poisoned".into()))
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot()?.clone())
    }

    async fn save(&self, token: String) -> Result<(), SessionError> {
        *self.slot()? = Some(token);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.slot()? = None;
        Ok(())
    }
}
