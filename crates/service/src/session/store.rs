use async_trait::async_trait;

use crate::errors::SessionError;

/// Persistence for the admin session token.
/// Implementations can be file-backed, in-memory, or an OS keychain.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, SessionError>;
    async fn save(&self, token: String) -> Result<(), SessionError>;
    async fn clear(&self) -> Result<(), SessionError>;
}
