use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::errors::SessionError;
use crate::session::store::TokenStore;
use crate::storage::json_map_store::JsonMapStore;

/// Key under which the token is kept in the session file.
pub const TOKEN_KEY: &str = "token";

/// Session token persisted in a small JSON file (`{"token": "..."}`).
#[derive(Clone)]
pub struct FileTokenStore {
    store: Arc<JsonMapStore<String, String>>,
}

impl FileTokenStore {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, SessionError> {
        let store = JsonMapStore::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.store.get(&TOKEN_KEY.to_string()).await)
    }

    async fn save(&self, token: String) -> Result<(), SessionError> {
        self.store.insert(TOKEN_KEY.to_string(), token).await
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.store.remove(&TOKEN_KEY.to_string()).await.map(|_| ())
    }
}
