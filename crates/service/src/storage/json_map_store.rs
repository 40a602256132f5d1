use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::SessionError;

/// JSON file holding a flat `HashMap<K, V>`.
///
/// The whole map is rewritten on every mutation. An unreadable or corrupt
/// file is treated as empty and replaced on the next write.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`, creating parent directories and an empty file if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, SessionError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(SessionError::storage)?;
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<K, V> = HashMap::new();
                let bytes = serde_json::to_vec(&empty).map_err(SessionError::storage)?;
                fs::write(&file_path, bytes).await.map_err(SessionError::storage)?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    async fn save(&self, map: &HashMap<K, V>) -> Result<(), SessionError> {
        let data = serde_json::to_vec_pretty(map).map_err(SessionError::storage)?;
        fs::write(&self.file_path, data).await.map_err(SessionError::storage)
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.read().await.get(key).cloned()
    }

    /// Insert or replace a value and persist.
    pub async fn insert(&self, key: K, value: V) -> Result<(), SessionError> {
        let mut map = self.inner.write().await;
        map.insert(key, value);
        self.save(&map).await
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, SessionError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(key).is_some();
        self.save(&map).await?;
        Ok(existed)
    }
}
