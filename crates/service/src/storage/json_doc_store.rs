use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Whole-document JSON file store.
///
/// Keeps the complete document in memory behind a `RwLock` and persists
/// every replacement to a single JSON file. The write lock is held across
/// the file write, so concurrent replacements of the same document cannot
/// interleave, and the on-disk swap goes through a sibling temp file plus
/// `rename`, so a crash mid-write leaves the previous version intact. A
/// reader always sees the fully-old or fully-new document, never a mix.
#[derive(Clone)]
pub struct JsonDocStore<T> {
    inner: Arc<RwLock<T>>,
    file_path: PathBuf,
}

impl<T> JsonDocStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync,
{
    /// Initialize the store from a path. Creates the file with the given
    /// default document if missing; an unparseable file also falls back to
    /// the default rather than failing startup.
    pub async fn new<P: Into<PathBuf>>(path: P, default: T) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|_| default.clone()),
            Err(_) => {
                write_atomic(&file_path, &default).await?;
                default
            }
        };

        Ok(Self { inner: Arc::new(RwLock::new(doc)), file_path })
    }

    /// Current full document.
    pub async fn get(&self) -> T {
        self.inner.read().await.clone()
    }

    /// Replace the whole document. The new contents hit disk before the
    /// in-memory swap becomes visible, so a failed write leaves both the
    /// file and the served document on the previous version.
    pub async fn replace(&self, doc: T) -> Result<(), ServiceError> {
        let mut guard = self.inner.write().await;
        write_atomic(&self.file_path, &doc).await?;
        *guard = doc;
        Ok(())
    }
}

async fn write_atomic<T: serde::Serialize>(path: &Path, doc: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(doc).map_err(|e| ServiceError::Db(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    fs::rename(&tmp, path).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn json_doc_store_replace_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_doc_store_{}.json", Uuid::new_v4()));
        let store = JsonDocStore::new(&tmp, Vec::<String>::new()).await?;

        // initially the default
        assert!(store.get().await.is_empty());

        store.replace(vec!["a".to_string(), "b".to_string()]).await?;
        assert_eq!(store.get().await, vec!["a".to_string(), "b".to_string()]);

        // reload from disk to ensure persistence
        let reloaded = JsonDocStore::new(&tmp, Vec::<String>::new()).await?;
        assert_eq!(reloaded.get().await, vec!["a".to_string(), "b".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unparseable_file_falls_back_to_default() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_doc_store_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{ not json").await?;
        let store = JsonDocStore::new(&tmp, vec!["fallback".to_string()]).await?;
        assert_eq!(store.get().await, vec!["fallback".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn replace_is_atomic_under_concurrency() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_doc_store_{}.json", Uuid::new_v4()));
        let initial = vec!["init".to_string(); 32];
        let doc_a = vec!["a".to_string(); 32];
        let doc_b = vec!["b".to_string(); 32];
        let store = JsonDocStore::new(&tmp, initial.clone()).await?;

        let mut tasks = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            let doc = if i % 2 == 0 { doc_a.clone() } else { doc_b.clone() };
            tasks.push(tokio::spawn(async move { store.replace(doc).await }));
        }
        for _ in 0..16 {
            let store = store.clone();
            let (initial, doc_a, doc_b) = (initial.clone(), doc_a.clone(), doc_b.clone());
            tasks.push(tokio::spawn(async move {
                let seen = store.get().await;
                // Never a mix: exactly one of the full documents.
                assert!(seen == initial || seen == doc_a || seen == doc_b);
                Ok(())
            }));
        }
        for t in tasks {
            t.await??;
        }

        // The final state is one full document, and the file matches it.
        let final_doc = store.get().await;
        assert!(final_doc == doc_a || final_doc == doc_b);
        let reloaded = JsonDocStore::new(&tmp, Vec::<String>::new()).await?;
        assert_eq!(reloaded.get().await, final_doc);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
