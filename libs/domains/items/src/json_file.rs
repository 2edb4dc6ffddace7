//! JSON document implementation of ItemStore

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, Revision, next_id};
use crate::store::ItemStore;

/// Item store backed by a single JSON array on disk.
///
/// Writes go to a sibling temp file that is renamed over the document, so
/// readers never observe a half-written array.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> ItemResult<Vec<Item>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ItemError::StoreRead(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_slice(&raw)
            .map_err(|e| ItemError::StoreRead(format!("{}: {}", self.path.display(), e)))
    }

    async fn write_items(&self, items: &[Item]) -> ItemResult<()> {
        let raw = serde_json::to_vec_pretty(items)
            .map_err(|e| ItemError::StoreWrite(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| ItemError::StoreWrite(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ItemError::StoreWrite(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_all(&self) -> ItemResult<Vec<Item>> {
        self.read_items().await
    }

    #[instrument(skip(self, input), fields(path = %self.path.display()))]
    async fn create(&self, input: CreateItem, now_ms: i64) -> ItemResult<Item> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items().await?;
        let item = Item::new(next_id(&items, now_ms), input);
        items.push(item.clone());
        self.write_items(&items).await?;

        tracing::info!(id = item.id, total = items.len(), "Item created");
        Ok(item)
    }

    async fn revision(&self) -> ItemResult<Revision> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| ItemError::StoreRead(format!("{}: {}", self.path.display(), e)))?;
        let modified = metadata
            .modified()
            .map_err(|e| ItemError::StoreRead(e.to_string()))?;

        Ok(Revision {
            modified,
            size: metadata.len(),
        })
    }
}
