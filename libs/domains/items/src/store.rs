use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, Revision};

/// Access to the persisted item collection.
///
/// The collection is always read and written whole. Implementations own
/// the write serialization point: `create` must read, assign an id and
/// persist without interleaving with another `create` on the same store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item, in insertion order.
    async fn load_all(&self) -> ItemResult<Vec<Item>>;

    /// Append a new item with an id derived from `now_ms` and persist the
    /// collection.
    async fn create(&self, input: CreateItem, now_ms: i64) -> ItemResult<Item>;

    /// Identity of the current document version, used for cache checks.
    async fn revision(&self) -> ItemResult<Revision>;
}
