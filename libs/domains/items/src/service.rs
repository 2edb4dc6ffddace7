//! Item Service - list, lookup and create over an ItemStore

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemId, ItemPage, ItemQuery};
use crate::query;
use crate::store::ItemStore;

pub struct ItemService<S: ItemStore> {
    store: Arc<S>,
}

impl<S: ItemStore> Clone for ItemService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// One page of the (optionally filtered) collection.
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ItemQuery) -> ItemResult<ItemPage> {
        let items = self.store.load_all().await?;
        let page = query::run(items, &query);

        tracing::debug!(
            returned = page.items.len(),
            total = page.pagination.total_items,
            "Listed items"
        );
        Ok(page)
    }

    /// Looks an item up by its raw path segment. Anything that does not
    /// parse as an id is simply not found.
    #[instrument(skip(self))]
    pub async fn get_item(&self, raw_id: &str) -> ItemResult<Item> {
        let not_found = || ItemError::NotFound(raw_id.to_string());
        let id: ItemId = raw_id.trim().parse().map_err(|_| not_found())?;

        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(not_found)
    }

    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        self.store
            .create(input, Utc::now().timestamp_millis())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockItemStore;
    use mockall::predicate::*;
    use serde_json::json;

    fn items() -> Vec<Item> {
        serde_json::from_value(json!([
            { "id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 1399 },
            { "id": 2, "name": "Desk Lamp", "category": "Home", "price": 29.9 }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_item_by_id() {
        let mut store = MockItemStore::new();
        store.expect_load_all().times(1).returning(|| Ok(items()));

        let service = ItemService::new(Arc::new(store));
        let item = service.get_item("2").await.unwrap();
        assert_eq!(item.name(), Some("Desk Lamp"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(items()));

        let service = ItemService::new(Arc::new(store));
        assert!(matches!(
            service.get_item("999").await,
            Err(ItemError::NotFound(id)) if id == "999"
        ));
    }

    #[tokio::test]
    async fn test_non_numeric_id_skips_the_store() {
        let mut store = MockItemStore::new();
        store.expect_load_all().never();

        let service = ItemService::new(Arc::new(store));
        assert!(matches!(
            service.get_item("abc").await,
            Err(ItemError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_items_applies_query() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(items()));

        let service = ItemService::new(Arc::new(store));
        let page = service
            .list_items(ItemQuery::new(1, 10, Some("lamp")))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total_items, 1);
    }

    #[tokio::test]
    async fn test_list_items_propagates_read_errors() {
        let mut store = MockItemStore::new();
        store
            .expect_load_all()
            .returning(|| Err(ItemError::StoreRead("gone".to_string())));

        let service = ItemService::new(Arc::new(store));
        assert!(matches!(
            service.list_items(ItemQuery::default()).await,
            Err(ItemError::StoreRead(_))
        ));
    }

    #[tokio::test]
    async fn test_create_item_stamps_current_time() {
        let before = Utc::now().timestamp_millis();

        let mut store = MockItemStore::new();
        store
            .expect_create()
            .with(always(), ge(before))
            .times(1)
            .returning(|input, now_ms| Ok(Item::new(now_ms, input)));

        let service = ItemService::new(Arc::new(store));
        let item = service
            .create_item(serde_json::from_value(json!({ "name": "Test Item" })).unwrap())
            .await
            .unwrap();

        assert!(item.id >= before);
        assert_eq!(item.name(), Some("Test Item"));
    }
}
