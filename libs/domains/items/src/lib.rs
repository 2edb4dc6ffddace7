//! Items Domain
//!
//! Catalog items persisted as one JSON document, served with search,
//! pagination and cached statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/items, /stats)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐   ┌────────────┐
//! │   Service   │   │ StatsCache │  ← list/get/create, derived stats
//! └──────┬──────┘   └─────┬──────┘
//!        │                │
//! ┌──────▼────────────────▼──────┐
//! │          ItemStore           │  ← whole-document access (trait + JSON file)
//! └──────────────┬───────────────┘
//!                │
//! ┌──────────────▼───────────────┐
//! │        Models / Query        │  ← entities, filtering, pagination
//! └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{JsonFileStore, ItemService, StatsCache, handlers};
//! use std::sync::Arc;
//!
//! let store = Arc::new(JsonFileStore::new("data/items.json"));
//! let service = ItemService::new(store.clone());
//! let stats = Arc::new(StatsCache::new(store));
//!
//! let items = handlers::router(service);
//! let stats = handlers::stats_router(stats);
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod models;
pub mod query;
pub mod service;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::{ApiDoc, StatsApiDoc};
pub use json_file::JsonFileStore;
pub use models::{CreateItem, Item, ItemId, ItemPage, ItemQuery, Pagination, Revision, Stats};
pub use service::ItemService;
pub use stats::StatsCache;
pub use store::ItemStore;
