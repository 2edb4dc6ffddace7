//! Catalog client
//!
//! Client half of the catalog browser: an HTTP transport for the items
//! endpoint and the [`CatalogController`] state machine that drives it.
//!
//! ```rust,no_run
//! use catalog_client::{CatalogController, ClientConfig, HttpCatalogApi};
//! use core_config::FromEnv;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let controller = CatalogController::new(HttpCatalogApi::new(&config));
//! let mut updates = controller.subscribe();
//!
//! controller.mount();
//! controller.search("laptop");
//!
//! while updates.changed().await.is_ok() {
//!     let state = updates.borrow_and_update().clone();
//!     println!("{} items, loading: {}", state.items.len(), state.loading);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cancel;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod models;

pub use api::{CatalogApi, ClientConfig, HttpCatalogApi};
pub use cancel::CancelToken;
pub use controller::{CatalogController, CatalogState};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use error::{ClientError, ClientResult};
pub use models::{Item, ItemPage, ItemQuery, Pagination};
