//! HTTP transport for the catalog API

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::models::{ItemPage, ItemQuery};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Source of item pages for the controller.
#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    async fn fetch_items(&self, query: &ItemQuery) -> ClientResult<ItemPage>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl FromEnv for ClientConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_or_default("CATALOG_API_URL", DEFAULT_API_URL)))
    }
}

/// [`CatalogApi`] over `GET {base_url}/api/items`.
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_items(&self, query: &ItemQuery) -> ClientResult<ItemPage> {
        let url = self.items_url();
        debug!(%url, page = query.page, limit = query.limit, "Fetching items");

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<ItemPage>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
