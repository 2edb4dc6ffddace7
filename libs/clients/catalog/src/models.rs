//! Wire shapes for the items endpoint, as seen by the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item. The server stores arbitrary objects, so everything except the
/// id stays untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.fields.get("category").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.fields.get("price").and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// First page of ten, nothing loaded yet.
impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total_items: 0,
            total_pages: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: Pagination,
}

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub page: u64,
    pub limit: u64,
    pub q: String,
}

impl ItemQuery {
    pub fn new(page: u64, limit: u64, q: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            q: q.into(),
        }
    }

    /// Query string pairs. `q` is trimmed and only sent when non-empty.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];

        let q = self.q.trim();
        if !q.is_empty() {
            params.push(("q", q.to_string()));
        }
        params
    }
}
