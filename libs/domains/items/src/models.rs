use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use serde_json::{Map, Number, Value};
use std::time::SystemTime;
use utoipa::{IntoParams, ToSchema};

use crate::query::{DEFAULT_LIMIT, DEFAULT_PAGE, parse_positive};

/// Item identifier. Assigned at creation from a millisecond timestamp.
pub type ItemId = i64;

/// Catalog item as stored in the JSON document.
///
/// Only `id` is typed. The create endpoint stores whatever object it
/// receives, so `name`, `category` and `price` live in `fields` with the rest
/// and are read through accessors that treat a wrong-typed value as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1_700_000_000_000_i64,
    "name": "Laptop Pro",
    "category": "Electronics",
    "price": 1399
}))]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    #[schema(ignore)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Builds a stored item from a create payload and its assigned id.
    pub fn new(id: ItemId, input: CreateItem) -> Self {
        let mut fields = input.fields;
        // The assigned id always wins over one smuggled into the payload.
        fields.remove("id");

        Self { id, fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.fields.get("category").and_then(Value::as_str)
    }

    /// The stored price, when it is a JSON number.
    pub fn price(&self) -> Option<&Number> {
        self.fields.get("price").and_then(Value::as_number)
    }

    /// Price as a float, when the item has a numeric one.
    pub fn price_value(&self) -> Option<f64> {
        self.price().and_then(Number::as_f64)
    }
}

/// Payload for `POST /api/items`. Any JSON object is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Desk Lamp",
    "category": "Home",
    "price": 29.9
}))]
pub struct CreateItem {
    #[serde(flatten)]
    #[schema(ignore)]
    pub fields: Map<String, Value>,
}

/// Raw query string for `GET /api/items`.
///
/// Everything arrives as text so that malformed numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number, 1-based (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// Case-insensitive search over name, category and price
    pub q: Option<String>,
}

/// Parsed list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub page: u64,
    pub limit: u64,
    /// Trimmed search term; `None` when absent or blank.
    pub search: Option<String>,
}

impl ItemQuery {
    pub fn new(page: u64, limit: u64, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self {
            page,
            limit,
            search,
        }
    }
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT, None)
    }
}

impl From<ListParams> for ItemQuery {
    fn from(params: ListParams) -> Self {
        Self::new(
            parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            parse_positive(params.limit.as_deref(), DEFAULT_LIMIT),
            params.q.as_deref(),
        )
    }
}

/// Pagination metadata, computed over the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(limit.max(1));
        Self {
            page,
            limit,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// Response body for `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: Pagination,
}

/// Response body for `GET /api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: u64,
    pub average_price: f64,
}

impl Stats {
    /// Count of all items and mean price over items that carry a numeric
    /// price. An empty set averages to 0.
    pub fn from_items(items: &[Item]) -> Self {
        let (sum, priced) = items
            .iter()
            .filter_map(Item::price_value)
            .fold((0.0_f64, 0_u64), |(sum, n), price| (sum + price, n + 1));

        let average_price = if priced == 0 { 0.0 } else { sum / priced as f64 };

        Self {
            total: items.len() as u64,
            average_price,
        }
    }
}

/// Identity of one version of the backing document.
///
/// The modification time alone can miss two writes inside one filesystem
/// timestamp tick, so the size is compared as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub modified: SystemTime,
    pub size: u64,
}

/// Picks the id for a new item: the current millisecond timestamp, bumped
/// past the largest existing id so rapid creates never collide.
pub fn next_id(existing: &[Item], now_ms: i64) -> ItemId {
    let max_existing = existing.iter().map(|item| item.id).max();
    match max_existing {
        Some(max) if max >= now_ms => max.saturating_add(1),
        _ => now_ms,
    }
}
