use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError,
    errors::responses::{
        InternalServerErrorResponse, JsonExtractionResponse, NotFoundResponse,
        StoreErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemPage, ItemQuery, ListParams, Pagination, Stats};
use crate::service::ItemService;
use crate::stats::StatsCache;
use crate::store::ItemStore;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item),
    components(
        schemas(Item, CreateItem, ItemPage, Pagination),
        responses(
            NotFoundResponse,
            StoreErrorResponse,
            JsonExtractionResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Catalog browsing endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the Stats API
#[derive(OpenApi)]
#[openapi(
    paths(get_stats),
    components(schemas(Stats), responses(StoreErrorResponse)),
    tags(
        (name = "Stats", description = "Aggregate catalog statistics")
    )
)]
pub struct StatsApiDoc;

/// Create the items router
pub fn router<S: ItemStore + 'static>(service: ItemService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item))
        .with_state(shared_service)
}

/// Create the stats router
pub fn stats_router<S: ItemStore + 'static>(cache: Arc<StatsCache<S>>) -> Router {
    Router::new().route("/", get(get_stats)).with_state(cache)
}

/// List items, optionally filtered by `q`, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ListParams),
    responses(
        (status = 200, description = "One page of items", body = ItemPage),
        (status = 500, response = StoreErrorResponse)
    )
)]
async fn list_items<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    Query(params): Query<ListParams>,
) -> ItemResult<Json<ItemPage>> {
    let page = service.list_items(ItemQuery::from(params)).await?;
    Ok(Json(page))
}

/// Create a new item
///
/// Any JSON object is accepted; the server assigns the id.
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = JsonExtractionResponse),
        (status = 500, response = StoreErrorResponse)
    )
)]
async fn create_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StoreErrorResponse)
    )
)]
async fn get_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}

/// Total item count and mean price
#[utoipa::path(
    get,
    path = "",
    tag = "Stats",
    responses(
        (status = 200, description = "Catalog statistics", body = Stats),
        (status = 500, response = StoreErrorResponse)
    )
)]
async fn get_stats<S: ItemStore>(
    State(cache): State<Arc<StatsCache<S>>>,
) -> ItemResult<Json<Stats>> {
    let stats = cache.get_stats().await?;
    Ok(Json(stats))
}
