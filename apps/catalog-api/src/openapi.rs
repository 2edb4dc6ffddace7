//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Paginated, searchable item catalog backed by a JSON document",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc),
        (path = "/api/stats", api = domain_items::StatsApiDoc)
    ),
    tags(
        (name = "Items", description = "Catalog browsing endpoints"),
        (name = "Stats", description = "Aggregate catalog statistics")
    )
)]
pub struct ApiDoc;
