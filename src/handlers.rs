// =============================================================================
// HANDLERS MODULE
// =============================================================================
// This module contains all HTTP request handlers (controller layer).
//
// LEARNING NOTES:
// - Handlers are async functions that receive requests and return responses
// - Axum uses "extractors" to parse request data (query string, JSON body)
// - State is shared via the State<T> extractor
//
// Taking an extractor as `Result<Extractor<T>, Rejection>` lets the handler
// decide how a malformed request is reported instead of axum's default.
// =============================================================================

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::{Query, QueryRejection};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{AppError, AppResult};
use crate::filter::FilterCriteria;
use crate::metrics;
use crate::models::*;
use crate::pagination::PageRequest;
use crate::service::ListingQuery;
use crate::sort::SortSpec;
use crate::AppState;

// =============================================================================
// HEALTH CHECK ENDPOINT
// =============================================================================

/// Liveness probe - Is the service running?
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "storefront-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// METRICS ENDPOINT
// =============================================================================
/// Prometheus metrics endpoint
///
/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state.metrics_handle.render()
}

// =============================================================================
// PRODUCT API ENDPOINTS
// =============================================================================

// -----------------------------------------------------------------------------
// QUERY PARAMETERS
// -----------------------------------------------------------------------------
/// Query parameters for `GET /products`
///
/// Filter keys may repeat: `?category=Sports&category=Tools` selects both.
/// Single-value keys are collected as lists too, so a repeated `page` or
/// `sortBy` is not a decode error; the first occurrence wins.
/// Numbers and sort options are kept as raw text and interpreted leniently,
/// so a junk `page=abc` falls back to page 1 instead of failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    /// Any non-empty value switches to the facets-only response
    #[serde(default)]
    pub categories_only: Vec<String>,

    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub business_type: Vec<String>,
    #[serde(default)]
    pub sub_category: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub vendor: Vec<String>,

    #[serde(default)]
    pub search: Vec<String>,

    /// price | stock | name | createdAt
    #[serde(default)]
    pub sort_by: Vec<String>,

    /// asc (default) | desc
    #[serde(default)]
    pub sort_order: Vec<String>,

    #[serde(default)]
    pub page: Vec<String>,
    #[serde(default)]
    pub limit: Vec<String>,
}

/// First value of a possibly repeated query key.
fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str)
}

impl ProductQueryParams {
    pub fn wants_facets_only(&self) -> bool {
        first(&self.categories_only).is_some_and(|value| !value.is_empty())
    }

    pub fn into_listing_query(self) -> ListingQuery {
        let sort = SortSpec::parse(first(&self.sort_by), first(&self.sort_order));
        let page = PageRequest::parse(first(&self.page), first(&self.limit));
        let search = first(&self.search)
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        ListingQuery {
            criteria: FilterCriteria {
                categories: self.category,
                business_types: self.business_type,
                sub_categories: self.sub_category,
                statuses: self.status,
                vendors: self.vendor,
                search,
            },
            sort,
            page,
        }
    }
}

/// Query parameters for `GET /search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Vec<String>,
}

impl SearchParams {
    pub fn term(&self) -> &str {
        first(&self.query).unwrap_or_default()
    }
}

// -----------------------------------------------------------------------------
// LIST PRODUCTS
// -----------------------------------------------------------------------------
/// List products, or only the facet menus
///
/// GET /products?categoriesOnly=true
/// GET /products?status=Available&sortBy=name&page=1&limit=5
///
/// # Response (listing)
/// ```json
/// {
///   "products": [...],
///   "categoryCounts": { "businessTypes": [...], "categories": [...], ... },
///   "pagination": { "currentPage": 1, "totalPages": 4, "totalItems": 18, ... }
/// }
/// ```
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ProductQueryParams>, QueryRejection>,
) -> AppResult<Json<ProductsResponse>> {
    let start = Instant::now();

    let Query(params) = params.map_err(|e| {
        metrics::record_http_request("GET", "/products", 400, start.elapsed().as_secs_f64());
        AppError::BadRequest(e.to_string())
    })?;

    if params.wants_facets_only() {
        let facets = state.catalog.facets().await;

        metrics::record_http_request("GET", "/products", 200, start.elapsed().as_secs_f64());
        return Ok(Json(ProductsResponse::Facets(facets)));
    }

    let query = params.into_listing_query();
    let filtered = !query.criteria.is_empty();
    let listing = state.catalog.list(&query).await;

    tracing::debug!(
        filtered,
        total_items = listing.pagination.total_items,
        page = listing.pagination.current_page,
        limit = listing.pagination.items_per_page,
        "Served product listing"
    );

    metrics::record_query_matches("listing", listing.pagination.total_items);
    metrics::record_http_request("GET", "/products", 200, start.elapsed().as_secs_f64());

    Ok(Json(ProductsResponse::Listing(listing)))
}

// -----------------------------------------------------------------------------
// CREATE PRODUCT
// -----------------------------------------------------------------------------
/// Add a product to the catalog
///
/// POST /products
///
/// # Response
/// - 201 Created: the stored product with its assigned `id`
/// - 4xx: body was not a JSON product; nothing is stored
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let start = Instant::now();

    let Json(new_product) = payload.map_err(|rejection| {
        metrics::record_http_request(
            "POST",
            "/products",
            rejection.status().as_u16(),
            start.elapsed().as_secs_f64(),
        );
        AppError::from(rejection)
    })?;

    let product = state.catalog.create(new_product).await;

    metrics::record_product_created();
    metrics::set_catalog_size(state.catalog.product_count().await);
    metrics::record_http_request("POST", "/products", 201, start.elapsed().as_secs_f64());

    Ok((StatusCode::CREATED, Json(product)))
}

// -----------------------------------------------------------------------------
// QUICK SEARCH
// -----------------------------------------------------------------------------
/// Search name, category, sub-category and vendor at once
///
/// GET /search?query=helmet
///
/// Returns a bare JSON array of matching products.
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let start = Instant::now();

    let Query(params) = params.map_err(|e| {
        metrics::record_http_request("GET", "/search", 400, start.elapsed().as_secs_f64());
        AppError::BadRequest(e.to_string())
    })?;
    let query = params.term();

    let matches = state.catalog.search(query).await;

    tracing::debug!(query, matches = matches.len(), "Served quick search");

    metrics::record_query_matches("search", matches.len());
    metrics::record_http_request("GET", "/search", 200, start.elapsed().as_secs_f64());

    Ok(Json(matches))
}
