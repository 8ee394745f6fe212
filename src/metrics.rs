// =============================================================================
// METRICS MODULE
// =============================================================================
// This module sets up Prometheus metrics for observability.
//
// LEARNING NOTES:
// - Prometheus uses a "pull" model - it scrapes /metrics endpoint
// - Metrics have types: Counter, Gauge, Histogram, Summary
// - Labels add dimensions to metrics (e.g., endpoint="/products")
// =============================================================================

use anyhow::Result;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

// =============================================================================
// METRIC NAMES
// =============================================================================

/// HTTP request counter
/// Labels: method, endpoint, status
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// HTTP request duration histogram
/// Labels: method, endpoint
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Number of products currently in the catalog
pub const CATALOG_PRODUCTS: &str = "catalog_products";

/// Products created through the API
pub const CATALOG_PRODUCTS_CREATED_TOTAL: &str = "catalog_products_created_total";

/// How many products a query matched before pagination
/// Labels: kind (listing/search)
pub const CATALOG_QUERY_MATCHES: &str = "catalog_query_matches";

// =============================================================================
// SETUP FUNCTION
// =============================================================================
/// Install the Prometheus recorder globally and return its render handle.
pub fn setup_metrics() -> Result<PrometheusHandle> {
    let latency_buckets = &[
        0.0005, // 0.5ms
        0.001,  // 1ms
        0.005,  // 5ms
        0.01,   // 10ms
        0.025,  // 25ms
        0.05,   // 50ms
        0.1,    // 100ms
        0.25,   // 250ms
        0.5,    // 500ms
        1.0,    // 1 second
    ];

    // The catalog is small; match counts rarely exceed a few hundred
    let match_buckets = &[0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 1000.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            latency_buckets,
        )?
        .set_buckets_for_metric(
            Matcher::Full(CATALOG_QUERY_MATCHES.to_string()),
            match_buckets,
        )?
        .install_recorder()?;

    describe_counter!(
        HTTP_REQUESTS_TOTAL,
        "Total number of HTTP requests received"
    );

    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "HTTP request latency in seconds"
    );

    describe_gauge!(CATALOG_PRODUCTS, "Number of products in the catalog");

    describe_counter!(
        CATALOG_PRODUCTS_CREATED_TOTAL,
        "Total number of products created through the API"
    );

    describe_histogram!(
        CATALOG_QUERY_MATCHES,
        "Products matched by a listing or search query before pagination"
    );

    Ok(handle)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Record an HTTP request
///
/// # Arguments
/// * `method` - HTTP method (GET, POST, etc.)
/// * `endpoint` - Request path (/products)
/// * `status` - Response status code (200, 201, 400)
/// * `duration_secs` - Request duration in seconds
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration_secs: f64) {
    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .record(duration_secs);
}

pub fn set_catalog_size(count: usize) {
    gauge!(CATALOG_PRODUCTS).set(count as f64);
}

pub fn record_product_created() {
    counter!(CATALOG_PRODUCTS_CREATED_TOTAL).increment(1);
}

/// Record how many products a query matched
///
/// # Arguments
/// * `kind` - "listing" or "search"
/// * `matches` - Matched products before pagination
pub fn record_query_matches(kind: &'static str, matches: usize) {
    histogram!(CATALOG_QUERY_MATCHES, "kind" => kind).record(matches as f64);
}
