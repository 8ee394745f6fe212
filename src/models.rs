// =============================================================================
// MODELS MODULE
// =============================================================================
// This module defines the data structures used throughout the service.
//
// LEARNING NOTES:
// - Rust uses structs to define data structures
// - Derive macros automatically implement common traits
// - Serde handles JSON serialization/deserialization
// - #[serde(rename_all = "camelCase")] keeps Rust snake_case field names
//   while the JSON API speaks camelCase (businessType, subCategory, ...)
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status shown for products that can be ordered.
pub const STATUS_AVAILABLE: &str = "Available";

/// Status shown for products with nothing left to sell.
pub const STATUS_OUT_OF_STOCK: &str = "Out of Stock";

// =============================================================================
// PRODUCT
// =============================================================================
// A single marketplace listing.
//
// The categorical fields (category, business_type, sub_category, status,
// vendor) are plain strings: the catalog groups and filters on their exact
// text, and a created product is stored with whatever values it was given.
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Positive, unique, assigned at creation as `count + 1`. Never reused.
    /// Doubles as creation order since there is no timestamp.
    pub id: u64,

    pub name: String,

    pub price: f64,

    pub stock: i64,

    pub category: String,

    pub business_type: String,

    pub sub_category: String,

    /// "Available" or "Out of Stock" for the seed data
    pub status: String,

    pub vendor: String,

    /// Optional vendor logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_image: Option<String>,

    /// Optional product image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Any extra keys a client sent on creation, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Materialize a stored record from a creation payload and its new id.
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        let mut extra = new.extra;
        // The id always comes from the store, never from the client
        extra.remove("id");

        Self {
            id,
            name: new.name,
            price: new.price,
            stock: new.stock,
            category: new.category,
            business_type: new.business_type,
            sub_category: new.sub_category,
            status: new.status,
            vendor: new.vendor,
            vendor_image: new.vendor_image,
            image: new.image,
            extra,
        }
    }
}

// -----------------------------------------------------------------------------
// CREATE PRODUCT REQUEST
// -----------------------------------------------------------------------------
/// Request body for `POST /products`.
///
/// Every field is optional; missing text becomes "", missing numbers 0.
///
/// # Example JSON
/// ```json
/// {
///   "name": "Trail Running Shoes",
///   "price": 89.5,
///   "stock": 12,
///   "category": "Sports",
///   "businessType": "Retail",
///   "subCategory": "Footwear",
///   "status": "Available",
///   "vendor": "PeakGear"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub business_type: String,
    pub sub_category: String,
    pub status: String,
    pub vendor: String,
    pub vendor_image: Option<String>,
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// PRODUCT FIELDS
// =============================================================================
// The five categorical fields that can be filtered on and faceted.
//
// LEARNING NOTE:
// Instead of looking fields up by a string key at runtime, each variant maps
// to a typed accessor. The compiler then guarantees every field is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    BusinessType,
    Category,
    SubCategory,
    Vendor,
    Status,
}

impl ProductField {
    /// All faceted fields, in the order the response lists them.
    pub const ALL: [ProductField; 5] = [
        ProductField::BusinessType,
        ProductField::Category,
        ProductField::SubCategory,
        ProductField::Vendor,
        ProductField::Status,
    ];

    /// Borrow this field's value from a product.
    pub fn value<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            ProductField::BusinessType => &product.business_type,
            ProductField::Category => &product.category,
            ProductField::SubCategory => &product.sub_category,
            ProductField::Vendor => &product.vendor,
            ProductField::Status => &product.status,
        }
    }
}

// =============================================================================
// API RESPONSE STRUCTURES
// =============================================================================

/// One facet menu entry: a distinct field value and how many products have it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// Facet groupings for all five categorical fields.
///
/// Returned on its own for `categoriesOnly` requests and nested as
/// `categoryCounts` in listing responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub business_types: Vec<FacetCount>,
    pub categories: Vec<FacetCount>,
    pub sub_categories: Vec<FacetCount>,
    pub vendors: Vec<FacetCount>,
    pub statuses: Vec<FacetCount>,
}

/// Pagination metadata attached to every listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

// -----------------------------------------------------------------------------
// PRODUCT LIST RESPONSE
// -----------------------------------------------------------------------------
/// Response for `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    /// The requested page of products
    pub products: Vec<Product>,

    /// Facets over the whole filtered set, not just this page
    pub category_counts: CategoryCounts,

    pub pagination: PaginationMeta,
}

/// `GET /products` answers with either a facets-only body or a listing.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProductsResponse {
    Facets(CategoryCounts),
    Listing(ProductListResponse),
}

// =============================================================================
// HEALTH CHECK RESPONSE
// =============================================================================

/// Simple health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

// =============================================================================
// ERROR RESPONSES
// =============================================================================
// Standardized error response format for API

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}
