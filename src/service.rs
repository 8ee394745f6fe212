// =============================================================================
// CATALOG SERVICE
// =============================================================================
// Composes the repository with the filter, sort, facet and pagination steps.
//
// LISTING PIPELINE:
//   all products -> filter -> sort -> facet counts (whole filtered set)
//                                  -> page slice
// =============================================================================

use std::sync::Arc;

use crate::facets::category_counts;
use crate::filter::{filter_products, search_products, FilterCriteria};
use crate::models::{CategoryCounts, NewProduct, Product, ProductListResponse};
use crate::pagination::{paginate, PageRequest};
use crate::sort::{sort_products, SortSpec};
use crate::store::ProductRepository;

/// Everything a listing request asks for.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub page: PageRequest,
}

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Facet menus over the entire, unfiltered catalog.
    pub async fn facets(&self) -> CategoryCounts {
        let products = self.repo.list().await;
        category_counts(&products)
    }

    /// One page of filtered, sorted products plus facets and page metadata.
    pub async fn list(&self, query: &ListingQuery) -> ProductListResponse {
        let all = self.repo.list().await;

        let mut matching = filter_products(&all, &query.criteria);
        sort_products(&mut matching, query.sort);

        let category_counts = category_counts(&matching);
        let (products, pagination) = paginate(&matching, query.page);

        ProductListResponse {
            products,
            category_counts,
            pagination,
        }
    }

    /// Store a new product and hand back the record with its assigned id.
    pub async fn create(&self, product: NewProduct) -> Product {
        self.repo.append(product).await
    }

    /// Quick search across name, category, sub-category and vendor.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        let products = self.repo.list().await;
        search_products(&products, query)
    }

    pub async fn product_count(&self) -> usize {
        self.repo.len().await
    }
}
