// =============================================================================
// FACETS MODULE
// =============================================================================
// Counts how many products carry each distinct value of a categorical field.
// These counts feed the badges next to each filter checkbox.
// =============================================================================

use indexmap::IndexMap;

use crate::models::{CategoryCounts, FacetCount, Product, ProductField};

/// Count products per distinct value of `field`.
///
/// Entries come out in first-seen order. Values are grouped by exact text,
/// so "Sports" and "sports" are two different facets.
pub fn count_by(products: &[Product], field: ProductField) -> Vec<FacetCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for product in products {
        *counts.entry(field.value(product)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| FacetCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Facet counts for all five categorical fields.
pub fn category_counts(products: &[Product]) -> CategoryCounts {
    CategoryCounts {
        business_types: count_by(products, ProductField::BusinessType),
        categories: count_by(products, ProductField::Category),
        sub_categories: count_by(products, ProductField::SubCategory),
        vendors: count_by(products, ProductField::Vendor),
        statuses: count_by(products, ProductField::Status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use crate::store::seed_products;

    fn with_category(id: u64, category: &str) -> Product {
        Product::from_new(
            id,
            NewProduct {
                category: category.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_counts_follow_first_seen_order() {
        let products = vec![
            with_category(1, "Sports"),
            with_category(2, "Electronics"),
            with_category(3, "Sports"),
            with_category(4, "sports"),
        ];

        let counts = count_by(&products, ProductField::Category);
        assert_eq!(
            counts,
            vec![
                FacetCount { name: "Sports".to_string(), count: 2 },
                FacetCount { name: "Electronics".to_string(), count: 1 },
                FacetCount { name: "sports".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_each_field_sums_to_input_size() {
        let seed = seed_products();
        let counts = category_counts(&seed);

        for group in [
            &counts.business_types,
            &counts.categories,
            &counts.sub_categories,
            &counts.vendors,
            &counts.statuses,
        ] {
            let total: usize = group.iter().map(|f| f.count).sum();
            assert_eq!(total, seed.len());
        }
    }

    #[test]
    fn test_empty_input_has_no_facets() {
        assert_eq!(category_counts(&[]), CategoryCounts::default());
    }
}
