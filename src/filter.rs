// =============================================================================
// FILTER MODULE
// =============================================================================
// Narrows a product sequence down to the ones matching the active filters.
//
// MATCHING RULES:
// - Within one field the selected values are OR-ed (category A or B)
// - Across fields the constraints are AND-ed (category A and vendor X)
// - A field with no selected values does not constrain anything
// - The listing search term matches `name` only, case-insensitively
// =============================================================================

use crate::models::{Product, ProductField};

// -----------------------------------------------------------------------------
// FILTER CRITERIA
// -----------------------------------------------------------------------------
/// The active filter selections for one listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    pub business_types: Vec<String>,
    pub sub_categories: Vec<String>,
    pub statuses: Vec<String>,
    pub vendors: Vec<String>,

    /// Case-insensitive substring matched against the product name
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Selected values for one categorical field.
    pub fn selected(&self, field: ProductField) -> &[String] {
        match field {
            ProductField::Category => &self.categories,
            ProductField::BusinessType => &self.business_types,
            ProductField::SubCategory => &self.sub_categories,
            ProductField::Status => &self.statuses,
            ProductField::Vendor => &self.vendors,
        }
    }

    /// True when no filter would remove anything.
    pub fn is_empty(&self) -> bool {
        ProductField::ALL
            .iter()
            .all(|field| self.selected(*field).is_empty())
            && self.search.is_none()
    }

    /// Whether a single product satisfies every populated constraint.
    pub fn matches(&self, product: &Product) -> bool {
        let fields_match = ProductField::ALL.iter().all(|field| {
            let selected = self.selected(*field);
            selected.is_empty() || selected.iter().any(|v| v == field.value(product))
        });

        if !fields_match {
            return false;
        }

        match &self.search {
            Some(term) => contains_ignore_case(&product.name, &term.to_lowercase()),
            None => true,
        }
    }
}

/// Keep the products matching `criteria`, preserving their relative order.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

// -----------------------------------------------------------------------------
// QUICK SEARCH
// -----------------------------------------------------------------------------
/// Products whose name, category, sub-category or vendor contains `query`.
///
/// Broader than the listing search, which only looks at the name.
/// An empty query matches everything.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            contains_ignore_case(&p.name, &needle)
                || contains_ignore_case(&p.category, &needle)
                || contains_ignore_case(&p.sub_category, &needle)
                || contains_ignore_case(&p.vendor, &needle)
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_products;

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let seed = seed_products();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_empty());
        assert_eq!(filter_products(&seed, &criteria), seed);
    }

    #[test]
    fn test_single_category_is_exact_subset() {
        let seed = seed_products();
        let criteria = FilterCriteria {
            categories: vec!["Electronics".to_string()],
            ..Default::default()
        };

        let result = filter_products(&seed, &criteria);
        let expected: Vec<u64> = seed
            .iter()
            .filter(|p| p.category == "Electronics")
            .map(|p| p.id)
            .collect();

        assert!(!result.is_empty());
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_values_within_a_field_are_or_ed() {
        let seed = seed_products();
        let criteria = FilterCriteria {
            categories: vec!["Electronics".to_string(), "Sports".to_string()],
            ..Default::default()
        };

        let result = filter_products(&seed, &criteria);
        let expected = seed
            .iter()
            .filter(|p| p.category == "Electronics" || p.category == "Sports")
            .count();

        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_fields_are_and_ed() {
        let seed = seed_products();
        let criteria = FilterCriteria {
            categories: vec!["Electronics".to_string()],
            vendors: vec!["TechHub".to_string()],
            ..Default::default()
        };

        let result = filter_products(&seed, &criteria);
        let expected: Vec<u64> = seed
            .iter()
            .filter(|p| p.category == "Electronics" && p.vendor == "TechHub")
            .map(|p| p.id)
            .collect();

        assert!(!result.is_empty());
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_unknown_value_yields_empty_result() {
        let seed = seed_products();
        let criteria = FilterCriteria {
            statuses: vec!["Discontinued".to_string()],
            ..Default::default()
        };

        assert!(filter_products(&seed, &criteria).is_empty());
    }

    #[test]
    fn test_values_are_case_sensitive() {
        let seed = seed_products();
        let criteria = FilterCriteria {
            categories: vec!["electronics".to_string()],
            ..Default::default()
        };

        assert!(filter_products(&seed, &criteria).is_empty());
    }

    #[test]
    fn test_listing_search_matches_name_only() {
        let seed = seed_products();

        let by_name = FilterCriteria {
            search: Some("HEADPHONES".to_string()),
            ..Default::default()
        };
        let result = filter_products(&seed, &by_name);
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|p| p.name.to_lowercase().contains("headphones")));

        // A vendor name is not searched by the listing filter
        let by_vendor = FilterCriteria {
            search: Some("TechHub".to_string()),
            ..Default::default()
        };
        assert!(filter_products(&seed, &by_vendor).is_empty());
    }

    #[test]
    fn test_quick_search_covers_four_fields() {
        let seed = seed_products();

        let by_vendor = search_products(&seed, "techhub");
        assert!(!by_vendor.is_empty());
        assert!(by_vendor.iter().all(|p| p.vendor == "TechHub"));

        let by_sub_category = search_products(&seed, "footwear");
        assert!(by_sub_category.iter().any(|p| p.sub_category == "Footwear"));

        assert_eq!(search_products(&seed, "").len(), seed.len());
        assert!(search_products(&seed, "no such thing").is_empty());
    }
}
