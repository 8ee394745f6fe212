// =============================================================================
// SORT MODULE
// =============================================================================
// Orders products by one field in one direction.
//
// LEARNING NOTE:
// `slice::sort_by` is a stable sort: products with equal keys keep the order
// they arrived in. Reversing the comparator (not the output) for descending
// order keeps that property, so ties stay in input order both ways.
// =============================================================================

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::Product;

/// Sortable fields, as named by the `sortBy` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Stock,
    /// Ids are assigned in creation order, so they stand in for a timestamp
    CreatedAt,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "stock" => Ok(SortField::Stock),
            "createdAt" => Ok(SortField::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` selects descending; anything else is ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Sort field plus direction. A missing field means "leave the order alone".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl SortSpec {
    /// Build from raw query values. Unknown field names turn into a no-op.
    pub fn parse(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            field: sort_by.and_then(|s| s.parse().ok()),
            order: SortOrder::parse(sort_order),
        }
    }
}

fn compare(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::CreatedAt => a.id.cmp(&b.id),
    }
}

/// Sort `products` in place according to `spec`.
pub fn sort_products(products: &mut [Product], spec: SortSpec) {
    let Some(field) = spec.field else {
        return;
    };

    match spec.order {
        SortOrder::Asc => products.sort_by(|a, b| compare(field, a, b)),
        SortOrder::Desc => products.sort_by(|a, b| compare(field, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use crate::store::seed_products;

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    fn product(id: u64, name: &str, price: f64, stock: i64) -> Product {
        Product::from_new(
            id,
            NewProduct {
                name: name.to_string(),
                price,
                stock,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_parse_sort_spec() {
        assert_eq!(
            SortSpec::parse(Some("price"), Some("desc")),
            SortSpec {
                field: Some(SortField::Price),
                order: SortOrder::Desc
            }
        );
        assert_eq!(
            SortSpec::parse(Some("createdAt"), None).field,
            Some(SortField::CreatedAt)
        );
        assert_eq!(SortSpec::parse(Some("rating"), Some("desc")).field, None);
        assert_eq!(SortOrder::parse(Some("DESC")), SortOrder::Asc);
    }

    #[test]
    fn test_price_desc_is_reverse_of_asc_without_ties() {
        let mut asc = seed_products();
        let mut desc = asc.clone();

        sort_products(&mut asc, SortSpec::parse(Some("price"), Some("asc")));
        sort_products(&mut desc, SortSpec::parse(Some("price"), Some("desc")));

        assert!(asc.windows(2).all(|w| w[0].price < w[1].price));
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut products = vec![
            product(1, "banana", 1.0, 1),
            product(2, "Apple", 1.0, 1),
            product(3, "cherry", 1.0, 1),
        ];

        sort_products(&mut products, SortSpec::parse(Some("name"), None));
        assert_eq!(ids(&products), vec![2, 1, 3]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let template = vec![
            product(5, "e", 10.0, 3),
            product(2, "b", 10.0, 1),
            product(9, "i", 10.0, 2),
            product(1, "a", 20.0, 3),
        ];

        let mut asc = template.clone();
        sort_products(&mut asc, SortSpec::parse(Some("price"), Some("asc")));
        assert_eq!(ids(&asc), vec![5, 2, 9, 1]);

        let mut desc = template;
        sort_products(&mut desc, SortSpec::parse(Some("price"), Some("desc")));
        assert_eq!(ids(&desc), vec![1, 5, 2, 9]);
    }

    #[test]
    fn test_stock_sort_keeps_out_of_stock_ties_in_input_order() {
        let mut asc = seed_products();
        sort_products(&mut asc, SortSpec::parse(Some("stock"), Some("asc")));
        assert_eq!(ids(&asc)[..4], [6, 16, 8, 10]);
        assert!(asc.windows(2).all(|w| w[0].stock <= w[1].stock));

        let mut desc = seed_products();
        sort_products(&mut desc, SortSpec::parse(Some("stock"), Some("desc")));
        assert_eq!(ids(&desc)[..3], [12, 5, 17]);
        assert_eq!(ids(&desc)[18..], [6, 16]);
        assert!(desc.windows(2).all(|w| w[0].stock >= w[1].stock));
    }

    #[test]
    fn test_created_at_follows_ids() {
        let mut products = vec![
            product(3, "c", 1.0, 1),
            product(1, "a", 1.0, 1),
            product(2, "b", 1.0, 1),
        ];

        sort_products(&mut products, SortSpec::parse(Some("createdAt"), Some("desc")));
        assert_eq!(ids(&products), vec![3, 2, 1]);
    }

    #[test]
    fn test_unknown_or_missing_field_is_a_no_op() {
        let original = vec![
            product(3, "c", 3.0, 1),
            product(1, "a", 1.0, 1),
            product(2, "b", 2.0, 1),
        ];

        let mut unknown = original.clone();
        sort_products(&mut unknown, SortSpec::parse(Some("rating"), Some("desc")));
        assert_eq!(unknown, original);

        let mut missing = original.clone();
        sort_products(&mut missing, SortSpec::default());
        assert_eq!(missing, original);
    }
}
