//! Linear filters over a loaded product collection.
//!
//! All filters preserve input order and return borrowed products; an empty
//! result is a normal outcome, not an error.

use storefront_core::{CategoryId, ProductId, find_by_id};

use crate::product::Product;

/// Number of products shown by the home-page product grid.
pub const ALL_PRODUCTS_LIMIT: usize = 20;

/// Products whose category is present and matches `category_id`.
pub fn catalog_filter<'a>(products: &'a [Product], category_id: &CategoryId) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.is_in_category(category_id))
        .collect()
}

/// Products sharing the subcategory of `current`, excluding `current` itself.
///
/// Unknown products and products without a subcategory have no relations.
pub fn related_products<'a>(products: &'a [Product], current: &ProductId) -> Vec<&'a Product> {
    let Some(subcategory) = find_by_id(products, current).and_then(|p| p.subcategory_id()) else {
        return Vec::new();
    };

    products
        .iter()
        .filter(|p| p.subcategory_id() == Some(subcategory) && &p.id != current)
        .collect()
}

/// Leading slice shown by the all-products grid.
pub fn featured_products(products: &[Product]) -> &[Product] {
    &products[..products.len().min(ALL_PRODUCTS_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, Subcategory};
    use storefront_core::SubcategoryId;

    fn product(id: &str, category: Option<&str>, subcategory: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: 100.0,
            discounted_price: 80.0,
            discount: 20.0,
            category: category.map(|c| Category {
                id: CategoryId::new(c),
                name: c.to_string(),
            }),
            subcategory: subcategory.map(|s| Subcategory {
                id: SubcategoryId::new(s),
                name: s.to_string(),
            }),
            image_ids: vec![format!("img-{id}")],
            average_rating: 4.0,
            total_reviews: 3,
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn catalog_filter_keeps_only_matching_category() {
        let products = vec![product("1", Some("A"), None), product("2", Some("B"), None)];
        let filtered = catalog_filter(&products, &CategoryId::new("A"));
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn catalog_filter_excludes_products_without_category() {
        let products = vec![
            product("1", None, None),
            product("2", Some("A"), None),
            product("3", Some("A"), None),
        ];
        let filtered = catalog_filter(&products, &CategoryId::new("A"));
        assert_eq!(ids(&filtered), vec!["2", "3"]);
    }

    #[test]
    fn catalog_filter_with_no_match_is_empty() {
        let products = vec![product("1", Some("A"), None)];
        assert!(catalog_filter(&products, &CategoryId::new("Z")).is_empty());
    }

    #[test]
    fn related_products_share_subcategory_and_exclude_current() {
        let products = vec![
            product("1", Some("A"), Some("shirts")),
            product("2", Some("A"), Some("shirts")),
            product("3", Some("A"), Some("shoes")),
            product("4", Some("B"), None),
            product("5", Some("B"), Some("shirts")),
        ];
        let related = related_products(&products, &ProductId::new("1"));
        assert_eq!(ids(&related), vec!["2", "5"]);
    }

    #[test]
    fn related_products_empty_when_current_has_no_subcategory() {
        let products = vec![product("1", Some("A"), None), product("2", Some("A"), None)];
        assert!(related_products(&products, &ProductId::new("1")).is_empty());
    }

    #[test]
    fn related_products_empty_for_unknown_product() {
        let products = vec![product("1", Some("A"), Some("shirts"))];
        assert!(related_products(&products, &ProductId::new("missing")).is_empty());
    }

    #[test]
    fn featured_products_caps_at_limit() {
        let products: Vec<Product> = (0..25).map(|i| product(&i.to_string(), None, None)).collect();
        assert_eq!(featured_products(&products).len(), ALL_PRODUCTS_LIMIT);
        assert_eq!(featured_products(&products[..3]).len(), 3);
    }
}
