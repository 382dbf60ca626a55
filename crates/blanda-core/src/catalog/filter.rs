use crate::model::{Catalog, Product};

/// Conjunctive product filters for the catalog browser.
///
/// Brand and line accept either the entity id or its exact name
/// (case-insensitive for ASCII). Hair type must match one of the
/// product's target-hair tags exactly. Query is a case-insensitive
/// substring match on the product name. Results keep catalog order.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub brand: Option<String>,
    pub line: Option<String>,
    pub hair_type: Option<String>,
    pub query: Option<String>,
}

impl ProductFilter {
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products
            .iter()
            .filter(|p| self.matches(catalog, p))
            .collect()
    }

    fn matches(&self, catalog: &Catalog, product: &Product) -> bool {
        if let Some(ref brand) = self.brand {
            let by_id = product.brand_id == *brand;
            let by_name = catalog
                .brand_name(product)
                .is_some_and(|n| n.eq_ignore_ascii_case(brand));
            if !by_id && !by_name {
                return false;
            }
        }

        if let Some(ref line) = self.line {
            let by_id = product.line_id == *line;
            let by_name = catalog
                .line_name(product)
                .is_some_and(|n| n.eq_ignore_ascii_case(line));
            if !by_id && !by_name {
                return false;
            }
        }

        if let Some(ref hair) = self.hair_type {
            if !product.target_hair.iter().any(|t| t == hair) {
                return false;
            }
        }

        if let Some(ref query) = self.query {
            let needle = query.to_lowercase();
            if !product.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}
