use serde::{Deserialize, Serialize};

use crate::fields::FieldSynonyms;

/// A labeled key/value pair attached to a product.
///
/// The value is a free-form string: a decimal number for pH, alkalinity
/// and reducing power, or a delimited ingredient list for the agent
/// fields. Which labels a product carries is not enforced by schema;
/// lookups go through [`crate::fields::find_spec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// Top-level manufacturer grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A named product line belonging to one brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single chemical formulation belonging to one line.
///
/// Brand and line references are ids, not enforced foreign keys: a
/// dangling reference degrades to "unclassified" display, never an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand_id: String,
    pub line_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: Vec<Spec>,
    #[serde(default)]
    pub target_hair: Vec<String>,
}

/// The full product catalog supplied to the engine.
///
/// The engine only reads from it; all lookups preserve the stored
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Spec-label synonym configuration. Defaults cover the known
    /// Japanese labels and their English equivalents.
    #[serde(default)]
    pub synonyms: FieldSynonyms,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub lines: Vec<Line>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Brand name for a product, or `None` when the reference dangles.
    pub fn brand_name(&self, product: &Product) -> Option<&str> {
        self.brand(&product.brand_id).map(|b| b.name.as_str())
    }

    /// Line name for a product, or `None` when the reference dangles.
    pub fn line_name(&self, product: &Product) -> Option<&str> {
        self.line(&product.line_id).map(|l| l.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            name: "Test".into(),
            version: "1.0".into(),
            description: None,
            synonyms: FieldSynonyms::default(),
            brands: vec![Brand {
                id: "b1".into(),
                name: "Milbon".into(),
                description: String::new(),
            }],
            lines: vec![Line {
                id: "l1".into(),
                brand_id: "b1".into(),
                name: "Neo Liscio".into(),
                description: String::new(),
            }],
            products: vec![Product {
                id: "p1".into(),
                brand_id: "b1".into(),
                line_id: "l1".into(),
                name: "SH".into(),
                description: String::new(),
                specs: vec![],
                target_hair: vec![],
            }],
        }
    }

    #[test]
    fn test_product_lookup() {
        let c = catalog();
        assert!(c.product("p1").is_some());
        assert!(c.product("missing").is_none());
    }

    #[test]
    fn test_dangling_brand_resolves_to_none() {
        let mut c = catalog();
        c.products[0].brand_id = "deleted".into();
        let p = c.products[0].clone();
        assert_eq!(c.brand_name(&p), None);
    }

    #[test]
    fn test_brand_and_line_names() {
        let c = catalog();
        let p = c.products[0].clone();
        assert_eq!(c.brand_name(&p), Some("Milbon"));
        assert_eq!(c.line_name(&p), Some("Neo Liscio"));
    }
}
