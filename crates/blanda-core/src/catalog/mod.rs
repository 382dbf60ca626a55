pub mod builtin;
pub mod filter;

use crate::error::BlandaError;
use crate::model::Catalog;
use std::collections::HashSet;
use std::path::Path;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, BlandaError> {
    let content = std::fs::read_to_string(path).map_err(|e| BlandaError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, BlandaError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| BlandaError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, BlandaError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(BlandaError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
///
/// Dangling brand/line references are deliberately NOT errors: the
/// engine degrades them to "unclassified" display. `catalog validate`
/// in the CLI reports them as warnings via [`dangling_references`].
pub fn validate_catalog(catalog: &Catalog) -> Result<(), BlandaError> {
    if catalog.products.is_empty() {
        return Err(BlandaError::CatalogInvalid(
            "products must not be empty".into(),
        ));
    }

    check_ids("brand", catalog.brands.iter().map(|b| b.id.as_str()))?;
    check_ids("line", catalog.lines.iter().map(|l| l.id.as_str()))?;
    check_ids("product", catalog.products.iter().map(|p| p.id.as_str()))?;

    for product in &catalog.products {
        if product.name.is_empty() {
            return Err(BlandaError::CatalogInvalid(format!(
                "product '{}' has no name",
                product.id
            )));
        }
        for spec in &product.specs {
            if spec.label.trim().is_empty() {
                return Err(BlandaError::CatalogInvalid(format!(
                    "product '{}' has a spec with an empty label",
                    product.id
                )));
            }
        }
    }

    Ok(())
}

fn check_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), BlandaError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(BlandaError::CatalogInvalid(format!(
                "{kind} id must not be empty"
            )));
        }
        if !seen.insert(id) {
            return Err(BlandaError::CatalogInvalid(format!(
                "duplicate {kind} id '{id}'"
            )));
        }
    }
    Ok(())
}

/// Collect dangling brand/line references for warning output.
pub fn dangling_references(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();
    for line in &catalog.lines {
        if catalog.brand(&line.brand_id).is_none() {
            warnings.push(format!(
                "line '{}' references unknown brand '{}'",
                line.id, line.brand_id
            ));
        }
    }
    for product in &catalog.products {
        if catalog.brand(&product.brand_id).is_none() {
            warnings.push(format!(
                "product '{}' references unknown brand '{}'",
                product.id, product.brand_id
            ));
        }
        if catalog.line(&product.line_id).is_none() {
            warnings.push(format!(
                "product '{}' references unknown line '{}'",
                product.id, product.line_id
            ));
        }
    }
    warnings
}
