use crate::catalog::parse_catalog_str;
use crate::error::BlandaError;
use crate::model::Catalog;

const DEMO_CATALOG_JSON: &str = include_str!("../../data/demo-catalog.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["demo"];

/// Load a predefined catalog by name.
///
/// Presets go through the same parse-and-validate path as catalog
/// files.
pub fn load_preset(name: &str) -> Result<Catalog, BlandaError> {
    match name {
        "demo" => parse_catalog_str(DEMO_CATALOG_JSON),
        _ => Err(BlandaError::UnknownPreset(name.to_string())),
    }
}
