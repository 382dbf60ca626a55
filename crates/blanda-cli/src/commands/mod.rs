pub mod catalog;
pub mod mix;
pub mod products;

use blanda_core::error::BlandaError;
use blanda_core::model::Catalog;
use std::path::PathBuf;

/// Shared catalog resolution: an explicit file wins over a preset.
pub fn load_catalog(
    catalog_file: Option<PathBuf>,
    preset: &str,
) -> Result<Catalog, BlandaError> {
    match catalog_file {
        Some(path) => blanda_core::catalog::load_catalog(&path),
        None => blanda_core::catalog::builtin::load_preset(preset),
    }
}
