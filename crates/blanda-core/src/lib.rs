pub mod catalog;
pub mod error;
pub mod fields;
pub mod mix;
pub mod model;
pub mod values;

pub use mix::{summarize, BlendSheet, MixEntry, MixSummary};

use error::BlandaError;
use std::path::Path;

/// Main API entry point: load a catalog and a blend file, then compute
/// the mixture summary.
///
/// Returns `Ok(None)` when the blend has no active weight — an empty
/// sheet, all-zero grams, or nothing but dangling product references.
pub fn summarize_blend_file(
    catalog_path: &Path,
    blend_path: &Path,
) -> Result<Option<MixSummary>, BlandaError> {
    let catalog = catalog::load_catalog(catalog_path)?;
    let entries = mix::load_blend(blend_path)?;
    Ok(summarize(&catalog, &entries))
}
