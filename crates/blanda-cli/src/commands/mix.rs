use blanda_core::error::BlandaError;
use blanda_core::MixEntry;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::output;

pub fn run(
    blend_file: Option<PathBuf>,
    inline_entries: Vec<String>,
    catalog_file: Option<PathBuf>,
    preset: &str,
    output_format: &str,
) -> Result<(), BlandaError> {
    let catalog = super::load_catalog(catalog_file, preset)?;

    let mut entries: Vec<MixEntry> = Vec::new();
    if let Some(path) = blend_file {
        entries.extend(blanda_core::mix::load_blend(&path)?);
    }
    for (i, spec) in inline_entries.iter().enumerate() {
        entries.push(parse_entry_spec(spec, i)?);
    }

    if entries.is_empty() {
        return Err(BlandaError::EntrySpec(
            "no blend given: pass a blend file or -e PRODUCT_ID:GRAMS".into(),
        ));
    }

    let summary = blanda_core::summarize(&catalog, &entries);

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print_summary(summary.as_ref()),
    }

    Ok(())
}

/// Parse an inline `PRODUCT_ID:GRAMS` argument.
fn parse_entry_spec(spec: &str, index: usize) -> Result<MixEntry, BlandaError> {
    let (product_id, grams_str) = spec
        .rsplit_once(':')
        .ok_or_else(|| BlandaError::EntrySpec(spec.to_string()))?;
    if product_id.trim().is_empty() {
        return Err(BlandaError::EntrySpec(spec.to_string()));
    }
    let grams = Decimal::from_str(grams_str.trim())
        .map_err(|_| BlandaError::EntrySpec(spec.to_string()))?;
    if grams < Decimal::ZERO {
        return Err(BlandaError::EntrySpec(spec.to_string()));
    }
    Ok(MixEntry::new(
        format!("arg-{index}"),
        product_id.trim(),
        grams,
    ))
}
