use blanda_core::catalog::filter::ProductFilter;
use blanda_core::error::BlandaError;
use blanda_core::BlendSheet;
use std::path::PathBuf;

use crate::output;

pub fn run(
    brand: Option<String>,
    line: Option<String>,
    hair: Option<String>,
    query: Option<String>,
    catalog_file: Option<PathBuf>,
    preset: &str,
    prefill: Option<PathBuf>,
) -> Result<(), BlandaError> {
    let catalog = super::load_catalog(catalog_file, preset)?;

    let filter = ProductFilter {
        brand,
        line,
        hair_type: hair,
        query,
    };
    let products = filter.apply(&catalog);

    if products.is_empty() {
        println!("No matching products.");
        if let Some(path) = prefill {
            eprintln!(
                "No blend template written to {} (no products matched)",
                path.display()
            );
        }
        return Ok(());
    }

    output::table::print_products(&catalog, &products);

    if let Some(path) = prefill {
        let mut sheet = BlendSheet::new();
        sheet.prefill(products.iter().map(|p| p.id.clone()));
        let json = serde_json::to_string_pretty(sheet.entries())?;
        std::fs::write(&path, json)?;
        eprintln!(
            "Blend template with {} entr{} written to {} (fill in grams, then run `blanda mix`)",
            products.len(),
            if products.len() == 1 { "y" } else { "ies" },
            path.display()
        );
    }

    Ok(())
}
