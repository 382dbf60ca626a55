use blanda_core::catalog::{builtin, dangling_references};
use blanda_core::error::BlandaError;
use blanda_core::model::{Catalog, Product};
use std::path::{Path, PathBuf};

use crate::output;

pub fn list() -> Result<(), BlandaError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let c = builtin::load_preset(name)?;
        println!(
            "  {:<8} {} (v{}) -- {} brands, {} lines, {} products",
            name,
            c.name,
            c.version,
            c.brands.len(),
            c.lines.len(),
            c.products.len()
        );
        if let Some(ref desc) = c.description {
            println!("           {desc}");
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str, catalog_file: Option<PathBuf>) -> Result<(), BlandaError> {
    let catalog = super::load_catalog(catalog_file, preset)?;

    println!("{} (version {})", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{desc}");
    }
    println!();

    for brand in &catalog.brands {
        println!("{}", brand.name);
        if !brand.description.is_empty() {
            println!("  {}", brand.description);
        }
        for line in catalog.lines.iter().filter(|l| l.brand_id == brand.id) {
            println!("  {}", line.name);
            let members: Vec<_> = catalog
                .products
                .iter()
                .filter(|p| p.line_id == line.id)
                .collect();
            if !members.is_empty() {
                output::table::print_products(&catalog, &members);
            }
        }
        println!();
    }

    // Dangling references degrade to an "unclassified" listing; no
    // product disappears from the output.
    let orphans = unlisted_products(&catalog);
    if !orphans.is_empty() {
        println!("unclassified");
        output::table::print_products(&catalog, &orphans);
    }

    Ok(())
}

/// Products the brand/line walk above cannot reach.
///
/// The walk prints a product iff its line reference resolves (a
/// product with a dangling brand but a valid line still appears under
/// that line's section), so the leftover bucket is exactly the
/// products whose line does not resolve.
fn unlisted_products(catalog: &Catalog) -> Vec<&Product> {
    catalog
        .products
        .iter()
        .filter(|p| catalog.line(&p.line_id).is_none())
        .collect()
}

pub fn schema() -> Result<(), BlandaError> {
    print!(
        r#"Catalog JSON Schema
===================

A catalog file holds the brands, lines and products the mixer works
over, plus (optionally) the spec-label synonym configuration.

Top-level fields:
  name          (string, required)  Human-readable catalog name
  version       (string, required)  Version identifier (e.g., "2025.1")
  description   (string, optional)  What this catalog covers
  synonyms      (object, optional)  Accepted spec labels per semantic
                                    field. Keys: ph, alkalinity,
                                    reducingPower, alkalineAgents,
                                    reducingAgents; each a list of label
                                    strings. Defaults cover the Japanese
                                    manufacturer labels and English
                                    equivalents.
  brands        (array, optional)   {{ id, name, description }}
  lines         (array, optional)   {{ id, brandId, name, description }}
  products      (array, required)   List of products (see below)

Each product:
  id            (string, required)  Unique product id
  brandId       (string, required)  Owning brand id. A reference to a
                                    missing brand is not an error; the
                                    product displays as "unclassified".
  lineId        (string, required)  Owning line id (same policy)
  name          (string, required)  Display name
  description   (string, optional)
  specs         (array, optional)   {{ id, label, value }} pairs, in
                                    display order. Values are free-form
                                    strings: decimal numbers for pH /
                                    alkalinity / reducing power, comma-
                                    or 、-delimited ingredient lists for
                                    the agent fields, "-" for absent.
  targetHair    (array, optional)   Hair-type tags for filtering

Example:
{{
  "name": "My salon catalog",
  "version": "1.0",
  "brands": [{{ "id": "b1", "name": "Milbon" }}],
  "lines": [{{ "id": "l1", "brandId": "b1", "name": "Neo Liscio" }}],
  "products": [
    {{
      "id": "p1", "brandId": "b1", "lineId": "l1", "name": "SH",
      "specs": [
        {{ "id": "s1", "label": "pH", "value": "9.3" }},
        {{ "id": "s2", "label": "アルカリ度", "value": "6.5" }},
        {{ "id": "s3", "label": "総還元力", "value": "11.0" }},
        {{ "id": "s4", "label": "アルカリ成分", "value": "アンモニア" }},
        {{ "id": "s5", "label": "還元成分", "value": "チオグリコール酸" }}
      ],
      "targetHair": ["強いクセ毛"]
    }}
  ]
}}

Blend files (for `blanda mix`) are a JSON array of entries:
  [{{ "id": "1", "productId": "p1", "grams": "100" }}]
Gram values are quoted strings, not bare numbers, to preserve exact
decimal precision (e.g., "12.5" not 12.5). Entries with no productId or
zero grams are kept but ignored by the calculation.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), BlandaError> {
    let catalog = blanda_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!(
        "  {} brands, {} lines, {} products",
        catalog.brands.len(),
        catalog.lines.len(),
        catalog.products.len()
    );

    // Dangling references degrade to "unclassified" at display time;
    // report them as warnings, not errors.
    let warnings = dangling_references(&catalog);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
