use blanda_core::fields::{find_spec, SpecField};
use blanda_core::model::{Catalog, Product};
use blanda_core::values::ABSENT;
use blanda_core::MixSummary;

pub fn print_summary(summary: Option<&MixSummary>) {
    let Some(summary) = summary else {
        println!("No result. Assign products and positive gram amounts to the blend.");
        return;
    };

    println!("Blend profile ({} g total)\n", summary.total_grams);
    println!("  pH              {}", summary.ph);
    println!("  Alkalinity      {}", summary.alkalinity);
    println!("  Reducing power  {}", summary.reducing_power);
    println!();
    println!("  Alkaline agents  {}", agents_text(&summary.alkaline_agents));
    println!("  Reducing agents  {}", agents_text(&summary.reducing_agents));
}

fn agents_text(agents: &[String]) -> String {
    if agents.is_empty() {
        "none".to_string()
    } else {
        agents.join(", ")
    }
}

pub fn print_products(catalog: &Catalog, products: &[&Product]) {
    let max_name = products
        .iter()
        .map(|p| display_name(catalog, p).chars().count())
        .max()
        .unwrap_or(10);

    println!(
        "  {:<width$}  {:>5}  {:>5}  {:>5}  {}",
        "Product",
        "pH",
        "Alk",
        "Pow",
        "Agents (alkaline / reducing)",
        width = max_name
    );

    let syn = &catalog.synonyms;
    for product in products {
        let ph = find_spec(&product.specs, syn, SpecField::Ph).unwrap_or(ABSENT);
        let alk = find_spec(&product.specs, syn, SpecField::Alkalinity).unwrap_or(ABSENT);
        let power = find_spec(&product.specs, syn, SpecField::ReducingPower).unwrap_or(ABSENT);
        let alkali = find_spec(&product.specs, syn, SpecField::AlkalineAgents).unwrap_or(ABSENT);
        let reducer = find_spec(&product.specs, syn, SpecField::ReducingAgents).unwrap_or(ABSENT);

        let name = display_name(catalog, product);
        let pad = max_name.saturating_sub(name.chars().count());
        println!(
            "  {}{}  {:>5}  {:>5}  {:>5}  {} / {}",
            name,
            " ".repeat(pad),
            ph,
            alk,
            power,
            alkali,
            reducer
        );
    }
}

/// "[Brand] Name", with an "unclassified" placeholder when the brand
/// reference dangles.
fn display_name(catalog: &Catalog, product: &Product) -> String {
    let brand = catalog.brand_name(product).unwrap_or("unclassified");
    // Brands carry a long bilingual name; the first token is enough
    // for a list column.
    let short = brand.split_whitespace().next().unwrap_or(brand);
    format!("[{}] {}", short, product.name)
}
