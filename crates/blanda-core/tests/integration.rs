//! Integration tests for the blend pipeline end to end: builtin demo
//! catalog -> entry list -> weighted summary.

use blanda_core::catalog::builtin::load_preset;
use blanda_core::catalog::filter::ProductFilter;
use blanda_core::{summarize, summarize_blend_file, BlendSheet, MixEntry};
use rust_decimal_macros::dec;

fn entry(product_id: &str, grams: rust_decimal::Decimal) -> MixEntry {
    MixEntry::new(product_id, product_id, grams)
}

// ---------------------------------------------------------------------------
// Test 1: Demo catalog, SH 100g + N 50g — the canonical scenario
// ---------------------------------------------------------------------------
#[test]
fn demo_blend_sh_plus_n() {
    let catalog = load_preset("demo").unwrap();
    // p1: pH 9.3, alk 6.5, power 11.0; p3: pH 8.8, alk 3.0, power 7.0
    let entries = vec![entry("p1", dec!(100)), entry("p3", dec!(50))];

    let summary = summarize(&catalog, &entries).unwrap();
    assert_eq!(summary.total_grams, dec!(150));
    assert_eq!(summary.ph, dec!(9.13));
    assert_eq!(summary.alkalinity, dec!(5.33));
    assert_eq!(summary.reducing_power, dec!(9.67));
    // p1 contributes アンモニア, p3 contributes MEA
    assert_eq!(summary.alkaline_agents, vec!["アンモニア", "MEA"]);
    assert_eq!(summary.reducing_agents, vec!["チオグリコール酸"]);
}

// ---------------------------------------------------------------------------
// Test 2: Multi-ingredient agent lists merge without duplicates
// ---------------------------------------------------------------------------
#[test]
fn demo_blend_merges_agent_lists() {
    let catalog = load_preset("demo").unwrap();
    // p3 alkali: MEA; p4 alkali: アルギニン、MEA
    let entries = vec![entry("p3", dec!(60)), entry("p4", dec!(40))];

    let summary = summarize(&catalog, &entries).unwrap();
    assert_eq!(summary.alkaline_agents, vec!["MEA", "アルギニン"]);
    assert_eq!(
        summary.reducing_agents,
        vec!["チオグリコール酸", "システイン"]
    );
}

// ---------------------------------------------------------------------------
// Test 3: Sheet prefill from a filtered selection, then weights assigned
// ---------------------------------------------------------------------------
#[test]
fn filter_prefill_then_summarize() {
    let catalog = load_preset("demo").unwrap();
    let filter = ProductFilter {
        hair_type: Some("強いクセ毛".into()),
        ..ProductFilter::default()
    };
    let ids: Vec<String> = filter
        .apply(&catalog)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids, vec!["p1", "p4"]);

    let mut sheet = BlendSheet::new();
    sheet.prefill(ids);
    // Prefilled entries carry zero grams: no result yet.
    assert!(summarize(&catalog, sheet.entries()).is_none());

    let entry_ids: Vec<String> = sheet.entries().iter().map(|e| e.id.clone()).collect();
    for id in &entry_ids {
        assert!(sheet.set_grams(id, dec!(50)));
    }
    let summary = summarize(&catalog, sheet.entries()).unwrap();
    assert_eq!(summary.total_grams, dec!(100));
    // (9.3 + 9.4) / 2
    assert_eq!(summary.ph, dec!(9.35));
}

// ---------------------------------------------------------------------------
// Test 4: Reset collapses the sheet and yields no result
// ---------------------------------------------------------------------------
#[test]
fn reset_clears_result() {
    let catalog = load_preset("demo").unwrap();
    let mut sheet = BlendSheet::new();
    sheet.prefill(["p1"]);
    let id = sheet.entries()[0].id.clone();
    sheet.set_grams(&id, dec!(100));
    assert!(summarize(&catalog, sheet.entries()).is_some());

    sheet.reset();
    assert!(summarize(&catalog, sheet.entries()).is_none());
}

// ---------------------------------------------------------------------------
// Test 5: Entries referencing removed products degrade gracefully
// ---------------------------------------------------------------------------
#[test]
fn removed_product_excluded_from_blend() {
    let mut catalog = load_preset("demo").unwrap();
    catalog.products.retain(|p| p.id != "p1");

    let entries = vec![entry("p1", dec!(100)), entry("p2", dec!(50))];
    let summary = summarize(&catalog, &entries).unwrap();
    // Only p2 counts: its own values come straight through.
    assert_eq!(summary.total_grams, dec!(50));
    assert_eq!(summary.ph, dec!(9.10));

    let only_gone = vec![entry("p1", dec!(100))];
    assert!(summarize(&catalog, &only_gone).is_none());
}

// ---------------------------------------------------------------------------
// Test 6: File-based pipeline — catalog JSON + blend JSON from disk
// ---------------------------------------------------------------------------
#[test]
fn summarize_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "name": "File catalog",
            "version": "1.0",
            "products": [
                {
                    "id": "a", "brandId": "b1", "lineId": "l1", "name": "A",
                    "specs": [
                        { "id": "s1", "label": "pH", "value": "9.0" },
                        { "id": "s2", "label": "アルカリ度", "value": "5.0" },
                        { "id": "s3", "label": "総還元力", "value": "10.0" },
                        { "id": "s4", "label": "アルカリ成分", "value": "Ammonia, MEA" },
                        { "id": "s5", "label": "還元成分", "value": "-" }
                    ]
                },
                {
                    "id": "b", "brandId": "b1", "lineId": "l1", "name": "B",
                    "specs": [
                        { "id": "s1", "label": "pH", "value": "7.0" },
                        { "id": "s4", "label": "アルカリ成分", "value": "MEA, Arginine" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let blend_path = dir.path().join("blend.json");
    std::fs::write(
        &blend_path,
        r#"[
            { "id": "1", "productId": "a", "grams": "100" },
            { "id": "2", "productId": "b", "grams": "100" },
            { "id": "3", "grams": "0" }
        ]"#,
    )
    .unwrap();

    let summary = summarize_blend_file(&catalog_path, &blend_path)
        .unwrap()
        .unwrap();
    assert_eq!(summary.total_grams, dec!(200));
    assert_eq!(summary.ph, dec!(8.00));
    // b has no アルカリ度/総還元力 specs: they average in as zero.
    assert_eq!(summary.alkalinity, dec!(2.50));
    assert_eq!(summary.reducing_power, dec!(5.00));
    assert_eq!(summary.alkaline_agents, vec!["Ammonia", "MEA", "Arginine"]);
    assert!(summary.reducing_agents.is_empty());
}

// ---------------------------------------------------------------------------
// Test 7: Custom synonyms carried by the catalog file
// ---------------------------------------------------------------------------
#[test]
fn catalog_synonyms_override() {
    let json = r#"{
        "name": "English labels",
        "version": "1.0",
        "synonyms": {
            "ph": ["acidity"],
            "alkalinity": ["alkalinity"],
            "reducingPower": ["reducing value"],
            "alkalineAgents": ["alkaline component"],
            "reducingAgents": ["reducing agent"]
        },
        "products": [
            {
                "id": "a", "brandId": "b1", "lineId": "l1", "name": "A",
                "specs": [
                    { "id": "s1", "label": "acidity", "value": "8.5" },
                    { "id": "s2", "label": "reducing value", "value": "6.0" },
                    { "id": "s3", "label": "alkaline component", "value": "Arginine" }
                ]
            }
        ]
    }"#;
    let catalog = blanda_core::catalog::parse_catalog_str(json).unwrap();
    let entries = vec![entry("a", dec!(10))];

    let summary = summarize(&catalog, &entries).unwrap();
    assert_eq!(summary.ph, dec!(8.50));
    assert_eq!(summary.reducing_power, dec!(6.00));
    assert_eq!(summary.alkaline_agents, vec!["Arginine"]);
}
