use rust_decimal::{Decimal, RoundingStrategy};

use crate::fields::{find_spec, SpecField};
use crate::mix::entry::MixEntry;
use crate::mix::summary::MixSummary;
use crate::model::Catalog;
use crate::values::{numeric_or_zero, split_agents};

/// Compute the weighted-average profile for a blend.
///
/// Returns `None` iff the total active, resolvable weight is zero —
/// never a summary with division artifacts. Entries whose product id
/// does not resolve are skipped silently; the catalog may have mutated
/// since the entry was created.
///
/// The numeric fields are linear weighted averages. pH is physically
/// logarithmic, but the linear approximation is the convention for
/// blend planning and is kept deliberately.
pub fn summarize(catalog: &Catalog, entries: &[MixEntry]) -> Option<MixSummary> {
    let mut total_grams = Decimal::ZERO;
    let mut weighted_ph = Decimal::ZERO;
    let mut weighted_alk = Decimal::ZERO;
    let mut weighted_power = Decimal::ZERO;
    let mut alkaline_agents: Vec<String> = Vec::new();
    let mut reducing_agents: Vec<String> = Vec::new();

    let synonyms = &catalog.synonyms;

    for entry in entries.iter().filter(|e| e.is_active()) {
        let id = entry.product_id.as_deref().unwrap_or_default();
        let Some(product) = catalog.product(id) else {
            continue;
        };

        let ph = numeric_or_zero(find_spec(&product.specs, synonyms, SpecField::Ph));
        let alk = numeric_or_zero(find_spec(&product.specs, synonyms, SpecField::Alkalinity));
        let power = numeric_or_zero(find_spec(
            &product.specs,
            synonyms,
            SpecField::ReducingPower,
        ));

        total_grams += entry.grams;
        weighted_ph += ph * entry.grams;
        weighted_alk += alk * entry.grams;
        weighted_power += power * entry.grams;

        merge_agents(
            &mut alkaline_agents,
            find_spec(&product.specs, synonyms, SpecField::AlkalineAgents),
        );
        merge_agents(
            &mut reducing_agents,
            find_spec(&product.specs, synonyms, SpecField::ReducingAgents),
        );
    }

    if total_grams.is_zero() {
        return None;
    }

    Some(MixSummary {
        ph: round2(weighted_ph / total_grams),
        alkalinity: round2(weighted_alk / total_grams),
        reducing_power: round2(weighted_power / total_grams),
        alkaline_agents,
        reducing_agents,
        total_grams,
    })
}

/// Fixed display rounding: 2 fractional digits, half away from zero.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Union agent tokens into `into`, keeping first-seen order and exact
/// string identity. No alias merging: "Ammonia" and "ammonia" stay
/// distinct entries.
fn merge_agents(into: &mut Vec<String>, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };
    for token in split_agents(raw) {
        if !into.contains(&token) {
            into.push(token);
        }
    }
}
