use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed profile for the current set of active entries.
///
/// Purely derived: recomputed from the catalog and entry list on every
/// call, never cached or persisted. Numeric fields are
/// quantity-weighted averages rounded to 2 fractional digits
/// (half-away-from-zero); agent lists are duplicate-free and keep
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixSummary {
    pub ph: Decimal,
    pub alkalinity: Decimal,
    pub reducing_power: Decimal,
    pub alkaline_agents: Vec<String>,
    pub reducing_agents: Vec<String>,
    /// Exact sum of grams over active, resolvable entries.
    pub total_grams: Decimal,
}
