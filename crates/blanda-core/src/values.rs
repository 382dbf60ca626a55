use rust_decimal::Decimal;
use std::str::FromStr;

/// Marker a product uses for a spec it does not state.
///
/// Rendered as-is for display, treated as zero for computation and
/// skipped entirely by the ingredient merge.
pub const ABSENT: &str = "-";

pub fn is_absent(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == ABSENT
}

/// Lenient numeric coercion for spec values.
///
/// Handles:
/// - "9.3"  -> 9.3
/// - " 6.5 " -> 6.5
/// - "-" or "" -> 0
/// - non-numeric text -> 0
/// - `None` (label missing on product) -> 0
///
/// Falling back to zero is the documented default policy for absent or
/// malformed values, not an error path.
pub fn numeric_or_zero(s: Option<&str>) -> Decimal {
    match s {
        Some(raw) if !is_absent(raw) => {
            Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// Split an ingredient-list value into trimmed tokens.
///
/// Values delimit ingredient names with the full-width comma (、) or the
/// half-width comma. Empty tokens and the absent marker are dropped.
pub fn split_agents(s: &str) -> Vec<String> {
    s.split(['、', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty() && *t != ABSENT)
        .map(str::to_string)
        .collect()
}
