use serde::{Deserialize, Serialize};

use crate::model::Spec;

/// The five semantic fields the mixer aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecField {
    Ph,
    Alkalinity,
    ReducingPower,
    AlkalineAgents,
    ReducingAgents,
}

/// Accepted spec labels per semantic field.
///
/// Kept as explicit, exhaustive configuration rather than inferred
/// matching: an unlisted label never participates in aggregation, even
/// if it looks similar. Catalogs may override the lists; the defaults
/// cover the Japanese manufacturer labels and their English
/// equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSynonyms {
    pub ph: Vec<String>,
    pub alkalinity: Vec<String>,
    pub reducing_power: Vec<String>,
    pub alkaline_agents: Vec<String>,
    pub reducing_agents: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FieldSynonyms {
    fn default() -> Self {
        Self {
            ph: strings(&["pH"]),
            alkalinity: strings(&["アルカリ度", "alkalinity"]),
            reducing_power: strings(&[
                "総還元力",
                "還元力",
                "還元値",
                "total reducing power",
                "reducing power",
                "reducing value",
            ]),
            alkaline_agents: strings(&["アルカリ成分", "alkaline component"]),
            reducing_agents: strings(&[
                "還元成分",
                "還元剤",
                "reducing component",
                "reducing agent",
            ]),
        }
    }
}

impl FieldSynonyms {
    pub fn labels(&self, field: SpecField) -> &[String] {
        match field {
            SpecField::Ph => &self.ph,
            SpecField::Alkalinity => &self.alkalinity,
            SpecField::ReducingPower => &self.reducing_power,
            SpecField::AlkalineAgents => &self.alkaline_agents,
            SpecField::ReducingAgents => &self.reducing_agents,
        }
    }
}

/// Resolve a semantic field against a product's spec list.
///
/// Scans in stored order and returns the value of the first spec whose
/// trimmed label exactly equals one of the field's synonyms. Returns
/// `None` when no label matches; callers apply the absent-value policy
/// from [`crate::values`].
pub fn find_spec<'a>(
    specs: &'a [Spec],
    synonyms: &FieldSynonyms,
    field: SpecField,
) -> Option<&'a str> {
    let labels = synonyms.labels(field);
    specs
        .iter()
        .find(|s| labels.iter().any(|l| l.as_str() == s.label.trim()))
        .map(|s| s.value.as_str())
}
