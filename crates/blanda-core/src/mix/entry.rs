use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One (product, quantity) pairing in the blend being simulated.
///
/// `product_id` of `None` (or empty) means the slot has not been
/// assigned yet. Grams are non-negative; an entry only participates in
/// aggregation once it has both a product and a strictly positive
/// amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixEntry {
    pub id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub grams: Decimal,
}

impl MixEntry {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_id: None,
            grams: Decimal::ZERO,
        }
    }

    pub fn new(id: impl Into<String>, product_id: impl Into<String>, grams: Decimal) -> Self {
        Self {
            id: id.into(),
            product_id: Some(product_id.into()),
            grams,
        }
    }

    /// Active entries are the only ones the engine aggregates.
    pub fn is_active(&self) -> bool {
        let has_product = self
            .product_id
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());
        has_product && self.grams > Decimal::ZERO
    }
}

/// The ordered entry list behind the mixer, with the operations the
/// selection layer drives: add, remove, update, prefill and reset.
#[derive(Debug, Clone)]
pub struct BlendSheet {
    entries: Vec<MixEntry>,
    next_id: u64,
}

impl Default for BlendSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl BlendSheet {
    /// A fresh sheet holds a single unset entry.
    pub fn new() -> Self {
        Self {
            entries: vec![MixEntry::empty("1")],
            next_id: 2,
        }
    }

    pub fn entries(&self) -> &[MixEntry] {
        &self.entries
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    /// Append a fresh unset entry and return its id.
    pub fn add(&mut self) -> String {
        let id = self.allocate_id();
        self.entries.push(MixEntry::empty(id.clone()));
        id
    }

    /// Remove an entry by id. The last remaining entry is kept, as in
    /// the mixer UI.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    pub fn set_product(&mut self, id: &str, product_id: Option<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.product_id = product_id;
                true
            }
            None => false,
        }
    }

    pub fn set_grams(&mut self, id: &str, grams: Decimal) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.grams = grams;
                true
            }
            None => false,
        }
    }

    /// Replace the whole list with one zero-gram entry per selected
    /// product id. Used when the catalog browser pushes a selection
    /// into the mixer.
    pub fn prefill<I, S>(&mut self, product_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<MixEntry> = product_ids
            .into_iter()
            .enumerate()
            .map(|(i, pid)| MixEntry::new(format!("prefilled-{i}"), pid, Decimal::ZERO))
            .collect();
        if entries.is_empty() {
            self.reset();
        } else {
            self.entries = entries;
        }
    }

    /// Collapse back to a single unset entry.
    pub fn reset(&mut self) {
        self.entries = vec![MixEntry::empty("1")];
        self.next_id = 2;
    }
}
