//! Hierarchy Filter — cascading location narrowing.
//!
//! Two stages run over a record subset, each independently:
//!
//! 1. **Top location** (エリア): group by `top_location`, rank values by
//!    count descending, narrow to one value or keep everything.
//! 2. **Leaf location** (店舗): same policy over `leaf_location`, scoped to
//!    whatever survived stage 1.
//!
//! Ranking ties are broken by first-seen insertion order, so a given input
//! always produces the same presentation list. Records with an absent
//! `top_location` cannot be ranked or selected by name but remain in the
//! subset while the "all" pseudo-choice is active.

use rustc_hash::FxHashMap;
use voicebox_types::Record;

/// The distinguished "all" pseudo-choice label.
pub const ALL_LABEL: &str = "全て";

/// One selectable value for a hierarchy stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedValue {
    /// The location name.
    pub value: String,
    /// Number of records in the stage input carrying this value.
    pub count: u64,
}

impl RankedValue {
    /// Selector label in `"name (count)"` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.value, self.count)
    }
}

/// A stage choice: either the "all" pseudo-choice or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationChoice {
    /// Keep the full incoming subset; the stage becomes a no-op.
    All,
    /// Keep only records whose location equals the named value.
    Named(String),
}

impl LocationChoice {
    /// Parses a selector label back into a choice.
    ///
    /// Accepts both the bare "all" label and `"name (count)"` labels as the
    /// select box renders them; the count suffix is stripped.
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed == ALL_LABEL {
            return LocationChoice::All;
        }
        let name = match trimmed.split_once('(') {
            Some((name, _)) => name.trim(),
            None => trimmed,
        };
        LocationChoice::Named(name.to_owned())
    }
}

/// Counts values preserving first-seen order, then ranks by count descending.
///
/// The sort is stable, so equal counts keep their insertion order.
fn rank_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<RankedValue> {
    let mut slots: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut ranked: Vec<RankedValue> = Vec::new();

    for value in values {
        match slots.get(value) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                slots.insert(value, ranked.len());
                ranked.push(RankedValue {
                    value: value.to_owned(),
                    count: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Ranked `(value, count)` list for the top-location stage.
///
/// Records without a top location are excluded from the ranking; they can
/// only survive the stage through [`LocationChoice::All`].
#[must_use]
pub fn rank_top_locations(records: &[Record]) -> Vec<RankedValue> {
    rank_values(records.iter().filter_map(|r| r.top_location.as_deref()))
}

/// Ranked `(value, count)` list for the leaf-location stage.
#[must_use]
pub fn rank_leaf_locations(records: &[Record]) -> Vec<RankedValue> {
    rank_values(records.iter().map(|r| r.leaf_location.as_str()))
}

/// Applies the top-location stage choice.
#[must_use]
pub fn filter_top(records: &[Record], choice: &LocationChoice) -> Vec<Record> {
    match choice {
        LocationChoice::All => records.to_vec(),
        LocationChoice::Named(name) => records
            .iter()
            .filter(|r| r.top_location.as_deref() == Some(name.as_str()))
            .cloned()
            .collect(),
    }
}

/// Applies the leaf-location stage choice.
#[must_use]
pub fn filter_leaf(records: &[Record], choice: &LocationChoice) -> Vec<Record> {
    match choice {
        LocationChoice::All => records.to_vec(),
        LocationChoice::Named(name) => records
            .iter()
            .filter(|r| r.leaf_location == *name)
            .cloned()
            .collect(),
    }
}
