use serde_json::{Map, Value};
use crate::models::{FlatRecord, Match};

/// Merge two mappings into one
///
/// Every key of both inputs is kept. When a key exists in both, the value
/// from `second` wins.
pub fn merge_records(first: &Map<String, Value>, second: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = first.clone();
    for (key, value) in second {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Flatten a single match: `correlation` overlaid onto `otherActivity`
#[inline]
pub fn flatten_match(m: &Match) -> FlatRecord {
    FlatRecord::new(merge_records(&m.other_activity, &m.correlation))
}

/// Flatten matches into records, one per match, input order preserved
pub fn flatten_matches(matches: &[Match]) -> Vec<FlatRecord> {
    matches.iter().map(flatten_match).collect()
}
