//! In-memory record filtering for the generic filter variant
//!
//! Evaluates [`FilterCondition`]s directly against JSON records instead of
//! generating SQL. All conditions combine with AND; comparisons are
//! case-sensitive and run on the string form of the record field.

use crate::condition::FilterCondition;
use crate::types::FilterOperator;

/// Whether a record satisfies every valid condition in the list.
///
/// Conditions that are not fully filled in are skipped. A record field that
/// is absent coerces the same way as an explicit JSON null.
pub fn matches_record(record: &serde_json::Value, conditions: &[FilterCondition]) -> bool {
    conditions
        .iter()
        .filter(|c| c.is_valid())
        .all(|c| matches_condition(record, c))
}

/// Filter a record collection down to those satisfying every condition
pub fn apply_filters<'a>(
    records: &'a [serde_json::Value],
    conditions: &[FilterCondition],
) -> Vec<&'a serde_json::Value> {
    if conditions.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| matches_record(record, conditions))
        .collect()
}

fn matches_condition(record: &serde_json::Value, condition: &FilterCondition) -> bool {
    let field_value = record
        .get(&condition.field)
        .map_or_else(|| "null".to_string(), json_value_to_string);
    let filter_value = condition.value.as_str();

    match condition.operator {
        FilterOperator::Contains => field_value.contains(filter_value),
        FilterOperator::NotContains => !field_value.contains(filter_value),
        FilterOperator::Equals => field_value == filter_value,
        FilterOperator::NotEquals => field_value != filter_value,
        FilterOperator::StartsWith => field_value.starts_with(filter_value),
        FilterOperator::EndsWith => field_value.ends_with(filter_value),
    }
}

/// Convert a JSON value to its string form for comparison
fn json_value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        _ => value.to_string(),
    }
}
