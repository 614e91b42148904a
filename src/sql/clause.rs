//! WHERE clause generation from filter conditions
//!
//! Converts an ordered list of [`SqlCondition`]s into a flat boolean
//! expression string. The generator is a pure function: invalid conditions
//! are skipped, unknown operators render through the default comparison
//! path, and nothing here ever fails.
//!
//! Values are rendered verbatim with no escaping or quoting safety; callers
//! own any sanitization concerns.

use crate::condition::SqlCondition;
use crate::types::is_null_check;

/// Build a WHERE clause fragment from an ordered condition list.
///
/// Only valid conditions contribute (see [`SqlCondition::is_valid`]); their
/// relative order is preserved and no grouping parentheses are added.
/// Conditions after the first are joined by their own `logic` value. With no
/// valid conditions the result is the empty string.
///
/// # Example
/// ```
/// use filter_clause::{SqlCondition, Logic, build_where_clause};
///
/// let conditions = vec![
///     SqlCondition::new("name", "LIKE", "smith"),
///     SqlCondition::new("age", ">=", "30").logic(Logic::Or),
/// ];
/// assert_eq!(
///     build_where_clause(&conditions),
///     "name LIKE '%smith%' OR age >= '30'"
/// );
/// ```
pub fn build_where_clause(conditions: &[SqlCondition]) -> String {
    let valid: Vec<&SqlCondition> = conditions.iter().filter(|c| c.is_valid()).collect();

    let mut clause = String::new();
    for (index, condition) in valid.iter().enumerate() {
        if index > 0 {
            clause.push_str(&format!(" {} ", condition.logic));
        }
        clause.push_str(&render_condition(condition));
    }
    clause
}

/// Render a single condition body without any logic joiner
fn render_condition(condition: &SqlCondition) -> String {
    let SqlCondition {
        field,
        operator,
        value,
        ..
    } = condition;

    if is_null_check(operator) {
        format!("{} {}", field, operator)
    } else if operator == "LIKE" || operator == "NOT LIKE" {
        format!("{} {} '%{}%'", field, operator, value)
    } else if operator == "IN" || operator == "NOT IN" {
        let values = value
            .split(',')
            .map(|v| format!("'{}'", v.trim()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {} ({})", field, operator, values)
    } else {
        // Catalog comparisons (=, !=, >, <, >=, <=) and any unrecognized
        // operator both take this path.
        format!("{} {} '{}'", field, operator, value)
    }
}
