//! Core type definitions for filter conditions
//!
//! Includes the AND/OR combinator, the SQL and generic operator catalogs,
//! and the column descriptors used to populate field choices.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Logic Combinator
// ============================================================================

/// How a condition combines with the condition before it in the list.
///
/// The first condition in a list carries a logic value too, but it is never
/// consulted when the clause is generated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::And => write!(f, "AND"),
            Logic::Or => write!(f, "OR"),
        }
    }
}

// ============================================================================
// SQL Operator Catalog
// ============================================================================

/// A SQL operator choice with its human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDef {
    /// Operator text as rendered into the clause (e.g. `"NOT LIKE"`)
    pub value: &'static str,
    /// Display label for pickers
    pub label: &'static str,
}

/// The fixed operator set offered by the SQL condition editor.
///
/// Conditions keep their operator as a plain string, so values outside this
/// list still render (via the default binary-comparison path) rather than
/// being rejected.
pub const SQL_OPERATORS: &[OperatorDef] = &[
    OperatorDef { value: "LIKE", label: "LIKE (fuzzy match)" },
    OperatorDef { value: "NOT LIKE", label: "NOT LIKE (no match)" },
    OperatorDef { value: "=", label: "= (equals)" },
    OperatorDef { value: "!=", label: "!= (not equals)" },
    OperatorDef { value: ">", label: "> (greater than)" },
    OperatorDef { value: "<", label: "< (less than)" },
    OperatorDef { value: ">=", label: ">= (greater or equal)" },
    OperatorDef { value: "<=", label: "<= (less or equal)" },
    OperatorDef { value: "IN", label: "IN (within set)" },
    OperatorDef { value: "NOT IN", label: "NOT IN (outside set)" },
    OperatorDef { value: "IS NULL", label: "IS NULL (empty)" },
    OperatorDef { value: "IS NOT NULL", label: "IS NOT NULL (not empty)" },
];

/// The two operators that take no value operand
pub const NULL_CHECK_OPERATORS: &[&str] = &["IS NULL", "IS NOT NULL"];

/// Whether an operator is a null check (renders without a value)
pub fn is_null_check(operator: &str) -> bool {
    NULL_CHECK_OPERATORS.contains(&operator)
}

/// Look up the display label for a SQL operator
///
/// Falls back to the operator text itself when it is not in the catalog.
pub fn operator_label(operator: &str) -> &str {
    SQL_OPERATORS
        .iter()
        .find(|op| op.value == operator)
        .map_or(operator, |op| op.label)
}

// ============================================================================
// Generic Filter Operators
// ============================================================================

/// Operator set for the generic in-memory filter variant
///
/// Unlike SQL operators these form a closed set; comparisons are
/// case-sensitive and operate on the string form of the record field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    /// Display label for pickers
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "does not contain",
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "does not equal",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
        }
    }

    /// All operators in catalog order
    pub fn all() -> &'static [FilterOperator] {
        &[
            FilterOperator::Contains,
            FilterOperator::NotContains,
            FilterOperator::Equals,
            FilterOperator::NotEquals,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
        ]
    }
}

// ============================================================================
// Column Catalog
// ============================================================================

/// A filterable column: the data attribute name plus its display title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Data attribute name referenced by condition `field`s
    pub name: String,
    /// Display title shown in pickers
    pub title: String,
}

impl Column {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    /// Whether the column is usable as a filter target (name and title set)
    pub fn is_filterable(&self) -> bool {
        !self.name.is_empty() && !self.title.is_empty()
    }
}

/// Look up the display title for a column name
///
/// Falls back to the raw name when no column matches.
pub fn column_title<'a>(columns: &'a [Column], name: &'a str) -> &'a str {
    columns
        .iter()
        .find(|col| col.name == name)
        .map_or(name, |col| col.title.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Logic Tests
    // =========================================================================

    #[test]
    fn test_logic_display() {
        assert_eq!(Logic::And.to_string(), "AND");
        assert_eq!(Logic::Or.to_string(), "OR");
    }

    #[test]
    fn test_logic_default_is_and() {
        assert_eq!(Logic::default(), Logic::And);
    }

    #[test]
    fn test_logic_serialization() {
        assert_eq!(serde_json::to_string(&Logic::And).unwrap(), "\"AND\"");
        assert_eq!(serde_json::to_string(&Logic::Or).unwrap(), "\"OR\"");
    }

    #[test]
    fn test_logic_deserialization() {
        let logic: Logic = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(logic, Logic::Or);
    }

    // =========================================================================
    // SQL Operator Catalog Tests
    // =========================================================================

    #[test]
    fn test_sql_operator_catalog_size() {
        assert_eq!(SQL_OPERATORS.len(), 12);
    }

    #[test]
    fn test_sql_operator_catalog_contents() {
        let values: Vec<&str> = SQL_OPERATORS.iter().map(|op| op.value).collect();
        assert_eq!(
            values,
            vec![
                "LIKE",
                "NOT LIKE",
                "=",
                "!=",
                ">",
                "<",
                ">=",
                "<=",
                "IN",
                "NOT IN",
                "IS NULL",
                "IS NOT NULL",
            ]
        );
    }

    #[test]
    fn test_is_null_check() {
        assert!(is_null_check("IS NULL"));
        assert!(is_null_check("IS NOT NULL"));
        assert!(!is_null_check("LIKE"));
        assert!(!is_null_check("="));
        assert!(!is_null_check(""));
    }

    #[test]
    fn test_operator_label_known() {
        assert_eq!(operator_label("LIKE"), "LIKE (fuzzy match)");
        assert_eq!(operator_label("IS NOT NULL"), "IS NOT NULL (not empty)");
    }

    #[test]
    fn test_operator_label_unknown_falls_back() {
        assert_eq!(operator_label("REGEXP"), "REGEXP");
    }

    // =========================================================================
    // FilterOperator Tests
    // =========================================================================

    #[test]
    fn test_filter_operator_serialization() {
        assert_eq!(
            serde_json::to_string(&FilterOperator::NotContains).unwrap(),
            "\"not_contains\""
        );
        assert_eq!(
            serde_json::to_string(&FilterOperator::StartsWith).unwrap(),
            "\"starts_with\""
        );
    }

    #[test]
    fn test_filter_operator_deserialization() {
        let op: FilterOperator = serde_json::from_str("\"ends_with\"").unwrap();
        assert_eq!(op, FilterOperator::EndsWith);
    }

    #[test]
    fn test_filter_operator_all() {
        assert_eq!(FilterOperator::all().len(), 6);
        assert_eq!(FilterOperator::all()[0], FilterOperator::Contains);
    }

    #[test]
    fn test_filter_operator_labels() {
        assert_eq!(FilterOperator::Contains.label(), "contains");
        assert_eq!(FilterOperator::NotEquals.label(), "does not equal");
    }

    // =========================================================================
    // Column Tests
    // =========================================================================

    #[test]
    fn test_column_is_filterable() {
        assert!(Column::new("name", "Name").is_filterable());
        assert!(!Column::new("", "Name").is_filterable());
        assert!(!Column::new("name", "").is_filterable());
    }

    #[test]
    fn test_column_title_lookup() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("department", "Department"),
        ];
        assert_eq!(column_title(&columns, "department"), "Department");
    }

    #[test]
    fn test_column_title_fallback() {
        let columns = vec![Column::new("name", "Name")];
        assert_eq!(column_title(&columns, "salary"), "salary");
    }
}
