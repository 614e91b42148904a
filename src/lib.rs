//! # filter-clause
//!
//! Condition-based SQL WHERE clause generation and in-memory record
//! filtering.
//!
//! This crate turns ordered lists of user-entered filter conditions into
//! flat SQL boolean expressions, and offers a simpler non-SQL variant that
//! evaluates conditions directly against in-memory JSON records. It is a
//! formatter, not a query engine: nothing is parsed, executed, or escaped.
//!
//! ## Features
//!
//! - **WHERE Clause Generation**: field/operator/value conditions joined by
//!   per-condition AND/OR, rendered in edit order with no grouping
//! - **Permissive By Design**: partially filled conditions are skipped and
//!   unknown operators fall back to plain comparison rendering; generation
//!   never fails
//! - **Draft Editing**: a `ConditionList` holds the add/update/remove state
//!   a condition editor works on, regenerating the clause on demand
//! - **In-Memory Filtering**: a closed six-operator variant with AND
//!   semantics for filtering JSON record collections without a database
//! - **Operator and Column Catalogs**: the fixed operator sets with display
//!   labels, plus column descriptors for building field choices
//!
//! ## Quick Start
//!
//! ```rust
//! use filter_clause::{ConditionList, Logic};
//!
//! let mut draft = ConditionList::new();
//!
//! let first = draft.add();
//! draft.set_field(&first, "name")?;
//! draft.set_value(&first, "smith")?;
//!
//! let second = draft.add();
//! draft.set_field(&second, "department")?;
//! draft.set_operator(&second, "IN")?;
//! draft.set_value(&second, "sales, support")?;
//! draft.set_logic(&second, Logic::Or)?;
//!
//! assert_eq!(
//!     draft.where_clause(),
//!     "name LIKE '%smith%' OR department IN ('sales', 'support')"
//! );
//! # Ok::<(), filter_clause::FilterError>(())
//! ```
//!
//! ## In-Memory Filtering
//!
//! ```rust
//! use filter_clause::{FilterCondition, FilterOperator, apply_filters};
//!
//! let records = vec![
//!     serde_json::json!({"name": "Alice", "department": "Engineering"}),
//!     serde_json::json!({"name": "Bob", "department": "Product"}),
//! ];
//!
//! let conditions = vec![
//!     FilterCondition::new("department", FilterOperator::Equals, "Engineering"),
//! ];
//!
//! let filtered = apply_filters(&records, &conditions);
//! assert_eq!(filtered.len(), 1);
//! ```

pub mod condition;
pub mod error;
pub mod matcher;
pub mod sql;
pub mod types;

// Re-export main types for convenience
pub use condition::{ConditionList, FilterCondition, SqlCondition, valid_subset};
pub use error::{FilterError, Result};
pub use matcher::{apply_filters, matches_record};
pub use sql::clause::build_where_clause;
pub use types::{
    Column, FilterOperator, Logic, NULL_CHECK_OPERATORS, OperatorDef, SQL_OPERATORS, column_title,
    is_null_check, operator_label,
};
