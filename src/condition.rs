//! Condition value types and the draft condition list
//!
//! A [`ConditionList`] holds the transient state a condition editor works on:
//! conditions are added with defaults, updated field by field, and read back
//! out as a generated WHERE clause. The list is plain owned state; callers
//! re-generate the clause after each mutation.

use crate::error::{FilterError, Result};
use crate::sql::clause::build_where_clause;
use crate::types::{FilterOperator, Logic, is_null_check};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// SQL Filter Condition
// ============================================================================

/// One field/operator/value rule contributing to a generated SQL clause.
///
/// The operator is kept as a plain string: values outside the catalog render
/// through the default binary-comparison path instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SqlCondition {
    /// Unique identifier, used only for list identity
    pub id: String,
    /// Data attribute name; empty means unset
    pub field: String,
    /// SQL operator text (e.g. `"LIKE"`, `"IS NULL"`)
    pub operator: String,
    /// Value payload; interpretation depends on the operator
    pub value: String,
    /// Combinator with the previous condition (ignored for the first)
    #[serde(default)]
    pub logic: Logic,
}

impl SqlCondition {
    /// Create a condition with a generated id and default `AND` logic
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
            logic: Logic::And,
        }
    }

    /// Set the combinator with the previous condition
    pub fn logic(mut self, logic: Logic) -> Self {
        self.logic = logic;
        self
    }

    /// Whether the condition contributes to the generated clause.
    ///
    /// Field and operator must be set; a value is required except for the
    /// null-check operators, which take no value operand.
    pub fn is_valid(&self) -> bool {
        !self.field.is_empty()
            && !self.operator.is_empty()
            && (!self.value.is_empty() || is_null_check(&self.operator))
    }
}

// ============================================================================
// Generic Filter Condition
// ============================================================================

/// One rule for the generic in-memory filter variant.
///
/// All conditions in a list combine with AND; there is no per-condition
/// logic choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCondition {
    /// Unique identifier, used only for list identity
    pub id: String,
    /// Data attribute name; empty means unset
    pub field: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Value to compare the record field against
    pub value: String,
}

impl FilterCondition {
    /// Create a condition with a generated id
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Whether the condition is fully filled in
    pub fn is_valid(&self) -> bool {
        !self.field.is_empty() && !self.value.is_empty()
    }
}

/// Extract the fully filled-in subset of a condition list, preserving order
pub fn valid_subset(conditions: &[FilterCondition]) -> Vec<FilterCondition> {
    conditions.iter().filter(|c| c.is_valid()).cloned().collect()
}

// ============================================================================
// Draft Condition List
// ============================================================================

/// Default operator assigned to freshly added conditions
const DEFAULT_OPERATOR: &str = "LIKE";

/// Ordered draft list of SQL conditions under edit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionList {
    conditions: Vec<SqlCondition>,
}

impl ConditionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// The conditions in edit order
    pub fn conditions(&self) -> &[SqlCondition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Append a fresh condition with editor defaults: empty field and value,
    /// `LIKE` operator, `AND` logic. Returns the generated id.
    pub fn add(&mut self) -> String {
        let condition = SqlCondition::new("", DEFAULT_OPERATOR, "");
        let id = condition.id.clone();
        self.conditions.push(condition);
        id
    }

    /// Append an already-built condition, keeping its id
    pub fn push(&mut self, condition: SqlCondition) {
        self.conditions.push(condition);
    }

    /// Remove the condition with the given id
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.conditions.len();
        self.conditions.retain(|c| c.id != id);
        if self.conditions.len() == before {
            return Err(FilterError::condition_not_found(id));
        }
        Ok(())
    }

    /// Set the field of a condition, clearing its value.
    ///
    /// A value entered for one field is meaningless for another, so changing
    /// the field always resets the value.
    pub fn set_field(&mut self, id: &str, field: impl Into<String>) -> Result<()> {
        let condition = self.get_mut(id)?;
        condition.field = field.into();
        condition.value.clear();
        Ok(())
    }

    /// Set the operator of a condition
    pub fn set_operator(&mut self, id: &str, operator: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.operator = operator.into();
        Ok(())
    }

    /// Set the value of a condition
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.value = value.into();
        Ok(())
    }

    /// Set the combinator of a condition with its predecessor
    pub fn set_logic(&mut self, id: &str, logic: Logic) -> Result<()> {
        self.get_mut(id)?.logic = logic;
        Ok(())
    }

    /// Discard all conditions
    pub fn clear(&mut self) {
        self.conditions.clear();
    }

    /// Generate the WHERE clause for the current draft
    pub fn where_clause(&self) -> String {
        build_where_clause(&self.conditions)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut SqlCondition> {
        self.conditions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| FilterError::condition_not_found(id))
    }
}

impl From<Vec<SqlCondition>> for ConditionList {
    fn from(conditions: Vec<SqlCondition>) -> Self {
        Self { conditions }
    }
}
