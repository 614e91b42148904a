//! Error types for filter editing operations

use thiserror::Error;

/// Errors that can occur while editing condition lists.
///
/// Clause generation itself never fails; invalid conditions are skipped and
/// unknown operators fall through to the default rendering path.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Condition not found: {0}")]
    ConditionNotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    pub fn condition_not_found(id: impl Into<String>) -> Self {
        Self::ConditionNotFound(id.into())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
