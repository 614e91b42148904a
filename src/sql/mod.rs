//! SQL generation utilities
//!
//! Provides WHERE clause generation from filter conditions.

pub mod clause;

pub use clause::build_where_clause;
