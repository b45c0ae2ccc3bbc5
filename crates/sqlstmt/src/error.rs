//! Error types for sqlstmt

use std::fmt;
use thiserror::Error;

/// Result type alias for sqlstmt operations
pub type StmtResult<T> = Result<T, StmtError>;

/// A clause of a [`Statement`](crate::Statement), used to point at the part
/// of a statement an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    Raw,
    From,
    Where,
    OrderBy,
    Limit,
    Offset,
}

impl Clause {
    /// SQL keyword that introduces the clause (empty for a raw head).
    pub fn keyword(self) -> &'static str {
        match self {
            Clause::Select => "SELECT",
            Clause::Raw => "",
            Clause::From => "FROM",
            Clause::Where => "WHERE",
            Clause::OrderBy => "ORDER BY",
            Clause::Limit => "LIMIT",
            Clause::Offset => "OFFSET",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Raw => f.write_str("raw head"),
            other => f.write_str(other.keyword()),
        }
    }
}

/// Errors reported by the opt-in strict APIs (`try_select`, `check`).
///
/// Chaining and rendering never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StmtError {
    /// A fragment was empty or whitespace-only
    #[error("Empty fragment in {clause} clause")]
    EmptyFragment { clause: Clause },

    /// A clause required by the active check config is not set
    #[error("Missing {0} clause")]
    MissingClause(Clause),

    /// Other validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StmtError {
    /// Create an empty fragment error for a specific clause
    pub fn empty_fragment(clause: Clause) -> Self {
        Self::EmptyFragment { clause }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an empty fragment error
    pub fn is_empty_fragment(&self) -> bool {
        matches!(self, Self::EmptyFragment { .. })
    }

    /// Check if this is a missing clause error
    pub fn is_missing_clause(&self) -> bool {
        matches!(self, Self::MissingClause(_))
    }

    /// The clause this error refers to, if any.
    pub fn clause(&self) -> Option<Clause> {
        match self {
            Self::EmptyFragment { clause } => Some(*clause),
            Self::MissingClause(clause) => Some(*clause),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_clause() {
        assert_eq!(
            StmtError::empty_fragment(Clause::OrderBy).to_string(),
            "Empty fragment in ORDER BY clause"
        );
        assert_eq!(
            StmtError::MissingClause(Clause::From).to_string(),
            "Missing FROM clause"
        );
        assert_eq!(
            StmtError::MissingClause(Clause::Raw).to_string(),
            "Missing raw head clause"
        );
    }

    #[test]
    fn predicates() {
        let err = StmtError::empty_fragment(Clause::Where);
        assert!(err.is_empty_fragment());
        assert!(!err.is_missing_clause());
        assert_eq!(err.clause(), Some(Clause::Where));
        assert_eq!(StmtError::validation("x").clause(), None);
    }
}
