//! Opt-in structural checks for statements.
//!
//! Rendering never validates anything. Call [`Statement::validate`] (or
//! [`Statement::check`] with a custom [`CheckConfig`]) in tests or at startup
//! to catch templates that are missing a clause or carry an empty fragment.
//!
//! Only presence and emptiness are checked. Fragment text is never parsed and
//! placeholders are never counted.

use crate::error::{Clause, StmtError, StmtResult};
use crate::statement::{Head, Statement};

/// Which structural rules [`Statement::check`] enforces.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Require a SELECT or raw head.
    pub require_head: bool,
    /// Require FROM. Not applied to statements with a raw head.
    pub require_from: bool,
    /// Reject fragments that are empty or whitespace-only.
    pub reject_empty_fragments: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            require_head: true,
            require_from: true,
            reject_empty_fragments: true,
        }
    }
}

impl CheckConfig {
    /// Create a config with defaults (every rule on).
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with every rule off; `check` always succeeds.
    pub fn permissive() -> Self {
        Self {
            require_head: false,
            require_from: false,
            reject_empty_fragments: false,
        }
    }

    pub fn with_require_head(mut self, on: bool) -> Self {
        self.require_head = on;
        self
    }

    /// Statements such as `SELECT 1` or `SELECT now()` have no FROM.
    pub fn with_require_from(mut self, on: bool) -> Self {
        self.require_from = on;
        self
    }

    pub fn with_reject_empty_fragments(mut self, on: bool) -> Self {
        self.reject_empty_fragments = on;
        self
    }
}

fn is_blank(fragment: &str) -> bool {
    fragment.trim().is_empty()
}

impl Statement {
    /// Check this statement with the default [`CheckConfig`].
    pub fn validate(&self) -> StmtResult<()> {
        self.check(&CheckConfig::default())
    }

    /// Check this statement against `config`, returning the first issue found.
    pub fn check(&self, config: &CheckConfig) -> StmtResult<()> {
        let result = self.check_internal(config);
        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::warn!(target: "sqlstmt.check", error = %err, sql = %self.sql(), "statement check failed");
            }
        }
        result
    }

    fn check_internal(&self, config: &CheckConfig) -> StmtResult<()> {
        match self.head() {
            None if config.require_head => return Err(StmtError::MissingClause(Clause::Select)),
            Some(Head::Select(cols)) if config.reject_empty_fragments && is_blank(cols) => {
                return Err(StmtError::empty_fragment(Clause::Select));
            }
            Some(Head::Raw(raw)) if config.reject_empty_fragments && is_blank(raw) => {
                return Err(StmtError::empty_fragment(Clause::Raw));
            }
            _ => {}
        }

        let raw_head = matches!(self.head(), Some(Head::Raw(_)));
        match self.from_fragment() {
            None if config.require_from && !raw_head => {
                return Err(StmtError::MissingClause(Clause::From));
            }
            Some(from) if config.reject_empty_fragments && is_blank(from) => {
                return Err(StmtError::empty_fragment(Clause::From));
            }
            _ => {}
        }

        if !config.reject_empty_fragments {
            return Ok(());
        }

        if self.conditions().iter().any(|c| is_blank(c)) {
            return Err(StmtError::empty_fragment(Clause::Where));
        }

        let optional = [
            (Clause::OrderBy, self.order_by_fragment()),
            (Clause::Limit, self.limit_fragment()),
            (Clause::Offset, self.offset_fragment()),
        ];
        for (clause, fragment) in optional {
            if fragment.is_some_and(is_blank) {
                return Err(StmtError::empty_fragment(clause));
            }
        }

        Ok(())
    }
}
