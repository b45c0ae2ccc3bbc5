//! Copy-on-chain SELECT statement builder.
//!
//! A [`Statement`] holds SQL fragments per clause and renders them in a fixed
//! order:
//!
//! ```text
//! SELECT <select> FROM <from> [WHERE <a> AND <b> ...] [ORDER BY ..] [LIMIT ..] [OFFSET ..]
//! ```
//!
//! Fragments are trusted literals. `?` placeholders inside them are passed
//! through untouched; binding values in the same order is the caller's job.
//!
//! Every chaining method takes `self` by value, so a statement you only hold
//! by reference (a `static` template, a `&Statement` argument) has to be
//! [`copy`](Statement::copy)-ed before it can be specialized.
//!
//! # Example
//!
//! ```
//! use sqlstmt::Statement;
//!
//! let base = Statement::select("count(*)").from("posts");
//! let by_tag = base
//!     .copy()
//!     .from("posts, posts_tags")
//!     .where_(["posts_tags.post_id = posts.id", "posts_tags.tag_id = ?", "posts.published"]);
//!
//! assert_eq!(base.sql(), "SELECT count(*) FROM posts");
//! assert_eq!(
//!     by_tag.sql(),
//!     "SELECT count(*) FROM posts, posts_tags WHERE posts_tags.post_id = posts.id \
//!      AND posts_tags.tag_id = ? AND posts.published"
//! );
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Clause, StmtError, StmtResult};


/// The leading part of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Head {
    /// `SELECT <columns>`
    Select(String),
    /// Rendered verbatim, e.g. `DELETE` or `SELECT DISTINCT tag_id`.
    Raw(String),
}

/// Conversion into one or more WHERE fragments.
///
/// Lets [`Statement::where_`] take a single fragment as well as a batch.
pub trait IntoFragments {
    fn into_fragments(self) -> Vec<String>;
}

impl IntoFragments for &str {
    fn into_fragments(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFragments for String {
    fn into_fragments(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFragments for &String {
    fn into_fragments(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: Into<String>, const N: usize> IntoFragments for [T; N] {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>> IntoFragments for Vec<T> {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String> + Clone> IntoFragments for &[T] {
    fn into_fragments(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// A SQL statement assembled from literal fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Statement {
    /// SELECT projection or raw starting fragment
    head: Option<Head>,
    /// FROM source, may be a comma-joined table list
    from: Option<String>,
    /// WHERE conditions, joined with AND in insertion order
    conditions: Vec<String>,
    /// ORDER BY
    order_by: Option<String>,
    /// LIMIT fragment or `?`
    limit: Option<String>,
    /// OFFSET fragment or `?`
    offset: Option<String>,
}

impl Statement {
    /// Create a statement with no clause set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a `SELECT <columns>` statement.
    ///
    /// An empty projection is accepted and rendered as-is; use
    /// [`try_select`](Self::try_select) when it should be rejected up front.
    pub fn select(columns: impl Into<String>) -> Self {
        Self {
            head: Some(Head::Select(columns.into())),
            ..Self::default()
        }
    }

    /// Start a `SELECT <columns>` statement, rejecting an empty projection.
    pub fn try_select(columns: impl Into<String>) -> StmtResult<Self> {
        let columns = columns.into();
        if columns.trim().is_empty() {
            return Err(StmtError::empty_fragment(Clause::Select));
        }
        Ok(Self::select(columns))
    }

    /// Start a statement from a raw leading fragment (`DELETE`, `SELECT DISTINCT x`, ...).
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self {
            head: Some(Head::Raw(fragment.into())),
            ..Self::default()
        }
    }

    /// Independent copy of this statement.
    ///
    /// Chaining on the copy never shows up in `self` and vice versa.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // ==================== Clauses ====================

    /// Replace the SELECT projection, keeping every other clause.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.head = Some(Head::Select(columns.into()));
        self
    }

    /// Set (or overwrite) FROM.
    pub fn from(mut self, source: impl Into<String>) -> Self {
        self.from = Some(source.into());
        self
    }

    /// Append one or more WHERE conditions.
    ///
    /// Repeated calls accumulate; all conditions are joined with `AND` in
    /// the order they were added.
    pub fn where_(mut self, fragments: impl IntoFragments) -> Self {
        self.conditions.extend(fragments.into_fragments());
        self
    }

    /// Append a WHERE condition only when `fragment` is `Some`.
    pub fn where_opt(self, fragment: Option<impl Into<String>>) -> Self {
        match fragment {
            Some(f) => self.where_(Into::<String>::into(f)),
            None => self,
        }
    }

    /// Set (or overwrite) ORDER BY.
    pub fn order_by(mut self, ordering: impl Into<String>) -> Self {
        self.order_by = Some(ordering.into());
        self
    }

    /// Set (or overwrite) LIMIT. Pass `"?"` to bind the value at execution.
    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Set (or overwrite) OFFSET. Pass `"?"` to bind the value at execution.
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// `LIMIT ? OFFSET ?`, with limit bound before offset.
    pub fn paginate_bound(self) -> Self {
        self.limit("?").offset("?")
    }

    /// Literal pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    /// The offset saturates at `i64::MAX` instead of overflowing.
    pub fn paginate(self, page: i64, per_page: i64) -> Self {
        let p = if page < 1 { 1 } else { page };
        let size = if per_page < 1 { 1 } else { per_page };
        self.limit(size.to_string())
            .offset((p - 1).saturating_mul(size).to_string())
    }

    pub fn clear_where(mut self) -> Self {
        self.conditions.clear();
        self
    }

    pub fn clear_order_by(mut self) -> Self {
        self.order_by = None;
        self
    }

    pub fn clear_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    pub fn clear_offset(mut self) -> Self {
        self.offset = None;
        self
    }

    // ==================== Accessors ====================

    pub fn head(&self) -> Option<&Head> {
        self.head.as_ref()
    }

    /// The SELECT projection, if this statement has a SELECT head.
    pub fn select_fragment(&self) -> Option<&str> {
        match &self.head {
            Some(Head::Select(cols)) => Some(cols),
            _ => None,
        }
    }

    /// The raw leading fragment, if this statement has a raw head.
    pub fn raw_fragment(&self) -> Option<&str> {
        match &self.head {
            Some(Head::Raw(raw)) => Some(raw),
            _ => None,
        }
    }

    pub fn from_fragment(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn order_by_fragment(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn limit_fragment(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    pub fn offset_fragment(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    // ==================== SQL build ====================

    fn build_sql_internal(&self, head: Option<(Clause, &str)>, with_tail: bool) -> String {
        let mut sql = String::new();

        if let Some((clause, fragment)) = head {
            push_clause(&mut sql, clause, fragment);
        }

        if let Some(from) = &self.from {
            push_clause(&mut sql, Clause::From, from);
        }

        if !self.conditions.is_empty() {
            push_clause(&mut sql, Clause::Where, &self.conditions.join(" AND "));
        }

        if with_tail {
            if let Some(order) = &self.order_by {
                push_clause(&mut sql, Clause::OrderBy, order);
            }
            if let Some(limit) = &self.limit {
                push_clause(&mut sql, Clause::Limit, limit);
            }
            if let Some(offset) = &self.offset {
                push_clause(&mut sql, Clause::Offset, offset);
            }
        }

        sql
    }

    /// Render the statement.
    ///
    /// Pure: repeated calls on an unchanged statement return the same string.
    pub fn sql(&self) -> String {
        let head = match &self.head {
            Some(Head::Select(cols)) => Some((Clause::Select, cols.as_str())),
            Some(Head::Raw(raw)) => Some((Clause::Raw, raw.as_str())),
            None => None,
        };
        self.build_sql_internal(head, true)
    }

    /// Render a `SELECT count(*)` over the same FROM/WHERE.
    ///
    /// ORDER BY, LIMIT and OFFSET are dropped. Placeholders in the WHERE
    /// fragments stay, so the count query binds the same leading values as
    /// the list query minus the pagination ones.
    ///
    /// A raw head is kept and counted as a subquery
    /// (`SELECT count(*) FROM (<raw> FROM .. WHERE ..) AS t`), so
    /// `SELECT DISTINCT ..` heads count distinct rows. Counting a non-SELECT
    /// raw head (`DELETE`, ...) renders invalid SQL, like any other
    /// composition error.
    pub fn count_sql(&self) -> String {
        match &self.head {
            Some(Head::Raw(raw)) => {
                let inner = self.build_sql_internal(Some((Clause::Raw, raw)), false);
                format!("SELECT count(*) FROM ({inner}) AS t")
            }
            _ => self.build_sql_internal(Some((Clause::Select, "count(*)")), false),
        }
    }
}

fn push_clause(sql: &mut String, clause: Clause, fragment: &str) {
    if !sql.is_empty() {
        sql.push(' ');
    }
    let keyword = clause.keyword();
    if !keyword.is_empty() {
        sql.push_str(keyword);
        sql.push(' ');
    }
    sql.push_str(fragment);
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}
