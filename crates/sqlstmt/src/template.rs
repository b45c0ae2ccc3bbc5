//! Process-wide read-only template statements.
//!
//! A [`Template`] wraps a finished [`Statement`] and hands out only detached
//! copies, so a shared base selector can't be specialized in place.
//!
//! # Example
//!
//! ```
//! use std::sync::LazyLock;
//! use sqlstmt::{Statement, Template};
//!
//! static COMMENTS: LazyLock<Template> = LazyLock::new(|| {
//!     Template::new("comments", Statement::select("id, post_id, author").from("comments"))
//! });
//!
//! let approved = COMMENTS.copy().where_("approved = 1");
//! assert_eq!(approved.sql(), "SELECT id, post_id, author FROM comments WHERE approved = 1");
//! assert_eq!(COMMENTS.sql(), "SELECT id, post_id, author FROM comments");
//! ```

use crate::statement::Statement;

/// A named statement that can only be read or copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    stmt: Statement,
}

impl Template {
    /// Freeze `stmt` as a template.
    pub fn new(name: impl Into<String>, stmt: Statement) -> Self {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlstmt.template", name = %name, sql = %stmt.sql(), "template registered");
        Self { name, stmt }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A detached statement to specialize.
    pub fn copy(&self) -> Statement {
        self.stmt.copy()
    }

    pub fn as_statement(&self) -> &Statement {
        &self.stmt
    }

    pub fn sql(&self) -> String {
        self.stmt.sql()
    }

    pub fn count_sql(&self) -> String {
        self.stmt.count_sql()
    }
}

impl From<Template> for Statement {
    fn from(template: Template) -> Self {
        template.stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static MESSAGES: LazyLock<Template> = LazyLock::new(|| {
        Template::new(
            "messages",
            Statement::select("id, type, data, is_read, created_at").from("messages"),
        )
    });

    #[test]
    fn copies_are_detached() {
        let unread = MESSAGES.copy().where_("is_read = 0");
        let read = MESSAGES.copy().where_("is_read = 1");
        assert_eq!(
            unread.sql(),
            "SELECT id, type, data, is_read, created_at FROM messages WHERE is_read = 0"
        );
        assert_eq!(
            read.sql(),
            "SELECT id, type, data, is_read, created_at FROM messages WHERE is_read = 1"
        );
        assert_eq!(
            MESSAGES.sql(),
            "SELECT id, type, data, is_read, created_at FROM messages"
        );
    }

    #[test]
    fn name_and_statement() {
        assert_eq!(MESSAGES.name(), "messages");
        assert_eq!(MESSAGES.as_statement().from_fragment(), Some("messages"));
        assert_eq!(MESSAGES.count_sql(), "SELECT count(*) FROM messages");
    }

    #[test]
    fn into_statement() {
        let t = Template::new("t", Statement::select("x").from("t"));
        let s: Statement = t.clone().into();
        assert_eq!(s.sql(), t.sql());
    }

    #[test]
    fn template_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Template>();
        assert_send_sync::<Statement>();
    }
}
