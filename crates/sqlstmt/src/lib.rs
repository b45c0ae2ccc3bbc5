//! # sqlstmt
//!
//! A small, copy-on-chain SQL statement builder for composing parameterized
//! queries from shared templates.
//!
//! ## Features
//!
//! - **Fragment based**: clauses are trusted SQL literals, `?` placeholders pass through untouched
//! - **Fixed clause order**: `SELECT .. FROM .. WHERE .. ORDER BY .. LIMIT .. OFFSET ..`
//! - **Value semantics**: chaining consumes the statement, `copy()` branches it
//! - **Templates**: process-wide base selectors that only hand out detached copies
//! - **Opt-in checks**: structural validation via `check()` / `validate()`
//!
//! ## Example
//!
//! ```
//! use sqlstmt::Statement;
//!
//! let comments = Statement::select("id, post_id, author").from("comments");
//!
//! let page = comments
//!     .copy()
//!     .where_("approved = 1")
//!     .order_by("created_at DESC")
//!     .paginate_bound();
//!
//! assert_eq!(
//!     page.sql(),
//!     "SELECT id, post_id, author FROM comments WHERE approved = 1 \
//!      ORDER BY created_at DESC LIMIT ? OFFSET ?"
//! );
//! assert_eq!(comments.sql(), "SELECT id, post_id, author FROM comments");
//! ```

pub mod check;
pub mod error;
pub mod prelude;
pub mod statement;
pub mod template;

pub use check::CheckConfig;
pub use error::{Clause, StmtError, StmtResult};
pub use statement::{Head, IntoFragments, Statement};
pub use template::Template;
