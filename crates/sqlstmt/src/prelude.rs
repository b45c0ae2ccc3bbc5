//! Convenient imports for typical `sqlstmt` usage.
//!
//! ```ignore
//! use sqlstmt::prelude::*;
//! ```

pub use crate::{CheckConfig, StmtError, StmtResult, Statement, Template};
