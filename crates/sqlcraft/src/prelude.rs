//! Convenient imports for typical `sqlcraft` usage.
//!
//! ```
//! use sqlcraft::prelude::*;
//! ```

pub use crate::{
    Builder, Combinator, Condition, Direction, ForceIndex, Join, JoinKind, OrderBy, PRIMARY_KEY_INDEX,
    QueryError, QueryResult, Statement, StatementType, ValueSet,
};
pub use crate::{MySqlQuoter, Quoter, Translator};

#[cfg(feature = "tracing")]
pub use crate::SqlLog;
