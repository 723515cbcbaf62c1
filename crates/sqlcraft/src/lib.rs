//! # sqlcraft
//!
//! Compile an in-memory statement model into MySQL-flavoured SQL text.
//!
//! ## Features
//!
//! - **Plain data model**: a [`Statement`] collects columns, conditions, joins,
//!   grouping, ordering, limits and value sets through append-only builders
//! - **Nested conditions**: callable groups render as parenthesized clauses,
//!   bounded at [`MAX_CONDITION_DEPTH`] levels
//! - **Pluggable quoting**: literals go through a [`Quoter`], usually a
//!   driver's escaping routine; [`MySqlQuoter`] is bundled
//! - **Extensible dispatch**: [`Builder`] picks the first [`Translator`] that
//!   accepts a statement; custom translators are appended after the defaults
//! - **Tracing**: optional `tracing` events for dispatch and rendered SQL
//!
//! ## Example
//!
//! ```
//! use sqlcraft::prelude::*;
//!
//! let mut query = Statement::select_as("users", "u");
//! query
//!     .set_columns(["id", "lastname", "p.website"])
//!     .set_force_index(PRIMARY_KEY_INDEX)
//!     .left_join(
//!         Join::with_alias("profile", "p")
//!             .on_key("id", "=", "user_id")
//!             .on_null("updated_at"),
//!     )
//!     .and_where("lastname", "=", "McTest")
//!     .and_where_group(|q| {
//!         q.and_where("firstname", "=", "John")
//!             .or_where("firstname", "=", "Amy");
//!     })
//!     .order_by(OrderBy::desc(["id"])?)
//!     .set_limit(50, Some(10));
//!
//! assert_eq!(
//!     Builder::mysql().build(&query)?,
//!     "SELECT `u`.`id`, `u`.`lastname`, `p`.`website` FROM `users` `u` FORCE INDEX (PRIMARY) \
//!      LEFT JOIN `profile` `p` ON (`u`.`id` = `p`.`user_id` AND `u`.`updated_at` IS NULL) \
//!      WHERE `u`.`lastname` = 'McTest' AND (`u`.`firstname` = 'John' OR `u`.`firstname` = 'Amy') \
//!      ORDER BY `u`.`id` DESC LIMIT 50,10"
//! );
//! # Ok::<(), sqlcraft::QueryError>(())
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod ident;
pub mod join;
pub mod order;
pub mod prelude;
pub mod quote;
pub mod statement;
pub mod text;
pub mod translate;
pub mod value_set;

#[cfg(feature = "tracing")]
pub mod log;

pub use builder::Builder;
pub use condition::{CallableCondition, Combinator, Condition, ConditionValue, ValueCondition};
pub use error::{QueryError, QueryResult};
pub use join::{Join, JoinKind};
pub use order::{Direction, OrderBy};
pub use quote::{MySqlQuoter, Quoter};
pub use statement::{ForceIndex, PRIMARY_KEY_INDEX, Statement, StatementType};
pub use text::TextJoiner;
pub use translate::{Clauses, MAX_CONDITION_DEPTH, Translator};
pub use value_set::ValueSet;

#[cfg(feature = "tracing")]
pub use log::SqlLog;

pub use serde_json::Value;
