//! JOIN specifications.

use crate::condition::{Combinator, Condition};
use crate::error::QueryError;
use crate::statement::Statement;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Supported join kinds. INNER joins always render before LEFT joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    /// Kinds in render order.
    pub const ALL: [JoinKind; 2] = [JoinKind::Inner, JoinKind::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INNER" => Ok(JoinKind::Inner),
            "LEFT" => Ok(JoinKind::Left),
            _ => Err(QueryError::InvalidJoinKind(s.to_string())),
        }
    }
}

/// A joined table and its ON conditions.
///
/// Conditions added through the helpers are owned by the join's alias (or
/// table name): a key-reference value such as `on_key("id", "=", "user_id")`
/// renders as `` `statement`.`id` = `join`.`user_id` ``.
///
/// # Example
/// ```
/// use sqlcraft::{Builder, Join, Statement};
///
/// let mut query = Statement::select_as("users", "u");
/// query.left_join(Join::with_alias("profile", "p").on_key("id", "=", "user_id"));
///
/// assert_eq!(
///     Builder::mysql().build(&query)?,
///     "SELECT * FROM `users` `u` LEFT JOIN `profile` `p` ON (`u`.`id` = `p`.`user_id`)"
/// );
/// # Ok::<(), sqlcraft::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Join {
    table: String,
    alias: Option<String>,
    on_conditions: Vec<Condition>,
}

impl Join {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            on_conditions: Vec::new(),
        }
    }

    pub fn with_alias(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: Some(alias.into()),
            on_conditions: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn alias_or_table(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    pub fn on_conditions(&self) -> &[Condition] {
        &self.on_conditions
    }

    fn push_value(mut self, key: &str, comparator: &str, value: Value, combinator: Combinator) -> Self {
        let owner = self.alias_or_table().to_string();
        self.on_conditions
            .push(Condition::value(owner, key, comparator, value, combinator));
        self
    }

    fn push_key(mut self, key: &str, comparator: &str, other: &str, combinator: Combinator) -> Self {
        let owner = self.alias_or_table().to_string();
        self.on_conditions
            .push(Condition::key(owner, key, comparator, other, combinator));
        self
    }

    fn push_unary(mut self, key: &str, comparator: &str, combinator: Combinator) -> Self {
        let owner = self.alias_or_table().to_string();
        self.on_conditions
            .push(Condition::unary(owner, key, comparator, combinator));
        self
    }

    /// ON key comparator value
    pub fn on(self, key: &str, comparator: &str, value: impl Into<Value>) -> Self {
        self.push_value(key, comparator, value.into(), Combinator::And)
    }

    /// OR key comparator value
    pub fn or_on(self, key: &str, comparator: &str, value: impl Into<Value>) -> Self {
        self.push_value(key, comparator, value.into(), Combinator::Or)
    }

    /// ON key IS NULL
    pub fn on_null(self, key: &str) -> Self {
        self.push_unary(key, "IS NULL", Combinator::And)
    }

    /// ON key IS NOT NULL
    pub fn on_not_null(self, key: &str) -> Self {
        self.push_unary(key, "IS NOT NULL", Combinator::And)
    }

    /// ON key comparator `join`.`other_key`
    pub fn on_key(self, key: &str, comparator: &str, other_key: &str) -> Self {
        self.push_key(key, comparator, other_key, Combinator::And)
    }

    /// OR key comparator `join`.`other_key`
    pub fn or_on_key(self, key: &str, comparator: &str, other_key: &str) -> Self {
        self.push_key(key, comparator, other_key, Combinator::Or)
    }

    /// ON (nested group)
    pub fn on_group<F>(mut self, builder: F) -> Self
    where
        F: Fn(&mut Statement) + Send + Sync + 'static,
    {
        self.on_conditions
            .push(Condition::callable(Combinator::And, builder));
        self
    }

    /// OR (nested group)
    pub fn or_on_group<F>(mut self, builder: F) -> Self
    where
        F: Fn(&mut Statement) + Send + Sync + 'static,
    {
        self.on_conditions
            .push(Condition::callable(Combinator::Or, builder));
        self
    }

    /// Append a prebuilt condition.
    pub fn on_condition(mut self, condition: Condition) -> Self {
        self.on_conditions.push(condition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionValue;

    #[test]
    fn alias_or_table() {
        assert_eq!(Join::new("table").alias_or_table(), "table");
        let join = Join::with_alias("table", "t");
        assert_eq!(join.table(), "table");
        assert_eq!(join.alias(), Some("t"));
        assert_eq!(join.alias_or_table(), "t");
    }

    #[test]
    fn on_value_condition() {
        let join = Join::with_alias("table", "t").on("username", "=", "amy");
        assert_eq!(join.on_conditions().len(), 1);

        let Condition::Value(c) = &join.on_conditions()[0] else {
            panic!("expected value condition");
        };
        assert_eq!(c.combinator(), Combinator::And);
        assert_eq!(c.owner_table(), "t");
        assert_eq!(c.key(), "username");
        assert_eq!(c.comparator(), "=");
        assert_eq!(c.value(), &ConditionValue::Scalar(Value::from("amy")));
        assert!(!c.is_value_key());
    }

    #[test]
    fn or_on_key_condition() {
        let join = Join::with_alias("table", "t").or_on_key("username", "=", "t.username");
        let cond = &join.on_conditions()[0];
        assert_eq!(cond.combinator(), Combinator::Or);
        assert!(cond.is_value_key());
    }

    #[test]
    fn group_conditions() {
        let join = Join::new("table")
            .on_group(|q| {
                q.and_where("a", "=", 1);
            })
            .or_on_group(|q| {
                q.and_where("b", "=", 2);
            });
        let kinds: Vec<_> = join.on_conditions().iter().map(Condition::combinator).collect();
        assert_eq!(kinds, [Combinator::And, Combinator::Or]);
        assert!(matches!(join.on_conditions()[0], Condition::Callable(_)));
    }

    #[test]
    fn join_kind_parses() {
        assert_eq!("left".parse::<JoinKind>().unwrap(), JoinKind::Left);
        assert!("outer".parse::<JoinKind>().is_err());
    }
}
