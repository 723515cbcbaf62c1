//! Condition primitives for WHERE and JOIN ... ON clauses.
//!
//! A [`Condition`] is either a value comparison over one column, or a nested
//! group produced by a builder closure. Each condition carries the
//! [`Combinator`] that joins it to the condition before it.

use crate::error::QueryError;
use crate::statement::Statement;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Keyword joining a condition to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = QueryError;

    /// Parse `and`/`or` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "AND" => Ok(Combinator::And),
            "OR" => Ok(Combinator::Or),
            _ => Err(QueryError::InvalidCombinator(upper)),
        }
    }
}

/// Closure that fills an empty sub-statement with where-conditions.
pub type ConditionBuilder = Arc<dyn Fn(&mut Statement) + Send + Sync>;

/// Right-hand side of a value condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// No value token, for comparators like `IS NULL`.
    None,
    /// A single scalar.
    Scalar(Value),
    /// A parenthesized list, for comparators like `IN`.
    List(Vec<Value>),
    /// Another column, qualified against the condition's owner table.
    Key(String),
}

impl From<Value> for ConditionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConditionValue::None,
            Value::Array(items) => ConditionValue::List(items),
            other => ConditionValue::Scalar(other),
        }
    }
}

/// `column <comparator> value`
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCondition {
    owner_table: String,
    key: String,
    comparator: String,
    value: ConditionValue,
    combinator: Combinator,
}

impl ValueCondition {
    /// Table (or alias) a key-reference value is qualified against.
    pub fn owner_table(&self) -> &str {
        &self.owner_table
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn is_value_key(&self) -> bool {
        matches!(self.value, ConditionValue::Key(_))
    }
}

/// A nested group of conditions built on demand.
#[derive(Clone)]
pub struct CallableCondition {
    combinator: Combinator,
    builder: ConditionBuilder,
}

impl CallableCondition {
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Run the builder against `statement`.
    pub fn apply(&self, statement: &mut Statement) {
        (self.builder)(statement)
    }
}

impl fmt::Debug for CallableCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableCondition")
            .field("combinator", &self.combinator)
            .field("builder", &"<fn>")
            .finish()
    }
}

/// A condition in a WHERE or ON list.
#[derive(Debug, Clone)]
pub enum Condition {
    Value(ValueCondition),
    Callable(CallableCondition),
}

impl Condition {
    /// Create a value condition.
    ///
    /// JSON arrays become lists and `null` becomes "no value".
    pub fn value(
        owner_table: impl Into<String>,
        key: impl Into<String>,
        comparator: impl Into<String>,
        value: impl Into<Value>,
        combinator: Combinator,
    ) -> Self {
        Condition::Value(ValueCondition {
            owner_table: owner_table.into(),
            key: key.into(),
            comparator: comparator.into(),
            value: ConditionValue::from(value.into()),
            combinator,
        })
    }

    /// Create a condition without a value token (`IS NULL`, `IS NOT NULL`).
    pub fn unary(
        owner_table: impl Into<String>,
        key: impl Into<String>,
        comparator: impl Into<String>,
        combinator: Combinator,
    ) -> Self {
        Condition::Value(ValueCondition {
            owner_table: owner_table.into(),
            key: key.into(),
            comparator: comparator.into(),
            value: ConditionValue::None,
            combinator,
        })
    }

    /// Create a condition comparing `key` with another column `other_key` of `owner_table`.
    pub fn key(
        owner_table: impl Into<String>,
        key: impl Into<String>,
        comparator: impl Into<String>,
        other_key: impl Into<String>,
        combinator: Combinator,
    ) -> Self {
        Condition::Value(ValueCondition {
            owner_table: owner_table.into(),
            key: key.into(),
            comparator: comparator.into(),
            value: ConditionValue::Key(other_key.into()),
            combinator,
        })
    }

    /// Create a nested group.
    ///
    /// `builder` receives an empty clone of the owning statement and adds
    /// where-conditions to it; they render as a parenthesized clause.
    pub fn callable<F>(combinator: Combinator, builder: F) -> Self
    where
        F: Fn(&mut Statement) + Send + Sync + 'static,
    {
        Condition::Callable(CallableCondition {
            combinator,
            builder: Arc::new(builder),
        })
    }

    pub fn combinator(&self) -> Combinator {
        match self {
            Condition::Value(c) => c.combinator,
            Condition::Callable(c) => c.combinator,
        }
    }

    /// Replace the combinator.
    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        match &mut self {
            Condition::Value(c) => c.combinator = combinator,
            Condition::Callable(c) => c.combinator = combinator,
        }
        self
    }

    pub fn is_value_key(&self) -> bool {
        match self {
            Condition::Value(c) => c.is_value_key(),
            Condition::Callable(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn combinator_parses_any_case() {
        assert_eq!("and".parse::<Combinator>().unwrap(), Combinator::And);
        assert_eq!("Or".parse::<Combinator>().unwrap(), Combinator::Or);
    }

    #[test]
    fn combinator_rejects_others() {
        let err = "invalid_type".parse::<Combinator>().unwrap_err();
        assert_eq!(err, QueryError::InvalidCombinator("INVALID_TYPE".into()));
        assert_eq!(err.to_string(), "Invalid where type provided: INVALID_TYPE");
    }

    #[test]
    fn value_shapes() {
        let Condition::Value(c) = Condition::value("t", "id", "IN", json!([1, 2]), Combinator::And)
        else {
            panic!("expected value condition");
        };
        assert_eq!(c.value(), &ConditionValue::List(vec![json!(1), json!(2)]));

        let Condition::Value(c) = Condition::value("t", "id", "=", Value::Null, Combinator::Or)
        else {
            panic!("expected value condition");
        };
        assert_eq!(c.value(), &ConditionValue::None);
        assert_eq!(c.combinator(), Combinator::Or);
    }

    #[test]
    fn key_condition_flags_value_as_key() {
        let cond = Condition::key("jt", "id", "=", "table_id", Combinator::And);
        assert!(cond.is_value_key());

        let cond = Condition::value("jt", "id", "=", "table_id", Combinator::And);
        assert!(!cond.is_value_key());
    }

    #[test]
    fn callable_runs_against_given_statement() {
        let cond = Condition::callable(Combinator::Or, |q| {
            q.and_where("username", "=", "amy");
        });
        assert_eq!(cond.combinator(), Combinator::Or);
        assert!(!cond.is_value_key());

        let Condition::Callable(callable) = cond else {
            panic!("expected callable condition");
        };
        let mut sub = Statement::select("users");
        callable.apply(&mut sub);
        assert_eq!(sub.where_conditions().len(), 1);
    }

    #[test]
    fn with_combinator_replaces() {
        let cond = Condition::unary("t", "deleted_at", "IS NULL", Combinator::And)
            .with_combinator(Combinator::Or);
        assert_eq!(cond.combinator(), Combinator::Or);
    }
}
