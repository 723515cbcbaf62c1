//! Clause rendering shared by every translator.

use crate::condition::{Condition, ConditionValue, ValueCondition};
use crate::error::{QueryError, QueryResult};
use crate::ident::{quote_column_expression, quote_identifier, quote_qualified};
use crate::join::JoinKind;
use crate::order::Direction;
use crate::quote::Quoter;
use crate::statement::{ForceIndex, Statement, StatementType};
use crate::text::TextJoiner;
use crate::value_set::ValueSet;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Nesting depth at which callable conditions are rejected.
pub const MAX_CONDITION_DEPTH: usize = 5;

/// Quoting and clause builders, held by each translator.
///
/// Every builder returns an empty string when the statement has nothing to
/// emit for that clause, so results can be added to a [`TextJoiner`] blindly.
#[derive(Clone)]
pub struct Clauses {
    quoter: Arc<dyn Quoter>,
}

impl fmt::Debug for Clauses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clauses").finish_non_exhaustive()
    }
}

impl Clauses {
    pub fn new(quoter: Arc<dyn Quoter>) -> Self {
        Self { quoter }
    }

    // ==================== Quoting ====================

    /// Quote a value as a literal. Non-strings are stringified first.
    pub fn quote_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => self.quoter.quote(s),
            Value::Bool(b) => self.quoter.quote(if *b { "1" } else { "0" }),
            Value::Null => self.quoter.quote(""),
            other => self.quoter.quote(&other.to_string()),
        }
    }

    /// `` `table` ``, failing on an empty table name.
    pub fn table(&self, statement: &Statement) -> QueryResult<String> {
        non_empty_table(statement.table())
    }

    /// `` `table` `alias` `` when the statement has an alias.
    pub fn table_with_alias(&self, statement: &Statement) -> QueryResult<String> {
        let table = self.table(statement)?;
        Ok(match statement.alias() {
            Some(alias) => format!("{} {}", table, quote_identifier(alias)),
            None => table,
        })
    }

    /// Quote each column expression against the statement's alias or table.
    pub fn column_list(&self, statement: &Statement, exprs: &[String]) -> QueryResult<Vec<String>> {
        exprs
            .iter()
            .map(|expr| quote_column_expression(statement.alias_or_table(), expr))
            .collect()
    }

    // ==================== Conditions ====================

    /// Render a condition list.
    ///
    /// The first emitted condition carries no combinator. Callable conditions
    /// are expanded against a clean clone of `statement` one level deeper;
    /// groups that produce nothing are dropped.
    pub fn conditions(
        &self,
        statement: &Statement,
        conditions: &[Condition],
        depth: usize,
    ) -> QueryResult<String> {
        if depth >= MAX_CONDITION_DEPTH {
            return Err(QueryError::RecursionLimitExceeded {
                limit: MAX_CONDITION_DEPTH,
            });
        }

        let mut parts = TextJoiner::new();
        for condition in conditions {
            let part = match condition {
                Condition::Value(c) => self.value_condition(statement, c),
                Condition::Callable(c) => {
                    let mut sub = statement.clean_clone();
                    c.apply(&mut sub);
                    let inner = self.conditions(&sub, sub.where_conditions(), depth + 1)?;
                    if inner.is_empty() {
                        continue;
                    }
                    format!("({inner})")
                }
            };

            if parts.is_empty() {
                parts.add(part);
            } else {
                parts.add(format!("{} {}", condition.combinator(), part));
            }
        }
        Ok(parts.to_string())
    }

    fn value_condition(&self, statement: &Statement, condition: &ValueCondition) -> String {
        let value = match condition.value() {
            ConditionValue::None => String::new(),
            ConditionValue::Key(other) => quote_qualified(condition.owner_table(), other),
            ConditionValue::List(items) => {
                let quoted: Vec<String> = items.iter().map(|v| self.quote_value(v)).collect();
                format!("({})", quoted.join(","))
            }
            ConditionValue::Scalar(Value::Number(n)) => n.to_string(),
            ConditionValue::Scalar(Value::Bool(b)) => String::from(if *b { "1" } else { "0" }),
            ConditionValue::Scalar(Value::Null) => String::new(),
            ConditionValue::Scalar(other) => self.quote_value(other),
        };

        TextJoiner::from_parts(
            [
                quote_qualified(statement.alias_or_table(), condition.key()),
                condition.comparator().to_string(),
                value,
            ],
            " ",
        )
        .to_string()
    }

    // ==================== Clauses ====================

    /// `WHERE ...`
    pub fn where_clause(&self, statement: &Statement) -> QueryResult<String> {
        if !statement.has_where_conditions() {
            return Ok(String::new());
        }
        let conditions = self.conditions(statement, statement.where_conditions(), 0)?;
        if conditions.is_empty() {
            return Ok(conditions);
        }
        Ok(format!("WHERE {conditions}"))
    }

    /// All INNER joins, then all LEFT joins.
    ///
    /// A join whose ON conditions render empty is skipped.
    pub fn joins(&self, statement: &Statement) -> QueryResult<String> {
        let mut all = TextJoiner::new();
        if !statement.has_joins() {
            return Ok(all.to_string());
        }

        for kind in JoinKind::ALL {
            let mut rendered = TextJoiner::new();
            for join in statement.joins(kind) {
                let on = self.conditions(statement, join.on_conditions(), 0)?;
                if on.is_empty() {
                    continue;
                }

                let mut table = non_empty_table(join.table())?;
                if let Some(alias) = join.alias() {
                    table.push(' ');
                    table.push_str(&quote_identifier(alias));
                }
                rendered.add(format!("{kind} JOIN {table} ON ({on})"));
            }
            all.merge(rendered)?;
        }
        Ok(all.to_string())
    }

    /// `GROUP BY ...`
    pub fn group_by(&self, statement: &Statement) -> QueryResult<String> {
        if statement.group_by().is_empty() {
            return Ok(String::new());
        }
        let keys = self.column_list(statement, statement.group_by())?;
        Ok(format!("GROUP BY {}", keys.join(", ")))
    }

    /// `ORDER BY ...`
    ///
    /// A key repeated with the same direction collapses into its first
    /// position; repeating it with the other direction is an error.
    pub fn order_by(&self, statement: &Statement) -> QueryResult<String> {
        if statement.orders().is_empty() {
            return Ok(String::new());
        }

        let mut seen: Vec<(String, Direction)> = Vec::new();
        for order in statement.orders() {
            for key in order.keys() {
                let quoted = quote_column_expression(statement.alias_or_table(), key)?;
                match seen.iter().find(|(k, _)| *k == quoted) {
                    Some((_, direction)) if *direction != order.direction() => {
                        return Err(QueryError::ConflictingOrder { key: key.clone() });
                    }
                    Some(_) => {}
                    None => seen.push((quoted, order.direction())),
                }
            }
        }

        let parts = TextJoiner::from_parts(
            seen.iter().map(|(key, direction)| format!("{key} {direction}")),
            ", ",
        );
        Ok(format!("ORDER BY {parts}"))
    }

    /// `LIMIT n` or `LIMIT n,m`. An offset without a limit renders nothing.
    pub fn limit(&self, statement: &Statement) -> String {
        match (statement.limit(), statement.offset()) {
            (Some(limit), Some(offset)) => format!("LIMIT {limit},{offset}"),
            (Some(limit), None) => format!("LIMIT {limit}"),
            (None, _) => String::new(),
        }
    }

    /// `FORCE INDEX (...)`. Named indexes are quoted as values.
    pub fn force_index(&self, statement: &Statement) -> String {
        match statement.force_index() {
            None => String::new(),
            Some(ForceIndex::Primary) => "FORCE INDEX (PRIMARY)".to_string(),
            Some(ForceIndex::Named(name)) => format!("FORCE INDEX ({})", self.quoter.quote(name)),
        }
    }

    /// `SET ...` for UPDATE, `(...) VALUES (...)` for INSERT.
    pub fn values(&self, statement: &Statement) -> QueryResult<String> {
        match statement.kind() {
            StatementType::Update => self.update_values(statement.value_sets()),
            StatementType::Insert => self.insert_values(statement.value_sets()),
            other => Err(QueryError::UnsupportedOperation {
                statement_type: other.to_string(),
                operation: "values",
            }),
        }
    }

    fn update_values(&self, value_sets: &[ValueSet]) -> QueryResult<String> {
        let [values] = value_sets else {
            return Err(QueryError::value_set_arity(format!(
                "Update queries must contain exactly one value set, {} provided.",
                value_sets.len()
            )));
        };

        let assignments = TextJoiner::from_parts(
            values
                .values()
                .iter()
                .map(|(key, value)| format!("{} = {}", quote_identifier(key), self.set_value(value))),
            ", ",
        );
        Ok(format!("SET {assignments}"))
    }

    fn insert_values(&self, value_sets: &[ValueSet]) -> QueryResult<String> {
        let Some(first) = value_sets.first() else {
            return Err(QueryError::value_set_arity(
                "Insert queries must contain at least one value set.",
            ));
        };

        for pair in value_sets.windows(2) {
            if !pair[0].same_keys(&pair[1]) {
                return Err(QueryError::ValueSetKeyMismatch {
                    expected: pair[0].keys().map(str::to_string).collect(),
                });
            }
        }

        let keys = TextJoiner::from_parts(first.keys().map(quote_identifier), ", ");
        let rows = TextJoiner::from_parts(
            value_sets.iter().map(|set| {
                let row = TextJoiner::from_parts(
                    set.values().iter().map(|(_, value)| self.set_value(value)),
                    ", ",
                );
                format!("({row})")
            }),
            ", ",
        );
        Ok(format!("({keys}) VALUES {rows}"))
    }

    fn set_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            other => self.quote_value(other),
        }
    }
}

fn non_empty_table(table: &str) -> QueryResult<String> {
    if table.trim_matches('`').is_empty() {
        return Err(QueryError::EmptyTable);
    }
    Ok(quote_identifier(table))
}
