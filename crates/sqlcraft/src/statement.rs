//! The statement model: everything a translator needs to render one query.

use crate::condition::{Combinator, Condition};
use crate::join::{Join, JoinKind};
use crate::order::OrderBy;
use crate::value_set::ValueSet;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel index name that renders as `FORCE INDEX (PRIMARY)`.
pub const PRIMARY_KEY_INDEX: &str = "PRIMARY";

/// Statement kind.
///
/// The four built-in kinds each have a translator. Anything else is carried
/// as [`StatementType::Custom`] and only a custom translator can render it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatementType {
    Delete,
    Insert,
    Update,
    Select,
    Custom(String),
}

impl StatementType {
    pub fn as_str(&self) -> &str {
        match self {
            StatementType::Delete => "DELETE",
            StatementType::Insert => "INSERT",
            StatementType::Update => "UPDATE",
            StatementType::Select => "SELECT",
            StatementType::Custom(name) => name,
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StatementType {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "DELETE" => StatementType::Delete,
            "INSERT" => StatementType::Insert,
            "UPDATE" => StatementType::Update,
            "SELECT" => StatementType::Select,
            _ => StatementType::Custom(s.to_string()),
        }
    }
}

impl From<String> for StatementType {
    fn from(s: String) -> Self {
        StatementType::from(s.as_str())
    }
}

/// Index hint for SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForceIndex {
    /// The primary key index, rendered unescaped.
    Primary,
    /// A named index, rendered as a quoted value.
    Named(String),
}

impl From<&str> for ForceIndex {
    fn from(s: &str) -> Self {
        if s == PRIMARY_KEY_INDEX {
            ForceIndex::Primary
        } else {
            ForceIndex::Named(s.to_string())
        }
    }
}

impl From<String> for ForceIndex {
    fn from(s: String) -> Self {
        ForceIndex::from(s.as_str())
    }
}

/// A statement under construction.
///
/// Conditions, joins, orders and value sets are only ever appended. Fields
/// that do not apply to the statement's type are kept but ignored by its
/// translator.
///
/// # Example
/// ```
/// use sqlcraft::{Builder, OrderBy, Statement};
///
/// let mut query = Statement::select_as("users", "u");
/// query
///     .set_columns(["id", "COUNT(id)"])
///     .and_where("active", "=", true)
///     .or_where_group(|q| {
///         q.and_where("role", "IN", vec!["admin", "owner"]);
///     })
///     .order_by(OrderBy::desc(["id"])?)
///     .set_limit(10, None);
///
/// assert_eq!(
///     Builder::mysql().build(&query)?,
///     "SELECT `u`.`id`, COUNT(`u`.`id`) FROM `users` `u` \
///      WHERE `u`.`active` = 1 OR (`u`.`role` IN ('admin','owner')) \
///      ORDER BY `u`.`id` DESC LIMIT 10"
/// );
/// # Ok::<(), sqlcraft::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Statement {
    kind: StatementType,
    table: String,
    alias: Option<String>,
    columns: Vec<String>,
    where_conditions: Vec<Condition>,
    joins: BTreeMap<JoinKind, Vec<Join>>,
    limit: Option<u64>,
    offset: Option<u64>,
    force_index: Option<ForceIndex>,
    group_by: Vec<String>,
    orders: Vec<OrderBy>,
    value_sets: Vec<ValueSet>,
}

impl Statement {
    pub fn new(kind: impl Into<StatementType>, table: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            kind: kind.into(),
            table: table.into(),
            alias: alias.map(str::to_string),
            columns: Vec::new(),
            where_conditions: Vec::new(),
            joins: BTreeMap::new(),
            limit: None,
            offset: None,
            force_index: None,
            group_by: Vec::new(),
            orders: Vec::new(),
            value_sets: Vec::new(),
        }
    }

    pub fn select(table: impl Into<String>) -> Self {
        Self::new(StatementType::Select, table, None)
    }

    pub fn select_as(table: impl Into<String>, alias: &str) -> Self {
        Self::new(StatementType::Select, table, Some(alias))
    }

    pub fn delete(table: impl Into<String>) -> Self {
        Self::new(StatementType::Delete, table, None)
    }

    pub fn delete_as(table: impl Into<String>, alias: &str) -> Self {
        Self::new(StatementType::Delete, table, Some(alias))
    }

    /// INSERT statements never carry an alias.
    pub fn insert(table: impl Into<String>) -> Self {
        Self::new(StatementType::Insert, table, None)
    }

    pub fn update(table: impl Into<String>) -> Self {
        Self::new(StatementType::Update, table, None)
    }

    pub fn update_as(table: impl Into<String>, alias: &str) -> Self {
        Self::new(StatementType::Update, table, Some(alias))
    }

    /// An empty statement with the same type, table and alias.
    ///
    /// This is what callable conditions receive.
    pub fn clean_clone(&self) -> Self {
        Self::new(self.kind.clone(), self.table.clone(), self.alias.as_deref())
    }

    // ==================== Identity ====================

    pub fn kind(&self) -> &StatementType {
        &self.kind
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name columns are qualified against.
    pub fn alias_or_table(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    // ==================== Columns ====================

    /// Replace the selected columns.
    pub fn set_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    // ==================== Conditions ====================

    fn push_value(&mut self, key: &str, comparator: &str, value: Value, combinator: Combinator) -> &mut Self {
        let condition = Condition::value(self.table.as_str(), key, comparator, value, combinator);
        self.where_conditions.push(condition);
        self
    }

    fn push_unary(&mut self, key: &str, comparator: &str, combinator: Combinator) -> &mut Self {
        let condition = Condition::unary(self.table.as_str(), key, comparator, combinator);
        self.where_conditions.push(condition);
        self
    }

    fn push_key(&mut self, key: &str, comparator: &str, other: &str, combinator: Combinator) -> &mut Self {
        let condition = Condition::key(self.alias_or_table(), key, comparator, other, combinator);
        self.where_conditions.push(condition);
        self
    }

    /// AND key comparator value
    pub fn and_where(&mut self, key: &str, comparator: &str, value: impl Into<Value>) -> &mut Self {
        self.push_value(key, comparator, value.into(), Combinator::And)
    }

    /// OR key comparator value
    pub fn or_where(&mut self, key: &str, comparator: &str, value: impl Into<Value>) -> &mut Self {
        self.push_value(key, comparator, value.into(), Combinator::Or)
    }

    /// AND key IS NULL
    pub fn and_where_null(&mut self, key: &str) -> &mut Self {
        self.push_unary(key, "IS NULL", Combinator::And)
    }

    /// OR key IS NULL
    pub fn or_where_null(&mut self, key: &str) -> &mut Self {
        self.push_unary(key, "IS NULL", Combinator::Or)
    }

    /// AND key IS NOT NULL
    pub fn and_where_not_null(&mut self, key: &str) -> &mut Self {
        self.push_unary(key, "IS NOT NULL", Combinator::And)
    }

    /// OR key IS NOT NULL
    pub fn or_where_not_null(&mut self, key: &str) -> &mut Self {
        self.push_unary(key, "IS NOT NULL", Combinator::Or)
    }

    /// AND key comparator other_key, both columns of this statement.
    pub fn and_where_key(&mut self, key: &str, comparator: &str, other_key: &str) -> &mut Self {
        self.push_key(key, comparator, other_key, Combinator::And)
    }

    /// OR key comparator other_key, both columns of this statement.
    pub fn or_where_key(&mut self, key: &str, comparator: &str, other_key: &str) -> &mut Self {
        self.push_key(key, comparator, other_key, Combinator::Or)
    }

    /// AND (nested group)
    pub fn and_where_group<F>(&mut self, builder: F) -> &mut Self
    where
        F: Fn(&mut Statement) + Send + Sync + 'static,
    {
        self.where_conditions
            .push(Condition::callable(Combinator::And, builder));
        self
    }

    /// OR (nested group)
    pub fn or_where_group<F>(&mut self, builder: F) -> &mut Self
    where
        F: Fn(&mut Statement) + Send + Sync + 'static,
    {
        self.where_conditions
            .push(Condition::callable(Combinator::Or, builder));
        self
    }

    /// Append a prebuilt condition.
    pub fn where_condition(&mut self, condition: Condition) -> &mut Self {
        self.where_conditions.push(condition);
        self
    }

    pub fn where_conditions(&self) -> &[Condition] {
        &self.where_conditions
    }

    pub fn has_where_conditions(&self) -> bool {
        !self.where_conditions.is_empty()
    }

    // ==================== Joins ====================

    pub fn join(&mut self, kind: JoinKind, join: Join) -> &mut Self {
        self.joins.entry(kind).or_default().push(join);
        self
    }

    pub fn inner_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinKind::Inner, join)
    }

    pub fn left_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinKind::Left, join)
    }

    /// Joins of one kind, in the order they were added.
    pub fn joins(&self, kind: JoinKind) -> &[Join] {
        self.joins.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_joins(&self) -> bool {
        self.joins.values().any(|joins| !joins.is_empty())
    }

    // ==================== Limit ====================

    /// Set LIMIT and OFFSET. Zero for either means "unset".
    pub fn set_limit(&mut self, limit: u64, offset: Option<u64>) -> &mut Self {
        self.limit = Some(limit).filter(|&n| n > 0);
        self.offset = offset.filter(|&n| n > 0);
        self
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    // ==================== Hints, grouping, ordering ====================

    /// Force an index. [`PRIMARY_KEY_INDEX`] selects the primary key.
    pub fn set_force_index(&mut self, index: impl Into<ForceIndex>) -> &mut Self {
        self.force_index = Some(index.into());
        self
    }

    pub fn force_index(&self) -> Option<&ForceIndex> {
        self.force_index.as_ref()
    }

    /// Replace the GROUP BY keys.
    pub fn set_group_by<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    pub fn order_by(&mut self, order: OrderBy) -> &mut Self {
        self.orders.push(order);
        self
    }

    pub fn orders(&self) -> &[OrderBy] {
        &self.orders
    }

    // ==================== Values ====================

    pub fn add_value_set(&mut self, values: ValueSet) -> &mut Self {
        self.value_sets.push(values);
        self
    }

    pub fn value_sets(&self) -> &[ValueSet] {
        &self.value_sets
    }

    pub fn has_value_sets(&self) -> bool {
        !self.value_sets.is_empty()
    }
}
