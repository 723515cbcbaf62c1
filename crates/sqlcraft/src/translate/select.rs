use super::{Clauses, Translator};
use crate::error::QueryResult;
use crate::statement::{Statement, StatementType};
use crate::text::TextJoiner;

/// Renders SELECT statements.
#[derive(Debug, Clone)]
pub struct SelectTranslator {
    clauses: Clauses,
}

impl SelectTranslator {
    pub fn new(clauses: Clauses) -> Self {
        Self { clauses }
    }
}

impl Translator for SelectTranslator {
    fn accepts(&self, statement: &Statement) -> bool {
        *statement.kind() == StatementType::Select
    }

    fn translate(&self, statement: &Statement) -> QueryResult<String> {
        let c = &self.clauses;
        let mut parts = TextJoiner::new();

        parts.add("SELECT");
        if statement.columns().is_empty() {
            parts.add("*");
        } else {
            let columns = c.column_list(statement, statement.columns())?;
            parts.add(TextJoiner::from_parts(columns, ", ").to_string());
        }

        parts
            .add("FROM")
            .add(c.table_with_alias(statement)?)
            .add(c.force_index(statement))
            .add(c.joins(statement)?)
            .add(c.where_clause(statement)?)
            .add(c.group_by(statement)?)
            .add(c.order_by(statement)?)
            .add(c.limit(statement));

        Ok(parts.to_string())
    }
}
