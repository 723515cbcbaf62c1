use super::{Clauses, Translator};
use crate::error::QueryResult;
use crate::statement::{Statement, StatementType};
use crate::text::TextJoiner;

/// Renders DELETE statements.
#[derive(Debug, Clone)]
pub struct DeleteTranslator {
    clauses: Clauses,
}

impl DeleteTranslator {
    pub fn new(clauses: Clauses) -> Self {
        Self { clauses }
    }
}

impl Translator for DeleteTranslator {
    fn accepts(&self, statement: &Statement) -> bool {
        *statement.kind() == StatementType::Delete
    }

    fn translate(&self, statement: &Statement) -> QueryResult<String> {
        let c = &self.clauses;
        let mut parts = TextJoiner::new();
        parts
            .add("DELETE FROM")
            .add(c.table(statement)?)
            .add(c.joins(statement)?)
            .add(c.where_clause(statement)?)
            .add(c.order_by(statement)?)
            .add(c.limit(statement));
        Ok(parts.to_string())
    }
}
