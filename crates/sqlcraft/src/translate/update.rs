use super::{Clauses, Translator};
use crate::error::QueryResult;
use crate::statement::{Statement, StatementType};
use crate::text::TextJoiner;

/// Renders UPDATE statements.
///
/// The alias is not rendered, but conditions are still qualified with it.
#[derive(Debug, Clone)]
pub struct UpdateTranslator {
    clauses: Clauses,
}

impl UpdateTranslator {
    pub fn new(clauses: Clauses) -> Self {
        Self { clauses }
    }
}

impl Translator for UpdateTranslator {
    fn accepts(&self, statement: &Statement) -> bool {
        *statement.kind() == StatementType::Update
    }

    fn translate(&self, statement: &Statement) -> QueryResult<String> {
        let c = &self.clauses;
        let mut parts = TextJoiner::new();
        parts
            .add("UPDATE")
            .add(c.table(statement)?)
            .add(c.joins(statement)?)
            .add(c.values(statement)?)
            .add(c.where_clause(statement)?);
        Ok(parts.to_string())
    }
}
