use super::{Clauses, Translator};
use crate::error::QueryResult;
use crate::statement::{Statement, StatementType};
use crate::text::TextJoiner;

/// Renders INSERT statements.
#[derive(Debug, Clone)]
pub struct InsertTranslator {
    clauses: Clauses,
}

impl InsertTranslator {
    pub fn new(clauses: Clauses) -> Self {
        Self { clauses }
    }
}

impl Translator for InsertTranslator {
    fn accepts(&self, statement: &Statement) -> bool {
        *statement.kind() == StatementType::Insert
    }

    fn translate(&self, statement: &Statement) -> QueryResult<String> {
        let mut parts = TextJoiner::new();
        parts
            .add("INSERT INTO")
            .add(self.clauses.table(statement)?)
            .add(self.clauses.values(statement)?);
        Ok(parts.to_string())
    }
}
