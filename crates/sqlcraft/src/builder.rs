//! Statement dispatch.

use crate::error::{QueryError, QueryResult};
use crate::quote::{MySqlQuoter, Quoter};
use crate::statement::Statement;
use crate::translate::{
    Clauses, DeleteTranslator, InsertTranslator, SelectTranslator, Translator, UpdateTranslator,
};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use crate::log::SqlLog;

/// Renders statements with the first translator that accepts them.
///
/// The default registry holds the DELETE, INSERT, UPDATE and SELECT
/// translators, in that order. Custom translators are appended after them and
/// are only reached for statements none of the defaults accept.
///
/// # Example
/// ```
/// use sqlcraft::{Builder, Statement, ValueSet};
///
/// let builder = Builder::mysql();
///
/// let mut insert = Statement::insert("users");
/// insert.add_value_set(ValueSet::from_pairs([("username", "amy")])?);
/// assert_eq!(
///     builder.build(&insert)?,
///     "INSERT INTO `users` (`username`) VALUES ('amy')"
/// );
///
/// let unknown = Statement::new("NONSENSE", "users", None);
/// assert!(builder.build(&unknown).is_err());
/// # Ok::<(), sqlcraft::QueryError>(())
/// ```
pub struct Builder {
    translators: Vec<Box<dyn Translator>>,
    #[cfg(feature = "tracing")]
    sql_log: Option<SqlLog>,
}

impl Builder {
    /// Create a builder with the default translators using `quoter`.
    pub fn new(quoter: impl Quoter + 'static) -> Self {
        Self::from_shared(Arc::new(quoter))
    }

    /// Create a builder around an already shared quoter.
    pub fn from_shared(quoter: Arc<dyn Quoter>) -> Self {
        let clauses = Clauses::new(quoter);
        Self {
            translators: vec![
                Box::new(DeleteTranslator::new(clauses.clone())),
                Box::new(InsertTranslator::new(clauses.clone())),
                Box::new(UpdateTranslator::new(clauses.clone())),
                Box::new(SelectTranslator::new(clauses)),
            ],
            #[cfg(feature = "tracing")]
            sql_log: None,
        }
    }

    /// Create a builder using [`MySqlQuoter`].
    pub fn mysql() -> Self {
        Self::new(MySqlQuoter)
    }

    /// Append a translator after the existing ones.
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.push_translator(translator);
        self
    }

    /// Append a translator after the existing ones.
    pub fn push_translator(&mut self, translator: impl Translator + 'static) -> &mut Self {
        self.translators.push(Box::new(translator));
        self
    }

    /// Registered translators, in dispatch order.
    pub fn translators(&self) -> impl Iterator<Item = &dyn Translator> {
        self.translators.iter().map(|t| t.as_ref())
    }

    /// Emit a `tracing` event carrying the SQL of every successful build.
    #[cfg(feature = "tracing")]
    pub fn with_sql_log(mut self, log: SqlLog) -> Self {
        self.sql_log = Some(log);
        self
    }

    /// Render `statement` to SQL text.
    ///
    /// Fails with [`QueryError::UnsupportedStatementType`] when no translator
    /// accepts it, or with whatever error the accepting translator raises.
    pub fn build(&self, statement: &Statement) -> QueryResult<String> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            statement_type = %statement.kind(),
            table = statement.table(),
            "dispatching statement"
        );

        let Some(translator) = self.translators.iter().find(|t| t.accepts(statement)) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                statement_type = %statement.kind(),
                translators = self.translators.len(),
                "no translator accepts statement"
            );
            return Err(QueryError::UnsupportedStatementType(
                statement.kind().to_string(),
            ));
        };

        let sql = translator.translate(statement)?;

        #[cfg(feature = "tracing")]
        if let Some(log) = &self.sql_log {
            log.emit(statement, translator.name(), &sql);
        }

        Ok(sql)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::mysql()
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.translators.iter().map(|t| t.name()).collect();
        let mut s = f.debug_struct("Builder");
        s.field("translators", &names);
        #[cfg(feature = "tracing")]
        s.field("sql_log", &self.sql_log);
        s.finish()
    }
}
