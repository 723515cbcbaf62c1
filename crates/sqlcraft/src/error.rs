//! Error types for sqlcraft

use thiserror::Error;

/// Result type alias for sqlcraft operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building a statement model or translating it to SQL.
///
/// Every error is fatal to the current call: no partially rendered SQL is ever
/// returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A condition combinator other than AND/OR
    #[error("Invalid where type provided: {0}")]
    InvalidCombinator(String),

    /// An order direction other than ASC/DESC
    #[error("Order direction {0} is invalid.")]
    InvalidDirection(String),

    /// A join kind other than INNER/LEFT
    #[error("Join type {0} is invalid.")]
    InvalidJoinKind(String),

    /// An order specification without keys
    #[error("Cannot create order without keys.")]
    EmptyOrderKeys,

    /// The same order key was requested with two different directions
    #[error("Cannot define order by key twice with different directions: {key}")]
    ConflictingOrder { key: String },

    /// No translator accepts the statement type
    #[error("Could not find suitable translator for query with type: {0}")]
    UnsupportedStatementType(String),

    /// A clause was requested that the statement type cannot carry
    #[error("Query type {statement_type} does not support {operation}.")]
    UnsupportedOperation {
        statement_type: String,
        operation: &'static str,
    },

    /// A recognized SQL function was written without an argument list
    #[error("Function {function} requires a value to be passed.")]
    MalformedExpression { function: String },

    /// Wrong number of value sets for the statement type
    #[error("{0}")]
    ValueSetArity(String),

    /// Insert value sets do not share the same keys in the same order
    #[error("Not all value sets match on keys: {}", expected.join(", "))]
    ValueSetKeyMismatch { expected: Vec<String> },

    /// A value set was given a non-scalar value
    #[error("Value is of invalid type: {type_name}")]
    InvalidValueType { type_name: &'static str },

    /// Nested callable conditions went too deep
    #[error("Recursion of callable WHERE clauses is too deep (limit {limit}).")]
    RecursionLimitExceeded { limit: usize },

    /// Two text joiners with different glue strings were merged
    #[error("Cannot merge TextJoiner with different glues: {left:?} and {right:?}")]
    GlueMismatch { left: String, right: String },

    /// A statement or join without a table name
    #[error("Table name cannot be empty")]
    EmptyTable,

    /// A serde value could not be turned into a value set
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl QueryError {
    /// Create an arity error for value sets
    pub fn value_set_arity(message: impl Into<String>) -> Self {
        Self::ValueSetArity(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error was raised because nothing could translate the statement
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedStatementType(_) | Self::UnsupportedOperation { .. }
        )
    }

    /// Check if this error comes from value-set validation
    pub fn is_value_set_error(&self) -> bool {
        matches!(
            self,
            Self::ValueSetArity(_) | Self::ValueSetKeyMismatch { .. } | Self::InvalidValueType { .. }
        )
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mismatch_names_expected_keys() {
        let err = QueryError::ValueSetKeyMismatch {
            expected: vec!["username".into(), "email".into()],
        };
        assert_eq!(
            err.to_string(),
            "Not all value sets match on keys: username, email"
        );
        assert!(err.is_value_set_error());
    }

    #[test]
    fn unsupported_type_message() {
        let err = QueryError::UnsupportedStatementType("NONSENSE".into());
        assert_eq!(
            err.to_string(),
            "Could not find suitable translator for query with type: NONSENSE"
        );
        assert!(err.is_unsupported());
    }
}
