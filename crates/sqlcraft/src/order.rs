//! ORDER BY specifications.

use crate::error::{QueryError, QueryResult};
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(QueryError::InvalidDirection(s.to_string())),
        }
    }
}

/// A direction applied to one or more sort keys.
///
/// # Example
/// ```
/// use sqlcraft::OrderBy;
///
/// let order = OrderBy::asc(["id", "updated_at"])?;
/// assert!(order.is_ascending());
/// assert_eq!(order.keys(), ["id", "updated_at"]);
///
/// assert!(OrderBy::desc(Vec::<String>::new()).is_err());
/// # Ok::<(), sqlcraft::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    direction: Direction,
    keys: Vec<String>,
}

impl OrderBy {
    /// Create an order specification. At least one key is required.
    pub fn new<I, S>(direction: Direction, keys: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(QueryError::EmptyOrderKeys);
        }
        Ok(Self { direction, keys })
    }

    pub fn asc<I, S>(keys: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Direction::Asc, keys)
    }

    pub fn desc<I, S>(keys: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Direction::Desc, keys)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == Direction::Asc
    }

    pub fn is_descending(&self) -> bool {
        self.direction == Direction::Desc
    }
}
