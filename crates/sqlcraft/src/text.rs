//! Ordered text fragments joined with a glue string.

use crate::error::{QueryError, QueryResult};
use std::fmt;

const DEFAULT_GLUE: &str = " ";

/// Accumulates SQL fragments and renders them joined by a glue string.
///
/// Empty fragments are kept in the part list but skipped when rendering, so
/// clause helpers can return `""` for "nothing to emit" and be added blindly.
/// The rendered text is trimmed.
///
/// # Example
/// ```
/// use sqlcraft::TextJoiner;
///
/// let mut parts = TextJoiner::new();
/// parts.add("SELECT").add("*").add("").add("FROM `users`");
/// assert_eq!(parts.to_string(), "SELECT * FROM `users`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextJoiner {
    glue: String,
    parts: Vec<String>,
}

impl Default for TextJoiner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextJoiner {
    /// Create an empty joiner using a single space as glue.
    pub fn new() -> Self {
        Self::with_glue(DEFAULT_GLUE)
    }

    /// Create an empty joiner with a custom glue.
    pub fn with_glue(glue: impl Into<String>) -> Self {
        Self {
            glue: glue.into(),
            parts: Vec::new(),
        }
    }

    /// Create a joiner from existing fragments.
    pub fn from_parts<I, S>(parts: I, glue: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joiner = Self::with_glue(glue);
        joiner.extend(parts);
        joiner
    }

    /// Append one fragment.
    pub fn add(&mut self, part: impl Into<String>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// Append several fragments in order.
    pub fn extend<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts.extend(parts.into_iter().map(Into::into));
        self
    }

    /// Insert one fragment before all existing ones.
    pub fn prepend(&mut self, part: impl Into<String>) -> &mut Self {
        self.parts.insert(0, part.into());
        self
    }

    /// Append all fragments of `other`.
    ///
    /// Both joiners must use the same glue.
    pub fn merge(&mut self, other: TextJoiner) -> QueryResult<&mut Self> {
        if self.glue != other.glue {
            return Err(QueryError::GlueMismatch {
                left: self.glue.clone(),
                right: other.glue,
            });
        }
        self.parts.extend(other.parts);
        Ok(self)
    }

    pub fn glue(&self) -> &str {
        &self.glue
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// `true` when no fragment was ever added (empty fragments count).
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for TextJoiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .parts
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&self.glue);
        f.write_str(joined.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glue_is_space() {
        let mut parts = TextJoiner::new();
        parts.add("1").add("2");
        assert_eq!(parts.to_string(), "1 2");
    }

    #[test]
    fn from_parts_with_custom_glue() {
        let parts = TextJoiner::from_parts(["a", "b", "c"], ", ");
        assert_eq!(parts.to_string(), "a, b, c");
    }

    #[test]
    fn prepend_goes_first() {
        let mut parts = TextJoiner::new();
        parts.add("1").add("2").prepend("3");
        assert_eq!(parts.to_string(), "3 1 2");
    }

    #[test]
    fn empty_fragments_are_skipped() {
        let parts = TextJoiner::from_parts(["", "a", "", "b", ""], " ");
        assert_eq!(parts.to_string(), "a b");
        assert!(!parts.is_empty());
    }

    #[test]
    fn merge_appends() {
        let mut left = TextJoiner::from_parts(["1", "2"], " ");
        let right = TextJoiner::from_parts(["3", "4"], " ");
        left.merge(right).unwrap();
        assert_eq!(left.to_string(), "1 2 3 4");
    }

    #[test]
    fn merge_rejects_different_glue() {
        let mut left = TextJoiner::from_parts(["1", "2"], " ");
        let right = TextJoiner::from_parts(["3", "4"], ",");
        let err = left.merge(right).unwrap_err();
        assert!(matches!(err, QueryError::GlueMismatch { .. }));
        assert_eq!(left.to_string(), "1 2");
    }
}
