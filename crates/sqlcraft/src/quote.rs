//! Literal quoting.
//!
//! Translators never escape string literals themselves. They hand the
//! stringified value to a [`Quoter`], which is expected to return a complete,
//! dialect-correct literal (usually by delegating to a driver's escaping
//! routine). The returned text is inserted as-is.

/// Turns a raw string into an escaped SQL string literal.
pub trait Quoter: Send + Sync {
    /// Quote `value`, including the surrounding quote characters.
    fn quote(&self, value: &str) -> String;
}

impl<F> Quoter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn quote(&self, value: &str) -> String {
        self(value)
    }
}

/// Quoter using the MySQL escape rules for single-quoted literals.
///
/// Escapes the same character set as `mysql_real_escape_string`:
/// NUL, `\n`, `\r`, `\`, `'`, `"` and Ctrl-Z.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQuoter;

impl MySqlQuoter {
    pub fn new() -> Self {
        Self
    }
}

impl Quoter for MySqlQuoter {
    fn quote(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('\'');
        for ch in value.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\x1a' => out.push_str("\\Z"),
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }
}
