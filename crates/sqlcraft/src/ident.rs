//! Identifier quoting and column-expression handling.
//!
//! Identifiers are wrapped in backticks. Column expressions used in SELECT
//! lists, GROUP BY and ORDER BY are classified by [`ColumnExpr::parse`]:
//!
//! - `*` and purely numeric strings are emitted unchanged
//! - aggregate calls (`COUNT`, `SUM`, `AVG`, `MIN`, `MAX`) keep the function
//!   name and quote each argument recursively
//! - `table.key` is qualified against the named table
//! - anything else is qualified against the statement's alias or table name
//!
//! # Example
//! ```
//! use sqlcraft::ident::{quote_column_expression, quote_identifier};
//!
//! assert_eq!(quote_identifier("users"), "`users`");
//! assert_eq!(quote_column_expression("u", "id")?, "`u`.`id`");
//! assert_eq!(quote_column_expression("u", "p.id")?, "`p`.`id`");
//! assert_eq!(quote_column_expression("u", "sum(amount)")?, "SUM(`u`.`amount`)");
//! # Ok::<(), sqlcraft::QueryError>(())
//! ```

use crate::error::{QueryError, QueryResult};
use regex::Regex;
use std::sync::OnceLock;

/// Identifier quote character.
pub const IDENT_QUOTE: char = '`';

/// Aggregate functions whose arguments are quoted as column expressions.
pub const SQL_FUNCTIONS: [&str; 5] = ["COUNT", "SUM", "AVG", "MIN", "MAX"];

fn function_args_re() -> &'static Regex {
    static ARGS_RE: OnceLock<Regex> = OnceLock::new();
    ARGS_RE.get_or_init(|| Regex::new(r"\((.+)\)").expect("invalid built-in argument regex"))
}

/// Wrap `name` in backticks, dropping backticks it already starts or ends with.
///
/// Backticks inside the name are doubled.
pub fn quote_identifier(name: &str) -> String {
    let name = name.trim_matches(IDENT_QUOTE);
    let mut out = String::with_capacity(name.len() + 2);
    write_identifier(name, &mut out);
    out
}

/// Render `` `table`.`key` ``.
pub fn quote_qualified(table: &str, key: &str) -> String {
    let mut out = String::with_capacity(table.len() + key.len() + 5);
    write_identifier(table.trim_matches(IDENT_QUOTE), &mut out);
    out.push('.');
    write_identifier(key.trim_matches(IDENT_QUOTE), &mut out);
    out
}

fn write_identifier(name: &str, out: &mut String) {
    out.push(IDENT_QUOTE);
    for ch in name.chars() {
        if ch == IDENT_QUOTE {
            out.push(IDENT_QUOTE);
        }
        out.push(ch);
    }
    out.push(IDENT_QUOTE);
}

/// Classify and quote a column expression, qualifying bare columns with `default_table`.
pub fn quote_column_expression(default_table: &str, expr: &str) -> QueryResult<String> {
    Ok(ColumnExpr::parse(expr)?.to_sql(default_table))
}

/// A classified column expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnExpr<'a> {
    /// `*` or a purely numeric literal, emitted unchanged.
    Verbatim(&'a str),
    /// A whitelisted aggregate call with its classified arguments.
    Function {
        name: &'static str,
        args: Vec<ColumnExpr<'a>>,
    },
    /// `table.key`
    Qualified { table: &'a str, key: &'a str },
    /// A bare column, qualified against the statement at render time.
    Bare(&'a str),
}

impl<'a> ColumnExpr<'a> {
    /// Classify a column expression.
    ///
    /// Fails with [`QueryError::MalformedExpression`] when an aggregate name is
    /// not followed by a non-empty parenthesized argument list.
    pub fn parse(expr: &'a str) -> QueryResult<Self> {
        if expr == "*" || is_numeric(expr) {
            return Ok(ColumnExpr::Verbatim(expr));
        }

        if let Some(name) = sql_function(expr) {
            let malformed = || QueryError::MalformedExpression {
                function: name.to_string(),
            };
            let rest = &expr[name.len()..];
            let inner = function_args_re()
                .captures(rest)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .ok_or_else(malformed)?;
            if inner.trim().is_empty() {
                return Err(malformed());
            }

            let args = inner
                .split(',')
                .map(|arg| ColumnExpr::parse(arg.trim()))
                .collect::<QueryResult<Vec<_>>>()?;
            return Ok(ColumnExpr::Function { name, args });
        }

        if let Some((table, key)) = expr.split_once('.') {
            return Ok(ColumnExpr::Qualified { table, key });
        }

        Ok(ColumnExpr::Bare(expr))
    }

    /// Render the expression, qualifying bare columns with `default_table`.
    pub fn to_sql(&self, default_table: &str) -> String {
        let mut out = String::new();
        self.write_sql(default_table, &mut out);
        out
    }

    fn write_sql(&self, default_table: &str, out: &mut String) {
        match self {
            ColumnExpr::Verbatim(s) => out.push_str(s),
            ColumnExpr::Function { name, args } => {
                out.push_str(name);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    arg.write_sql(default_table, out);
                }
                out.push(')');
            }
            ColumnExpr::Qualified { table, key } => out.push_str(&quote_qualified(table, key)),
            ColumnExpr::Bare(key) => out.push_str(&quote_qualified(default_table, key)),
        }
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Match a whitelisted function name at the start of `expr`, case-insensitively.
///
/// The name must be followed by `(` (optionally after whitespace) or end the
/// expression, so `summary` or `max_age` stay plain columns.
fn sql_function(expr: &str) -> Option<&'static str> {
    SQL_FUNCTIONS.iter().copied().find(|name| {
        expr.get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name))
            && expr[name.len()..]
                .trim_start()
                .chars()
                .next()
                .is_none_or(|c| c == '(')
    })
}
