//! Statement translators.
//!
//! A [`Translator`] renders statements of one kind. The bundled translators
//! share their clause rendering through [`Clauses`]:
//!
//! | Translator | Clauses |
//! |---|---|
//! | [`SelectTranslator`] | columns, alias, FORCE INDEX, JOIN, WHERE, GROUP BY, ORDER BY, LIMIT |
//! | [`InsertTranslator`] | VALUES |
//! | [`UpdateTranslator`] | JOIN, SET, WHERE |
//! | [`DeleteTranslator`] | JOIN, WHERE, ORDER BY, LIMIT |

mod clauses;
mod delete;
mod insert;
mod select;
mod update;


pub use clauses::{Clauses, MAX_CONDITION_DEPTH};
pub use delete::DeleteTranslator;
pub use insert::InsertTranslator;
pub use select::SelectTranslator;
pub use update::UpdateTranslator;

use crate::error::QueryResult;
use crate::statement::Statement;

/// Renders statements to SQL text.
pub trait Translator: Send + Sync {
    /// Whether this translator handles `statement`.
    fn accepts(&self, statement: &Statement) -> bool;

    /// Render `statement`. Only called when [`accepts`](Self::accepts) returned `true`.
    fn translate(&self, statement: &Statement) -> QueryResult<String>;

    /// Name used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
