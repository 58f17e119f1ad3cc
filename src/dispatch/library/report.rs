//! Details on the result of some statement.

use crate::procedures::process::StatementResult;

#[derive(Clone, Debug)]
pub enum Report {
    /// The result of a statement.
    Statement(StatementResult),

    /// Processing stopped early, at the failing statement with the given index.
    Halted(usize),

    /// No further dispatches will be sent regarding the current program.
    Finish,
}
