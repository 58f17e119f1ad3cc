//! Error types used in the library.
//!
//! - Every error is recoverable at the level of a statement: a failing statement reports its error and processing continues with the next statement (unless the context is [configured](crate::config::Config::halt_on_error) to halt).
//! - Errors carry the offending name(s), and the [statement result](crate::procedures::process::StatementResult) carries the index of the statement, so a diagnostic can be built without access to the program.
//! - Formatting is left to the caller, though a plain [Display](std::fmt::Display) is given for convenience.
//!
//! Names of the specific error enums overlap with the procedures they are returned from.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

use serde::Serialize;

use crate::db::Namespace;

/// The general error type of the library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// A name was declared twice in the same namespace.
    DuplicateDeclaration { namespace: Namespace, name: String },

    /// A reference to a name with no prior declaration.
    UnknownIdentifier { namespace: Namespace, name: String },

    /// A formula refers to a variable absent from the valuation used to evaluate the formula.
    UnboundVariable { variable: String },

    /// An operator was given (or a pattern has) a count of arguments different to the arity of the operator.
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    /// The truth table of an operator has no entry for some input.
    NoMatchingEntry { operator: String, input: Vec<bool> },

    /// The arity of a declared operator exceeds the configured limit.
    ArityLimit {
        operator: String,
        arity: usize,
        limit: usize,
    },

    /// An expression is deeper than the configured limit, with formula references expanded.
    DepthLimit { depth: usize, limit: usize },

    /// The text of a program could not be parsed.
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { namespace, name } => {
                write!(f, "{namespace} '{name}' is already declared")
            }

            Self::UnknownIdentifier { namespace, name } => {
                write!(f, "unknown {namespace} '{name}'")
            }

            Self::UnboundVariable { variable } => {
                write!(f, "variable '{variable}' has no value in the valuation")
            }

            Self::ArityMismatch {
                operator,
                expected,
                found,
            } => write!(
                f,
                "operator '{operator}' takes {expected} argument(s) but {found} were given"
            ),

            Self::NoMatchingEntry { operator, input } => {
                let input = input
                    .iter()
                    .map(|value| if *value { "1" } else { "0" })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "operator '{operator}' has no entry for ({input})")
            }

            Self::ArityLimit {
                operator,
                arity,
                limit,
            } => write!(
                f,
                "operator '{operator}' has arity {arity}, above the limit of {limit}"
            ),

            Self::DepthLimit { depth, limit } => {
                write!(f, "expression has depth {depth}, above the limit of {limit}")
            }

            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when matching an input against a truth table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TruthTableError {
    /// No pattern matched the input and the table has no otherwise entry.
    NoMatchingEntry(Vec<bool>),
}

impl TruthTableError {
    /// The error as an [ErrorKind], attributed to the operator named `operator`.
    pub fn for_operator(self, operator: &str) -> ErrorKind {
        match self {
            Self::NoMatchingEntry(input) => ErrorKind::NoMatchingEntry {
                operator: operator.to_string(),
                input,
            },
        }
    }
}

/// Errors during parsing.
///
/// Line and column are both counted from 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ParseError {
    /// A character which begins no lexeme.
    UnknownLexeme { line: usize, column: usize, lexeme: char },

    /// A block comment was opened but never closed.
    UnterminatedComment { line: usize, column: usize },

    /// Some token other than the token expected.
    Unexpected {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    /// The input ended part way through a statement.
    UnexpectedEnd { expected: String },

    /// An expression nested deeper than the configured limit.
    TooDeep { line: usize, column: usize, limit: usize },

    /// The input could not be read.
    Read,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLexeme {
                line,
                column,
                lexeme,
            } => write!(f, "{line}:{column}: unknown lexeme '{lexeme}'"),

            Self::UnterminatedComment { line, column } => {
                write!(f, "{line}:{column}: unterminated comment")
            }

            Self::Unexpected {
                line,
                column,
                expected,
                found,
            } => write!(f, "{line}:{column}: expected {expected}, found {found}"),

            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }

            Self::TooDeep {
                line,
                column,
                limit,
            } => write!(f, "{line}:{column}: expression nested deeper than {limit}"),

            Self::Read => write!(f, "failed to read input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table_error_for_operator() {
        let e = TruthTableError::NoMatchingEntry(vec![true, false]).for_operator("op");
        assert_eq!(
            e,
            ErrorKind::NoMatchingEntry {
                operator: "op".to_string(),
                input: vec![true, false]
            }
        );
        assert_eq!(e.to_string(), "operator 'op' has no entry for (1, 0)");
    }
}
