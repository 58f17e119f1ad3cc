/*!
Statements and programs.

A program is an ordered sequence of statements, and the kinds of statement are fixed.
*/

use serde::Serialize;

use super::{connective::TruthValue, expression::Expression, operator::CustomOperator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// Declares each variable of the list.
    DefineVariable(Vec<String>),

    DefineFormula {
        name: String,
        expression: Expression,
    },

    DefineValuation {
        name: String,
        assignments: Vec<(String, TruthValue)>,
    },

    DefineOperator(CustomOperator),

    /// Declares an operator set from a list of operator identifiers, to be resolved on declaration.
    DefineOpset {
        name: String,
        operators: Vec<String>,
    },

    /// Evaluates the formula with the valuation.
    Evaluate {
        formula: String,
        valuation: String,
    },

    /// Checks the adequacy of the operator set.
    Adequate { opset: String },
}

/// The kind of a statement, without any of its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    DefineVariable,
    DefineFormula,
    DefineValuation,
    DefineOperator,
    DefineOpset,
    Evaluate,
    Adequate,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::DefineVariable(_) => StatementKind::DefineVariable,
            Self::DefineFormula { .. } => StatementKind::DefineFormula,
            Self::DefineValuation { .. } => StatementKind::DefineValuation,
            Self::DefineOperator(_) => StatementKind::DefineOperator,
            Self::DefineOpset { .. } => StatementKind::DefineOpset,
            Self::Evaluate { .. } => StatementKind::Evaluate,
            Self::Adequate { .. } => StatementKind::Adequate,
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DefineVariable => write!(f, "DEFINE VARIABLE"),
            Self::DefineFormula => write!(f, "DEFINE FORMULA"),
            Self::DefineValuation => write!(f, "DEFINE VALUATION"),
            Self::DefineOperator => write!(f, "DEFINE OPERATOR"),
            Self::DefineOpset => write!(f, "DEFINE OPSET"),
            Self::Evaluate => write!(f, "EVALUATE"),
            Self::Adequate => write!(f, "ADEQUATE"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Appends the statements of `other` to the program.
    pub fn extend(&mut self, other: Program) {
        self.statements.extend(other.statements)
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
