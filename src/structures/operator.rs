/*!
Custom operators and references to operators.

A custom operator is defined by a name, a list of parameters, and a [TruthTable].
The parameters serve only to fix the arity of the operator, as cells of a pattern are aligned with parameters by position.
*/

use serde::Serialize;

use super::{connective::Connective, truth_table::TruthTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomOperator {
    pub name: String,
    pub parameters: Vec<String>,
    pub table: TruthTable,
}

impl CustomOperator {
    pub fn new(name: impl Into<String>, parameters: Vec<String>, table: TruthTable) -> Self {
        Self {
            name: name.into(),
            parameters,
            table,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// An operator of an operator set, either some built-in connective or a declared custom operator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum OperatorRef {
    Builtin(Connective),
    Custom(String),
}

impl OperatorRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(connective) => connective.name(),
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for OperatorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named, ordered, set of operators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorSet {
    pub name: String,
    pub operators: Vec<OperatorRef>,
}
