//! A symbol table for each namespace of a program.

use crate::structures::{
    expression::Formula,
    operator::{CustomOperator, OperatorSet},
    valuation::Valuation,
};

use super::{Namespace, SymbolDB};

/// The symbol tables of a context.
///
/// Tables are filled as declarations are processed, and are otherwise only read.
pub struct SymbolTables {
    /// Declared variables, which have no definition beyond their name.
    pub variables: SymbolDB<()>,

    /// Formulas, as the expression each formula names.
    pub formulas: SymbolDB<Formula>,

    pub valuations: SymbolDB<Valuation>,

    pub operators: SymbolDB<CustomOperator>,

    pub opsets: SymbolDB<OperatorSet>,
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self {
            variables: SymbolDB::new(Namespace::Variable),
            formulas: SymbolDB::new(Namespace::Formula),
            valuations: SymbolDB::new(Namespace::Valuation),
            operators: SymbolDB::new(Namespace::Operator),
            opsets: SymbolDB::new(Namespace::Opset),
        }
    }
}

impl SymbolTables {
    /// Whether `name` is declared in `namespace`.
    ///
    /// Parameters are local to an operator, and so are never declared in the tables.
    pub fn contains(&self, namespace: Namespace, name: &str) -> bool {
        match namespace {
            Namespace::Variable => self.variables.contains(name),
            Namespace::Formula => self.formulas.contains(name),
            Namespace::Valuation => self.valuations.contains(name),
            Namespace::Operator => self.operators.contains(name),
            Namespace::Opset => self.opsets.contains(name),
            Namespace::Parameter => false,
        }
    }

    /// The count of declarations across all namespaces.
    pub fn declaration_count(&self) -> usize {
        self.variables.len()
            + self.formulas.len()
            + self.valuations.len()
            + self.operators.len()
            + self.opsets.len()
    }
}
