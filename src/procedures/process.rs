/*!
Processing statements.

Statements are processed strictly in order, and each statement runs to completion before the next begins.
Declarations fill the symbol tables, while evaluate and adequate statements only read the tables.

A failing statement gives an error as the outcome of the statement, and has no other effect.
Whether processing continues after a failure is left to the [context](crate::context::Context).
*/

use serde::Serialize;

use crate::{
    config::Config,
    db::symbols::SymbolTables,
    misc::log::targets,
    procedures::{
        adequacy::{self, AdequacyReport},
        declare::{self, Declaration},
        evaluate::evaluate,
    },
    structures::{
        connective::TruthValue,
        program::{Statement, StatementKind},
    },
    types::err::ErrorKind,
};

/// The outcome of a statement which succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Some names were declared.
    Declared(Declaration),

    /// A formula was evaluated.
    Evaluated {
        formula: String,
        valuation: String,
        value: TruthValue,
    },

    /// The adequacy of an opset was checked.
    Adequacy(AdequacyReport),
}

/// The result of a statement, together with the index of the statement in the program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatementResult {
    pub index: usize,
    pub kind: StatementKind,
    pub outcome: Result<Outcome, ErrorKind>,
}

impl StatementResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }

    /// The value of an evaluate statement, if the statement was an evaluate statement which succeeded.
    pub fn value(&self) -> Option<TruthValue> {
        match &self.outcome {
            Ok(Outcome::Evaluated { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// The report of an adequate statement, if the statement was an adequate statement which succeeded.
    pub fn adequacy(&self) -> Option<&AdequacyReport> {
        match &self.outcome {
            Ok(Outcome::Adequacy(report)) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        self.outcome.as_ref().err()
    }
}

/// The value of the formula named `formula` under the valuation named `valuation`.
pub fn evaluate_named(
    formula: &str,
    valuation: &str,
    symbols: &SymbolTables,
) -> Result<TruthValue, ErrorKind> {
    let formula = symbols.formulas.resolve(formula)?;
    let valuation = symbols.valuations.resolve(valuation)?;
    evaluate(&formula.expression, valuation, symbols)
}

/// Checks the adequacy of the opset named `opset`.
pub fn check_adequacy_named(
    opset: &str,
    symbols: &SymbolTables,
) -> Result<AdequacyReport, ErrorKind> {
    let opset = symbols.opsets.resolve(opset)?;
    adequacy::check_adequacy(opset, symbols)
}

/// Processes a single statement.
pub fn process_statement(
    statement: &Statement,
    symbols: &mut SymbolTables,
    config: &Config,
) -> Result<Outcome, ErrorKind> {
    log::debug!(target: targets::PROGRAM, "Processing {}", statement.kind());

    match statement {
        Statement::DefineVariable(names) => {
            declare::declare_variables(names, symbols).map(Outcome::Declared)
        }

        Statement::DefineFormula { name, expression } => {
            declare::declare_formula(name, expression, symbols, config).map(Outcome::Declared)
        }

        Statement::DefineValuation { name, assignments } => {
            declare::declare_valuation(name, assignments, symbols).map(Outcome::Declared)
        }

        Statement::DefineOperator(operator) => {
            declare::declare_operator(operator, symbols, config).map(Outcome::Declared)
        }

        Statement::DefineOpset { name, operators } => {
            declare::declare_opset(name, operators, symbols).map(Outcome::Declared)
        }

        Statement::Evaluate { formula, valuation } => {
            let value = evaluate_named(formula, valuation, symbols)?;
            log::info!(target: targets::EVALUATION, "{formula} with {valuation} = {value}");
            Ok(Outcome::Evaluated {
                formula: formula.clone(),
                valuation: valuation.clone(),
                value,
            })
        }

        Statement::Adequate { opset } => {
            check_adequacy_named(opset, symbols).map(Outcome::Adequacy)
        }
    }
}
