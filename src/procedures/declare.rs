/*!
Declarations, and the checks made before a declaration is entered into the symbol tables.

Each declaration is checked in full before anything is declared, and so a failing declaration has no effect.

- Names must be fresh to their namespace.
- Every name an expression refers to must already be declared, so there are no forward references (and, as a consequence, no cycles between formulas).
- Every application of an operator in an expression, and every pattern of a truth table, must agree with the arity of the operator.
- The names of the built-in connectives are reserved, and so may not name a custom operator.
- A formula may be no deeper than the [configured limit](crate::config::Config::max_expression_depth), with each formula reference expanded, and so evaluation of a declared formula recurses no deeper than the limit.

Details of these checks are given with each method.
*/

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    config::Config,
    db::{symbols::SymbolTables, Namespace},
    misc::log::targets,
    procedures::matcher,
    structures::{
        connective::{Connective, TruthValue},
        expression::{CustomApplication, Expression, Formula},
        operator::{CustomOperator, OperatorRef, OperatorSet},
        truth_table::TruthTableEntry,
        valuation::Valuation,
    },
    types::err::ErrorKind,
};

/// The names entered into some namespace by a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub namespace: Namespace,
    pub names: Vec<String>,
}

impl Declaration {
    fn single(namespace: Namespace, name: &str) -> Self {
        Self {
            namespace,
            names: vec![name.to_string()],
        }
    }
}

fn fresh(symbols: &SymbolTables, namespace: Namespace, name: &str) -> Result<(), ErrorKind> {
    match symbols.contains(namespace, name) {
        false => Ok(()),
        true => Err(ErrorKind::DuplicateDeclaration {
            namespace,
            name: name.to_string(),
        }),
    }
}

/// Declares each variable of `names`.
///
/// If any variable is already declared, or a variable appears twice in `names`, no variable is declared.
pub fn declare_variables(
    names: &[String],
    symbols: &mut SymbolTables,
) -> Result<Declaration, ErrorKind> {
    let mut seen = HashSet::new();
    for name in names {
        fresh(symbols, Namespace::Variable, name)?;
        if !seen.insert(name.as_str()) {
            return Err(ErrorKind::DuplicateDeclaration {
                namespace: Namespace::Variable,
                name: name.clone(),
            });
        }
    }

    for name in names {
        symbols.variables.declare(name, ())?;
    }

    Ok(Declaration {
        namespace: Namespace::Variable,
        names: names.to_vec(),
    })
}

/// Checks each name `expression` refers to is declared, and each operator is applied to as many arguments as the arity of the operator.
pub fn check_expression(expression: &Expression, symbols: &SymbolTables) -> Result<(), ErrorKind> {
    match expression {
        Expression::Variable(name) => symbols.variables.resolve(name).map(|_| ()),

        Expression::Negation(e) => check_expression(e, symbols),

        Expression::BinaryOp { left, right, .. } => {
            check_expression(left, symbols)?;
            check_expression(right, symbols)
        }

        Expression::Custom(CustomApplication::Formula(name)) => {
            symbols.formulas.resolve(name).map(|_| ())
        }

        Expression::Custom(CustomApplication::Operator { name, arguments }) => {
            let operator = symbols.operators.resolve(name)?;
            if operator.arity() != arguments.len() {
                return Err(ErrorKind::ArityMismatch {
                    operator: name.clone(),
                    expected: operator.arity(),
                    found: arguments.len(),
                });
            }
            arguments
                .iter()
                .try_for_each(|argument| check_expression(argument, symbols))
        }
    }
}

/// The depth of `expression` with each formula reference counted as one more than the depth of the referenced formula.
///
/// A reference to an undeclared formula is counted as a leaf.
pub fn expanded_depth(expression: &Expression, symbols: &SymbolTables) -> usize {
    match expression {
        Expression::Variable(_) => 1,

        Expression::Negation(e) => 1 + expanded_depth(e, symbols),

        Expression::BinaryOp { left, right, .. } => {
            1 + expanded_depth(left, symbols).max(expanded_depth(right, symbols))
        }

        Expression::Custom(CustomApplication::Formula(name)) => {
            1 + symbols.formulas.resolve(name).map_or(0, |formula| formula.depth)
        }

        Expression::Custom(CustomApplication::Operator { arguments, .. }) => {
            1 + arguments
                .iter()
                .map(|argument| expanded_depth(argument, symbols))
                .max()
                .unwrap_or(0)
        }
    }
}

/// Checks the [expanded depth](expanded_depth) of `expression` is within the configured limit, and returns the depth.
pub fn check_depth(
    expression: &Expression,
    symbols: &SymbolTables,
    config: &Config,
) -> Result<usize, ErrorKind> {
    let depth = expanded_depth(expression, symbols);
    let limit = config.max_expression_depth.value;
    match depth <= limit {
        true => Ok(depth),
        false => Err(ErrorKind::DepthLimit { depth, limit }),
    }
}

pub fn declare_formula(
    name: &str,
    expression: &Expression,
    symbols: &mut SymbolTables,
    config: &Config,
) -> Result<Declaration, ErrorKind> {
    fresh(symbols, Namespace::Formula, name)?;
    check_expression(expression, symbols)?;
    let depth = check_depth(expression, symbols, config)?;

    symbols.formulas.declare(
        name,
        Formula {
            expression: expression.clone(),
            depth,
        },
    )?;
    log::debug!(target: targets::SYMBOLS, "Formula '{name}' = {expression}, with depth {depth}");

    Ok(Declaration::single(Namespace::Formula, name))
}

/// Declares a valuation.
///
/// Each variable assigned a value must be declared, and assigned a value at most once.
pub fn declare_valuation(
    name: &str,
    assignments: &[(String, TruthValue)],
    symbols: &mut SymbolTables,
) -> Result<Declaration, ErrorKind> {
    fresh(symbols, Namespace::Valuation, name)?;

    let mut seen = HashSet::new();
    for (variable, _) in assignments {
        symbols.variables.resolve(variable)?;
        if !seen.insert(variable.as_str()) {
            return Err(ErrorKind::DuplicateDeclaration {
                namespace: Namespace::Variable,
                name: variable.clone(),
            });
        }
    }

    symbols
        .valuations
        .declare(name, Valuation::new(name, assignments.to_vec()))?;

    Ok(Declaration::single(Namespace::Valuation, name))
}

/// Declares a custom operator.
///
/// The name of the operator must be fresh and not the name of a built-in connective, parameters must be distinct, the arity must be within the configured limit, and each pattern must have as many cells as the operator has parameters.
///
/// A table need not be total to be declared, though an input without an entry is an error when met.
pub fn declare_operator(
    operator: &CustomOperator,
    symbols: &mut SymbolTables,
    config: &Config,
) -> Result<Declaration, ErrorKind> {
    let name = operator.name.as_str();

    if Connective::from_name(name).is_some() {
        return Err(ErrorKind::DuplicateDeclaration {
            namespace: Namespace::Operator,
            name: name.to_string(),
        });
    }
    fresh(symbols, Namespace::Operator, name)?;

    let mut seen = HashSet::new();
    for parameter in &operator.parameters {
        if !seen.insert(parameter.as_str()) {
            return Err(ErrorKind::DuplicateDeclaration {
                namespace: Namespace::Parameter,
                name: parameter.clone(),
            });
        }
    }

    let limit = config.max_operator_arity.value;
    if operator.arity() > limit {
        return Err(ErrorKind::ArityLimit {
            operator: name.to_string(),
            arity: operator.arity(),
            limit,
        });
    }

    for entry in operator.table.entries() {
        if let TruthTableEntry::Pattern { pattern, .. } = entry {
            if pattern.len() != operator.arity() {
                return Err(ErrorKind::ArityMismatch {
                    operator: name.to_string(),
                    expected: operator.arity(),
                    found: pattern.len(),
                });
            }
        }
    }

    if log::log_enabled!(target: targets::SYMBOLS, log::Level::Info) {
        if let (count, Some(input)) = matcher::uncovered_inputs(&operator.table, operator.arity()) {
            log::info!(target: targets::SYMBOLS, "Operator '{name}' has no entry for {count} input(s), e.g. {input:?}");
        }
    }

    symbols.operators.declare(name, operator.clone())?;

    Ok(Declaration::single(Namespace::Operator, name))
}

/// Resolves `identifier` to a built-in connective (ignoring case) or a declared custom operator.
pub fn resolve_operator(identifier: &str, symbols: &SymbolTables) -> Result<OperatorRef, ErrorKind> {
    if let Some(connective) = Connective::from_name(identifier) {
        return Ok(OperatorRef::Builtin(connective));
    }
    symbols.operators.resolve(identifier)?;
    Ok(OperatorRef::Custom(identifier.to_string()))
}

/// Declares an operator set.
///
/// Each identifier must resolve, and repeated operators are kept only at their first occurrence.
pub fn declare_opset(
    name: &str,
    identifiers: &[String],
    symbols: &mut SymbolTables,
) -> Result<Declaration, ErrorKind> {
    fresh(symbols, Namespace::Opset, name)?;

    let mut operators: Vec<OperatorRef> = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        let operator = resolve_operator(identifier, symbols)?;
        if !operators.contains(&operator) {
            operators.push(operator);
        }
    }

    symbols.opsets.declare(
        name,
        OperatorSet {
            name: name.to_string(),
            operators,
        },
    )?;

    Ok(Declaration::single(Namespace::Opset, name))
}
