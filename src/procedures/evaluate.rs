/*!
Evaluation of an expression to a truth value, given a valuation and the symbol tables.

Evaluation is structural recursion on the expression, and is pure: neither the expression, the valuation, nor the symbol tables are mutated, and so the same inputs always give the same value.

- A variable takes its value from the valuation, and a variable without a value is an [UnboundVariable](ErrorKind::UnboundVariable) error.
- Negations and binary expressions are evaluated by the [connective](crate::structures::connective) of the expression.
- A formula reference is evaluated by evaluating the expression of the formula under the *same* valuation.
  There is no renaming of variables, so the variables of the referenced formula must be valued by the valuation.
- An operator application evaluates each argument, left to right, and [matches](crate::procedures::matcher) the resulting input against the truth table of the operator.

The first error found is returned, and no partial result is kept.

```rust
# use adequacy::db::symbols::SymbolTables;
# use adequacy::procedures::evaluate::evaluate;
# use adequacy::structures::{expression::Expression, valuation::Valuation};
let symbols = SymbolTables::default();
let v = Valuation::new("v", vec![("p".to_string(), true), ("q".to_string(), false)]);

let e = Expression::implies(Expression::variable("p"), Expression::variable("q"));
assert_eq!(evaluate(&e, &v, &symbols), Ok(false));
```
*/

use crate::{
    db::symbols::SymbolTables,
    misc::log::targets,
    procedures::matcher,
    structures::{
        connective::TruthValue,
        expression::{CustomApplication, Expression},
        valuation::Valuation,
    },
    types::err::ErrorKind,
};

/// The value of `expression` under `valuation`, with formulas and operators resolved through `symbols`.
pub fn evaluate(
    expression: &Expression,
    valuation: &Valuation,
    symbols: &SymbolTables,
) -> Result<TruthValue, ErrorKind> {
    match expression {
        Expression::Variable(variable) => {
            valuation
                .value_of(variable)
                .ok_or_else(|| ErrorKind::UnboundVariable {
                    variable: variable.clone(),
                })
        }

        Expression::Negation(e) => Ok(!evaluate(e, valuation, symbols)?),

        Expression::BinaryOp {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, valuation, symbols)?;
            let right = evaluate(right, valuation, symbols)?;
            Ok(operator.apply(left, right))
        }

        Expression::Custom(CustomApplication::Formula(name)) => {
            let formula = symbols.formulas.resolve(name)?;
            log::trace!(target: targets::EVALUATION, "Evaluating formula '{name}'");
            evaluate(&formula.expression, valuation, symbols)
        }

        Expression::Custom(CustomApplication::Operator { name, arguments }) => {
            let operator = symbols.operators.resolve(name)?;

            if arguments.len() != operator.arity() {
                return Err(ErrorKind::ArityMismatch {
                    operator: name.clone(),
                    expected: operator.arity(),
                    found: arguments.len(),
                });
            }

            let input = arguments
                .iter()
                .map(|argument| evaluate(argument, valuation, symbols))
                .collect::<Result<Vec<_>, _>>()?;

            let value = matcher::value_of(&operator.table, &input).map_err(|e| e.for_operator(name))?;
            log::trace!(target: targets::EVALUATION, "{name}{input:?} = {value}");
            Ok(value)
        }
    }
}
