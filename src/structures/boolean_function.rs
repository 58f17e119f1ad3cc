/*!
Boolean functions, as a complete table of outputs.

The function of an *n*-ary operator is stored as 2^*n* outputs, where the output at row *i* is the value of the function when argument *k* has the value of bit *k* of *i*.
So, for example, row 0 is the input of all false values and row 2^*n* - 1 is the input of all true values, and complementing each argument is an exclusive or of the row with 2^*n* - 1.

```rust
# use adequacy::structures::{boolean_function::BooleanFunction, connective::Connective};
let implies = BooleanFunction::from_connective(Connective::Implies);
// Row 1 has the first argument true and the second false.
assert_eq!(implies.value(1), Some(false));
assert_eq!(implies.input(1), vec![true, false]);
```
*/

use super::connective::{BinaryOperator, Connective, TruthValue};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanFunction {
    arity: usize,
    outputs: Vec<TruthValue>,
}

impl BooleanFunction {
    /// Builds a function by calling `f` on each input, in row order, stopping at the first error.
    pub fn try_from_fn<E>(
        arity: usize,
        mut f: impl FnMut(&[TruthValue]) -> Result<TruthValue, E>,
    ) -> Result<Self, E> {
        let rows = 1_usize << arity;
        let mut input = vec![false; arity];
        let mut outputs = Vec::with_capacity(rows);

        for row in 0..rows {
            for (k, cell) in input.iter_mut().enumerate() {
                *cell = (row >> k) & 1 == 1;
            }
            outputs.push(f(&input)?);
        }

        Ok(Self { arity, outputs })
    }

    /// The function of a built-in connective.
    pub fn from_connective(connective: Connective) -> Self {
        match connective {
            Connective::Not => Self {
                arity: 1,
                outputs: vec![true, false],
            },
            Connective::And => Self::from_binary(BinaryOperator::And),
            Connective::Or => Self::from_binary(BinaryOperator::Or),
            Connective::Implies => Self::from_binary(BinaryOperator::Implies),
            Connective::Iff => Self::from_binary(BinaryOperator::Iff),
        }
    }

    fn from_binary(operator: BinaryOperator) -> Self {
        Self {
            arity: 2,
            outputs: (0..4_usize)
                .map(|row| operator.apply(row & 1 == 1, row & 2 == 2))
                .collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The count of rows, i.e. 2^arity.
    pub fn rows(&self) -> usize {
        self.outputs.len()
    }

    /// The output at `row`, if `row` is a row of the function.
    pub fn value(&self, row: usize) -> Option<TruthValue> {
        self.outputs.get(row).copied()
    }

    pub fn outputs(&self) -> &[TruthValue] {
        &self.outputs
    }

    /// The input at `row`.
    pub fn input(&self, row: usize) -> Vec<TruthValue> {
        (0..self.arity).map(|k| (row >> k) & 1 == 1).collect()
    }

    /// The row whose input is the complement of the input at `row`.
    pub fn complement_row(&self, row: usize) -> usize {
        row ^ (self.rows() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectives_match_apply() {
        for connective in Connective::ALL {
            let function = BooleanFunction::from_connective(connective);
            assert_eq!(function.arity(), connective.arity());
            for row in 0..function.rows() {
                let input = function.input(row);
                assert_eq!(function.value(row), connective.apply(&input));
            }
        }
    }

    #[test]
    fn nullary() {
        let function = BooleanFunction::try_from_fn::<()>(0, |_| Ok(true)).unwrap();
        assert_eq!(function.rows(), 1);
        assert_eq!(function.complement_row(0), 0);
        assert!(function.input(0).is_empty());
    }

    #[test]
    fn stops_on_error() {
        let mut calls = 0;
        let result = BooleanFunction::try_from_fn(3, |input| {
            calls += 1;
            match input {
                [true, true, _] => Err(input.to_vec()),
                _ => Ok(false),
            }
        });
        assert_eq!(result, Err(vec![true, true, false]));
        assert_eq!(calls, 4);
    }
}
