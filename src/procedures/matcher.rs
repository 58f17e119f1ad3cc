/*!
Matching an input against a truth table.

Entries are tried strictly in declaration order, and the value of the first matching entry is the value of the table on the input.

- A [pattern entry](TruthTableEntry::Pattern) matches an input if each cell of the pattern is either a wildcard or equal to the value at the same position of the input.
- An [otherwise entry](TruthTableEntry::Otherwise) matches any input. As entries are tried in order, an otherwise entry only applies when no earlier entry matched, and of multiple otherwise entries only the first is ever used.

If no entry matches, the table is not total and a [NoMatchingEntry](TruthTableError::NoMatchingEntry) error is returned.

Matching is an ordered scan, and is not optimised into a decision tree, as the result depends on the order of entries whenever entries overlap.

```rust
# use adequacy::procedures::matcher::value_of;
# use adequacy::structures::truth_table::{PatternValue::*, TruthTable, TruthTableEntry};
let table = TruthTable::new(vec![
    TruthTableEntry::Pattern { pattern: vec![True, Wildcard], value: false },
    TruthTableEntry::Pattern { pattern: vec![Wildcard, True], value: true },
]);
// Both entries match, the first is used.
assert_eq!(value_of(&table, &[true, true]), Ok(false));
assert_eq!(value_of(&table, &[false, true]), Ok(true));
assert!(value_of(&table, &[false, false]).is_err());
```
*/

use crate::{
    misc::log::targets,
    structures::{
        boolean_function::BooleanFunction,
        connective::TruthValue,
        truth_table::{PatternValue, TruthTable, TruthTableEntry},
    },
    types::err::TruthTableError,
};

/// Whether `pattern` matches `input`.
///
/// A pattern never matches an input of a different length.
pub fn pattern_matches(pattern: &[PatternValue], input: &[TruthValue]) -> bool {
    pattern.len() == input.len()
        && pattern
            .iter()
            .zip(input)
            .all(|(cell, value)| cell.matches(*value))
}

/// The index and value of the first entry of `table` to match `input`, if some entry matches.
pub fn first_match(table: &TruthTable, input: &[TruthValue]) -> Option<(usize, TruthValue)> {
    table
        .entries()
        .iter()
        .enumerate()
        .find(|(_, entry)| match entry {
            TruthTableEntry::Pattern { pattern, .. } => pattern_matches(pattern, input),
            TruthTableEntry::Otherwise(_) => true,
        })
        .map(|(index, entry)| (index, entry.value()))
}

/// The value of `table` on `input`.
pub fn value_of(table: &TruthTable, input: &[TruthValue]) -> Result<TruthValue, TruthTableError> {
    match first_match(table, input) {
        Some((index, value)) => {
            log::trace!(target: targets::MATCHER, "{input:?} matched entry {index} with value {value}");
            Ok(value)
        }
        None => {
            log::trace!(target: targets::MATCHER, "{input:?} matched no entry");
            Err(TruthTableError::NoMatchingEntry(input.to_vec()))
        }
    }
}

/// The function of `table`, taken as a table of an operator of the given arity.
pub fn function_of(table: &TruthTable, arity: usize) -> Result<BooleanFunction, TruthTableError> {
    BooleanFunction::try_from_fn(arity, |input| value_of(table, input))
}

/// The count of inputs of the given arity which no entry of `table` matches, with the first such input in row order.
///
/// Rows are visited through a single input buffer, and only the first uncovered input is kept.
pub fn uncovered_inputs(table: &TruthTable, arity: usize) -> (usize, Option<Vec<TruthValue>>) {
    if table.has_otherwise() {
        return (0, None);
    }

    let mut input = vec![false; arity];
    let mut count = 0;
    let mut first = None;
    for row in 0..(1_usize << arity) {
        for (k, cell) in input.iter_mut().enumerate() {
            *cell = (row >> k) & 1 == 1;
        }
        if first_match(table, &input).is_none() {
            count += 1;
            if first.is_none() {
                first = Some(input.clone());
            }
        }
    }
    (count, first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::truth_table::PatternValue::*;

    use rand::{Rng, SeedableRng};

    fn pattern(pattern: Vec<PatternValue>, value: bool) -> TruthTableEntry {
        TruthTableEntry::Pattern { pattern, value }
    }

    #[test]
    fn earlier_pattern_wins_over_wildcard() {
        let specific_first = TruthTable::new(vec![
            pattern(vec![True, True], false),
            pattern(vec![Wildcard, Wildcard], true),
        ]);
        assert_eq!(value_of(&specific_first, &[true, true]), Ok(false));
        assert_eq!(value_of(&specific_first, &[true, false]), Ok(true));

        let wildcard_first = TruthTable::new(vec![
            pattern(vec![Wildcard, Wildcard], true),
            pattern(vec![True, True], false),
        ]);
        assert_eq!(value_of(&wildcard_first, &[true, true]), Ok(true));
        assert_eq!(first_match(&wildcard_first, &[true, true]), Some((0, true)));
    }

    #[test]
    fn otherwise_only_when_reached() {
        let table = TruthTable::new(vec![
            pattern(vec![False], true),
            TruthTableEntry::Otherwise(false),
            pattern(vec![True], true),
        ]);
        assert_eq!(value_of(&table, &[false]), Ok(true));
        // The otherwise entry precedes the pattern for true.
        assert_eq!(value_of(&table, &[true]), Ok(false));
    }

    #[test]
    fn first_otherwise_wins() {
        let table = TruthTable::new(vec![
            TruthTableEntry::Otherwise(true),
            TruthTableEntry::Otherwise(false),
        ]);
        assert_eq!(value_of(&table, &[false, true, false]), Ok(true));
    }

    #[test]
    fn non_total_table() {
        let table = TruthTable::new(vec![
            pattern(vec![False, Wildcard], false),
            pattern(vec![True, True], true),
        ]);
        assert_eq!(value_of(&table, &[false, false]), Ok(false));
        assert_eq!(value_of(&table, &[false, true]), Ok(false));
        assert_eq!(value_of(&table, &[true, true]), Ok(true));
        assert_eq!(
            value_of(&table, &[true, false]),
            Err(TruthTableError::NoMatchingEntry(vec![true, false]))
        );
        assert_eq!(uncovered_inputs(&table, 2), (1, Some(vec![true, false])));
        assert_eq!(
            function_of(&table, 2),
            Err(TruthTableError::NoMatchingEntry(vec![true, false]))
        );
    }

    #[test]
    fn uncovered_counts() {
        let table = TruthTable::new(vec![pattern(vec![True, Wildcard, Wildcard], true)]);
        assert_eq!(uncovered_inputs(&table, 3), (4, Some(vec![false, false, false])));

        let empty = TruthTable::default();
        assert_eq!(uncovered_inputs(&empty, 0), (1, Some(vec![])));

        let total = TruthTable::new(vec![TruthTableEntry::Otherwise(false)]);
        assert_eq!(uncovered_inputs(&total, 3), (0, None));
    }

    #[test]
    fn length_mismatch_never_matches() {
        assert!(!pattern_matches(&[Wildcard], &[true, true]));
        assert!(pattern_matches(&[], &[]));
    }

    #[test]
    fn nand_function() {
        let table = TruthTable::new(vec![
            TruthTableEntry::row(&[false, false], true),
            TruthTableEntry::row(&[false, true], true),
            TruthTableEntry::row(&[true, false], true),
            TruthTableEntry::row(&[true, true], false),
        ]);
        let nand = function_of(&table, 2).unwrap();
        assert_eq!(nand.outputs(), &[true, true, true, false]);
    }

    // The matcher agrees with a direct scan for the first match on random tables.
    #[test]
    fn first_match_law() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        let cells = [True, False, Wildcard];

        for _ in 0..200 {
            let arity = rng.gen_range(0..4);
            let entries = (0..rng.gen_range(0..6))
                .map(|_| {
                    let row_cells = (0..arity)
                        .map(|_| cells[rng.gen_range(0..cells.len())])
                        .collect();
                    pattern(row_cells, rng.gen_bool(0.5))
                })
                .collect::<Vec<_>>();
            let table = TruthTable::new(entries.clone());

            for row in 0..(1_usize << arity) {
                let input = (0..arity).map(|k| (row >> k) & 1 == 1).collect::<Vec<_>>();

                let mut expected = None;
                for entry in &entries {
                    if let TruthTableEntry::Pattern { pattern, value } = entry {
                        if pattern.iter().zip(&input).all(|(c, v)| match c {
                            True => *v,
                            False => !*v,
                            Wildcard => true,
                        }) {
                            expected = Some(*value);
                            break;
                        }
                    }
                }

                assert_eq!(value_of(&table, &input).ok(), expected);
            }
        }
    }
}
