/*!
The abstract elements of a program and their representation.

- [Truth values and connectives](connective).
- [Expressions](expression), trees in which each node owns its children.
- [Truth tables](truth_table), ordered lists of pattern entries with an optional default.
- [Custom operators](operator), and operator sets.
- [Valuations](valuation).
- [Statements and programs](program).
- [Boolean functions](boolean_function), the full table of some operator, used when checking adequacy.

All structures are immutable once declared, and live for the remainder of a context.
*/

pub mod boolean_function;
pub mod connective;
pub mod expression;
pub mod operator;
pub mod program;
pub mod truth_table;
pub mod valuation;
