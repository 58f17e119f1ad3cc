/*!
The procedures of the library.

- [matcher] determines the value of a truth table on some input.
- [evaluate] reduces an expression to a truth value, given a valuation.
- [adequacy] decides whether an operator set is functionally complete.
- [declare] checks and enters declarations into the symbol tables.
- [process] processes statements, in terms of the above.
*/

pub mod adequacy;
pub mod declare;
pub mod evaluate;
pub mod matcher;
pub mod process;
