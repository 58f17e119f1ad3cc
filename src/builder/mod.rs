/*!
Tools for building a program from text.

Text is parsed by a [grammar](grammar) to a [Program], which may then be processed by a [context](crate::context).

# Syntax

Each statement ends with a `;`, and keywords may be written in any case.

```text
DEFINE VARIABLE p, q;
DEFINE FORMULA f = p AND (q -> !p);
DEFINE VALUATION v = { p: true, q: false };
DEFINE OPERATOR nand(a, b) = { (1, 1) -> 0, OTHERWISE -> 1 };
DEFINE OPSET s = { nand };
EVALUATE f WITH v;
ADEQUATE s;
```

Within the table of an operator each entry is either a pattern of cells (`1`, `0`, `true`, `false`, or the wildcard `_`) or `OTHERWISE`, and each entry maps to a truth value.
Entries are matched in order, and the first matching entry gives the value.

Within an expression `@f` refers to the formula named `f`, and `op(e1, …, en)` applies the custom operator `op`.

Comments are either `// …` to the end of a line, or `/* … */`.

Expressions may nest no deeper than [max_expression_depth](crate::config::Config::max_expression_depth).

# Example

```rust
# use adequacy::builder::parse_program;
# use adequacy::config::Config;
# use adequacy::structures::program::StatementKind;
let program = parse_program("
    DEFINE VARIABLE p, q; // some variables
    EVALUATE f WITH v;
", &Config::default()).unwrap();

assert_eq!(program.len(), 2);
assert_eq!(program.statements[1].kind(), StatementKind::Evaluate);
```
*/

pub mod grammar;

use std::io::BufRead;

use crate::{
    config::Config,
    misc::log::targets,
    structures::program::Program,
    types::err::{self, ErrorKind},
};

/// Parses `source` to a program.
pub fn parse_program(source: &str, config: &Config) -> Result<Program, err::ParseError> {
    let grammar = grammar::Grammar::new(source, config);
    let program = match grammar.program(source) {
        Ok((_, program)) => program,
        Err(e) => return Err(grammar.parse_error(e)),
    };
    log::info!(target: targets::PARSER, "Parsed {} statements", program.len());

    Ok(program)
}

/// Reads a program from `reader`.
///
/// ```rust
/// # use adequacy::builder::read_program;
/// # use adequacy::config::Config;
/// let text = b"ADEQUATE s;";
/// assert!(read_program(text.as_slice(), &Config::default()).is_ok());
/// ```
pub fn read_program(mut reader: impl BufRead, config: &Config) -> Result<Program, ErrorKind> {
    let mut buffer = String::default();
    if reader.read_to_string(&mut buffer).is_err() {
        return Err(ErrorKind::from(err::ParseError::Read));
    }

    Ok(parse_program(&buffer, config)?)
}

impl std::str::FromStr for Program {
    type Err = err::ParseError;

    /// Parses a program with the default configuration.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_program(source, &Config::default())
    }
}
