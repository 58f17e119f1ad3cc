/*!
Dispatches for external observers.

Dispatches are the reporting sink of a context: each declaration and the result of each statement may be sent, as it happens, to a callback supplied to the context.

- [Deltas](crate::dispatch::library::delta), on some change to the symbol tables.
  - For example, the declaration of a formula.
- [Reports](crate::dispatch::library::report), on the result of some statement.
  - For example, the value of a formula under some valuation, or the reason a statement failed.

The runtime overhead of unused dispatches is low (a check on an optional), and results are returned from [process_program](crate::context::Context::process_program) regardless.

# Example

Counting the adequate opsets of a program.

```rust
# use std::{cell::Cell, rc::Rc};
# use adequacy::config::Config;
# use adequacy::context::Context;
# use adequacy::dispatch::{library::report::Report, Dispatch};
# use adequacy::procedures::process::Outcome;
let count = Rc::new(Cell::new(0));
let counter = count.clone();

let mut the_context = Context::from_config(Config::default());
the_context.set_dispatcher(Rc::new(move |dispatch: Dispatch| {
    if let Dispatch::Report(Report::Statement(result)) = dispatch {
        if let Ok(Outcome::Adequacy(report)) = &result.outcome {
            if report.adequate {
                counter.set(counter.get() + 1);
            }
        }
    }
}));

let program = "
    DEFINE OPSET a = { NOT, AND };
    DEFINE OPSET b = { AND, OR };
    ADEQUATE a;
    ADEQUATE b;
";
assert!(the_context.read_program(program.as_bytes()).is_ok());
assert_eq!(count.get(), 1);
```
*/

pub mod library;

use library::{delta::Delta, report::Report};

/// Dispatch types.
#[derive(Clone, Debug)]
pub enum Dispatch {
    /// A change to the symbol tables.
    Delta(Delta),

    /// A report. E.g. the result of a statement.
    Report(Report),
}

/// A callback to receive dispatches.
pub type Dispatcher = dyn Fn(Dispatch);
