/*!
The context --- within which declarations are made, and formulas evaluated, etc.

A context owns a [configuration](crate::config), the [symbol tables](crate::db::symbols::SymbolTables) filled by declarations, and optionally a [dispatcher](crate::dispatch) to which results are sent.

Statements are given indices in the order they are processed by the context.
So, if a context processes two programs the indices of the second program continue from the first.

# Example
```rust
# use adequacy::config::Config;
# use adequacy::context::Context;
let mut the_context = Context::from_config(Config::default());

let program = "
    DEFINE VARIABLE p, q;
    DEFINE FORMULA f = p AND q;
    DEFINE VALUATION v = { p: true, q: false };
    EVALUATE f WITH v;
";

let results = the_context.read_program(program.as_bytes()).unwrap();
assert_eq!(results[3].value(), Some(false));

assert_eq!(the_context.evaluate("f", "v"), Ok(false));
```
*/

mod counters;
pub use counters::Counters;

use std::{io::BufRead, rc::Rc};

use crate::{
    builder,
    config::Config,
    db::symbols::SymbolTables,
    dispatch::{
        library::{delta::Delta, report::Report},
        Dispatch, Dispatcher,
    },
    misc::log::targets,
    procedures::{
        adequacy::AdequacyReport,
        declare, evaluate,
        process::{self, Outcome, StatementResult},
    },
    structures::{
        connective::TruthValue,
        expression::Expression,
        program::{Program, Statement},
    },
    types::err::ErrorKind,
};

pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the statements processed.
    pub counters: Counters,

    /// The symbol tables.
    /// See [db](crate::db) for details.
    pub symbols: SymbolTables,

    /// A callback for dispatches, if some callback was set.
    dispatcher: Option<Rc<Dispatcher>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            symbols: SymbolTables::default(),
            dispatcher: None,
        }
    }

    /// Sets the callback to which dispatches are sent.
    pub fn set_dispatcher(&mut self, dispatcher: Rc<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    fn dispatch(&self, dispatch: Dispatch) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(dispatch);
        }
    }

    /// Processes a single statement, with the next index of the context.
    pub fn process_statement(&mut self, statement: &Statement) -> StatementResult {
        let index = self.counters.statements;
        self.counters.statements += 1;

        let outcome = process::process_statement(statement, &mut self.symbols, &self.config);

        match &outcome {
            Ok(Outcome::Declared(declaration)) => {
                if self.dispatcher.is_some() {
                    for name in &declaration.names {
                        self.dispatch(Dispatch::Delta(Delta::Declared {
                            index,
                            namespace: declaration.namespace,
                            name: name.clone(),
                        }));
                    }
                }
            }
            Ok(Outcome::Evaluated { .. }) => self.counters.evaluations += 1,
            Ok(Outcome::Adequacy(_)) => self.counters.adequacy_checks += 1,
            Err(e) => {
                self.counters.failures += 1;
                log::warn!(target: targets::PROGRAM, "Statement {index} ({}) failed: {e}", statement.kind());
            }
        }

        let result = StatementResult {
            index,
            kind: statement.kind(),
            outcome,
        };

        if self.dispatcher.is_some() {
            self.dispatch(Dispatch::Report(Report::Statement(result.clone())));
        }

        result
    }

    /// Processes each statement of `program`, in order, and returns the result of each statement processed.
    ///
    /// If the context is configured to [halt on error](Config::halt_on_error) no statement after the first failing statement is processed.
    pub fn process_program(&mut self, program: &Program) -> Vec<StatementResult> {
        let mut results = Vec::with_capacity(program.len());

        for statement in &program.statements {
            let result = self.process_statement(statement);
            let failed = result.is_err();
            let index = result.index;
            results.push(result);

            if failed && self.config.halt_on_error.value {
                log::info!(target: targets::PROGRAM, "Halting after statement {index}");
                self.dispatch(Dispatch::Report(Report::Halted(index)));
                break;
            }
        }

        self.dispatch(Dispatch::Report(Report::Finish));
        results
    }

    /// Parses a program from `reader` and processes the program.
    ///
    /// An error is returned only if the program could not be read or parsed, in which case no statement is processed.
    pub fn read_program(
        &mut self,
        reader: impl BufRead,
    ) -> Result<Vec<StatementResult>, ErrorKind> {
        let program = builder::read_program(reader, &self.config)?;
        Ok(self.process_program(&program))
    }

    /// The value of the formula named `formula` under the valuation named `valuation`.
    pub fn evaluate(&self, formula: &str, valuation: &str) -> Result<TruthValue, ErrorKind> {
        process::evaluate_named(formula, valuation, &self.symbols)
    }

    /// The value of `expression` under the valuation named `valuation`.
    ///
    /// The expression need not be declared, though anything the expression refers to must be, and the expression is held to the same [depth limit](Config::max_expression_depth) as a declared formula.
    pub fn evaluate_expression(
        &self,
        expression: &Expression,
        valuation: &str,
    ) -> Result<TruthValue, ErrorKind> {
        let valuation = self.symbols.valuations.resolve(valuation)?;
        declare::check_depth(expression, &self.symbols, &self.config)?;
        evaluate::evaluate(expression, valuation, &self.symbols)
    }

    /// Checks the adequacy of the opset named `opset`.
    pub fn check_adequacy(&self, opset: &str) -> Result<AdequacyReport, ErrorKind> {
        process::check_adequacy_named(opset, &self.symbols)
    }
}

/// Processes `program` in a fresh context with the default configuration.
pub fn process_program(program: &Program) -> Vec<StatementResult> {
    Context::default().process_program(program)
}
