//! A library for working with propositional formulas, truth tables, and the adequacy of sets of connectives.
//!
//! adequacy processes programs of statements which declare variables, formulas, valuations, custom operators (given by truth tables), and sets of operators, evaluate formulas, and check whether a set of operators is adequate (functionally complete).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config) and an optional method for recording [dispatches](crate::dispatch) from the statements processed.
//! Programs may be added through their [textual representation](crate::builder) or [programatically](crate::structures::program).
//!
//! Each statement of a program is processed in order, and each statement has a [result](crate::procedures::process::StatementResult).
//! A failing statement has no effect, and processing continues with the following statement (unless the context is configured to halt).
//!
//! Useful starting points, then, may be:
//! - The [symbol tables](crate::db), to inspect what is stored by declarations.
//! - The [matcher](crate::procedures::matcher), for the semantics of truth tables with wildcards and otherwise entries.
//! - The [adequacy checker](crate::procedures::adequacy), for Post's criterion.
//! - The [structures] to familiarise yourself with the elements of a program (expressions, tables, statements, etc.)
//!
//! # Examples
//!
//! + Evaluate a formula.
//!
//! ```rust
//! # use adequacy::config::Config;
//! # use adequacy::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let results = the_context
//!     .read_program(
//!         "
//!         DEFINE VARIABLE p, q;
//!         DEFINE FORMULA f = p AND q;
//!         DEFINE VALUATION v = { p: true, q: false };
//!         EVALUATE f WITH v;
//!         "
//!         .as_bytes(),
//!     )
//!     .unwrap();
//!
//! assert!(results.iter().all(|result| result.is_ok()));
//! assert_eq!(results[3].value(), Some(false));
//! ```
//!
//! + Check the adequacy of a custom operator, and of a set of built-in connectives.
//!
//! ```rust
//! # use adequacy::context::process_program;
//! # use adequacy::procedures::adequacy::PostProperty;
//! # use adequacy::structures::program::Program;
//! let program: Program = "
//!     DEFINE OPERATOR nand(a, b) = { (1, 1) -> 0, OTHERWISE -> 1 };
//!     DEFINE OPSET sheffer = { nand };
//!     DEFINE OPSET monotone = { AND, OR };
//!     ADEQUATE sheffer;
//!     ADEQUATE monotone;
//! "
//! .parse()
//! .unwrap();
//!
//! let results = process_program(&program);
//!
//! assert!(results[3].adequacy().unwrap().adequate);
//!
//! let report = results[4].adequacy().unwrap();
//! assert!(!report.adequate);
//! assert!(report.retained.contains(&PostProperty::Monotone));
//! ```
//!
//! + Statements which fail do not stop a program.
//!
//! ```rust
//! # use adequacy::context::process_program;
//! # use adequacy::structures::program::Program;
//! # use adequacy::types::err::ErrorKind;
//! let program: Program = "
//!     DEFINE VARIABLE p;
//!     DEFINE VARIABLE p;
//!     DEFINE FORMULA f = !p;
//! "
//! .parse()
//! .unwrap();
//!
//! let results = process_program(&program);
//!
//! assert!(matches!(results[1].error(), Some(ErrorKind::DuplicateDeclaration { .. })));
//! assert!(results[2].is_ok());
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with the CLI and the `log` feature:
//! - Logs related to [the symbol tables](crate::db) are found under the `symbols` target.
//! - Each lexeme read is logged under the `lexer` target, at the debug level, if [lexemes are traced](crate::config::Config::trace_lexemes).

#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod dispatch;

pub mod db;

pub mod misc;
