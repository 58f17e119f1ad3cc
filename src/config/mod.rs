/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each option is a [ConfigOption], which notes the bounds of the option alongside the value.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The largest arity permitted for a custom operator.
///
/// The full function of an operator has 2^arity rows, and so this bounds the work of an adequacy check.
pub const ARITY_CEILING: usize = 24;

/// The largest value permitted for [max_expression_depth](Config::max_expression_depth).
///
/// Parsing, evaluation, and printing of an expression recurse on its structure, and so this bounds the stack used.
pub const EXPRESSION_DEPTH_CEILING: usize = 1024;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Stop processing a program after the first statement which fails.
    pub halt_on_error: ConfigOption<bool>,

    /// The largest arity a custom operator may be declared with.
    pub max_operator_arity: ConfigOption<usize>,

    /// The deepest expression accepted, when parsed and when declared as a formula (with formula references expanded).
    pub max_expression_depth: ConfigOption<usize>,

    /// Log every lexeme read, including whitespace and comments.
    pub trace_lexemes: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            halt_on_error: ConfigOption {
                name: "halt_on_error",
                min: false,
                max: true,
                value: false,
            },

            max_operator_arity: ConfigOption {
                name: "max_operator_arity",
                min: 0,
                max: ARITY_CEILING,
                value: 16,
            },

            max_expression_depth: ConfigOption {
                name: "max_expression_depth",
                min: 1,
                max: EXPRESSION_DEPTH_CEILING,
                value: 256,
            },

            trace_lexemes: ConfigOption {
                name: "trace_lexemes",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
