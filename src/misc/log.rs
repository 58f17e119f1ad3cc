/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when writing programs and when extending the library.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [lexemes](crate::builder::grammar), including whitespace and comments when traced
    pub const LEXER: &str = "lexer";

    /// Logs related to [parsing](crate::builder::grammar)
    pub const PARSER: &str = "parser";

    /// Logs related to the [symbol tables](crate::db)
    pub const SYMBOLS: &str = "symbols";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [truth table matching](crate::procedures::matcher)
    pub const MATCHER: &str = "matcher";

    /// Logs related to [adequacy](crate::procedures::adequacy)
    pub const ADEQUACY: &str = "adequacy";

    /// Logs related to [processing a program](crate::procedures::process)
    pub const PROGRAM: &str = "program";
}
