use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use adequacy::config::Config;

/// Processes programs of propositional declarations, evaluations, and adequacy checks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Program files, processed in order within a single context.
    /// If no file is given a program is read from standard input.
    pub paths: Vec<PathBuf>,

    /// Stop after the first statement which fails.
    #[arg(long)]
    pub halt_on_error: bool,

    /// The largest arity a custom operator may be declared with.
    #[arg(long, value_name = "N")]
    pub max_arity: Option<usize>,

    /// The deepest expression accepted, with formula references expanded.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Log every lexeme read (requires the log feature).
    #[arg(long)]
    pub trace_lexemes: bool,

    /// The format of results.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write results without colour.
    #[arg(long)]
    pub no_colour: bool,

    /// Increase the level of logs written to stderr (requires the log feature).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print this reference as markdown and exit.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A line for each statement.
    Text,

    /// An array of statement results.
    Json,
}

pub enum ConfigError {
    OutOfBounds {
        option: &'static str,
        min: usize,
        max: usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::OutOfBounds { option, min, max } => {
                write!(f, "{option} requires a value between {min} and {max}")
            }
        }
    }
}

impl Args {
    /// The library configuration requested by the arguments.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        config.halt_on_error.value = self.halt_on_error;
        config.trace_lexemes.value = self.trace_lexemes;

        if let Some(arity) = self.max_arity {
            if let Err((min, max)) = config.max_operator_arity.set(arity) {
                return Err(ConfigError::OutOfBounds {
                    option: config.max_operator_arity.name,
                    min,
                    max,
                });
            }
        }

        if let Some(depth) = self.max_depth {
            if let Err((min, max)) = config.max_expression_depth.set(depth) {
                return Err(ConfigError::OutOfBounds {
                    option: config.max_expression_depth.name,
                    min,
                    max,
                });
            }
        }

        Ok(config)
    }
}
