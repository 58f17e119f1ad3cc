#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::rc::Rc;

use clap::Parser;

use adequacy::{
    context::Context,
    dispatch::{library::report::Report, Dispatch},
};

mod args;
mod output;
mod read;

use args::{Args, Format};
use output::TextWriter;

/// Every statement succeeded.
const EXIT_OK: i32 = 0;
/// Some statement failed.
const EXIT_STATEMENT_FAILED: i32 = 1;
/// Some input could not be read or parsed, or the arguments were invalid.
const EXIT_INPUT: i32 = 2;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        std::process::exit(EXIT_OK);
    }

    #[cfg(feature = "log")]
    init_logging(args.verbose);

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_INPUT);
        }
    };

    let program = match read::read_programs(&args.paths, &config) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_INPUT);
        }
    };

    let mut the_context = Context::from_config(config);

    // Text is written as each statement is processed, while JSON is written once all statements are processed.
    if args.format == Format::Text {
        let writer = TextWriter {
            colour: !args.no_colour,
        };
        the_context.set_dispatcher(Rc::new(move |dispatch: Dispatch| match dispatch {
            Dispatch::Report(Report::Statement(result)) => println!("{}", writer.line(&result)),
            Dispatch::Report(Report::Halted(index)) => {
                println!("Halted after statement {index}")
            }
            Dispatch::Report(Report::Finish) | Dispatch::Delta(_) => {}
        }));
    }

    let results = the_context.process_program(&program);

    if args.format == Format::Json {
        match output::json(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to write results: {e}");
                std::process::exit(EXIT_INPUT);
            }
        }
    }

    match results.iter().any(|result| result.is_err()) {
        true => std::process::exit(EXIT_STATEMENT_FAILED),
        false => std::process::exit(EXIT_OK),
    }
}

/// Installs a logger writing to stderr, with a level from the count of verbose flags.
#[cfg(feature = "log")]
fn init_logging(verbosity: u8) {
    use log::LevelFilter;
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} [{t}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to initialise logs: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logs: {e}"),
    }
}
