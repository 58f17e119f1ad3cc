use std::{
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use adequacy::{
    builder::parse_program,
    config::Config,
    structures::program::Program,
    types::err::ParseError,
};

pub enum ReadError {
    FailedToOpen(PathBuf),
    FailedToRead(Option<PathBuf>),
    Parse(Option<PathBuf>, ParseError),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open {path:?}."),
            Self::FailedToRead(Some(path)) => write!(f, "Failed to read {path:?}."),
            Self::FailedToRead(None) => write!(f, "Failed to read standard input."),
            Self::Parse(Some(path), e) => write!(f, "{}:{e}", path.display()),
            Self::Parse(None, e) => write!(f, "<stdin>:{e}"),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ReadError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen(path.to_owned())),
    };

    let mut source = String::default();
    match BufReader::new(file).read_to_string(&mut source) {
        Ok(_) => Ok(source),
        Err(_) => Err(ReadError::FailedToRead(Some(path.to_owned()))),
    }
}

/// Reads and parses each file of `paths`, in order, to a single program.
/// If `paths` is empty, the program is read from standard input.
///
/// Nothing is returned if any file fails to be read or parsed.
pub fn read_programs(paths: &[PathBuf], config: &Config) -> Result<Program, ReadError> {
    if paths.is_empty() {
        let mut source = String::default();
        if std::io::stdin().lock().read_to_string(&mut source).is_err() {
            return Err(ReadError::FailedToRead(None));
        }
        return parse_program(&source, config).map_err(|e| ReadError::Parse(None, e));
    }

    let mut program = Program::default();
    for path in paths {
        let source = read_file(path)?;
        match parse_program(&source, config) {
            Ok(part) => program.extend(part),
            Err(e) => return Err(ReadError::Parse(Some(path.clone()), e)),
        }
    }
    Ok(program)
}
