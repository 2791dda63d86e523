use std::path::Path;

use resolvent::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    FailedToOpen,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a problem is required."),
            Self::FailedToOpen => write!(f, "Failed to open problem file."),
            Self::ParseError(err) => write!(f, "Parse error: {err}."),
        }
    }
}

/// Reads the problem at `path` to `context`.
/// Results in [ParserInfo] on success and otherwise a [ReadError]
pub(super) fn read_problem(path: &Path, context: &mut Context) -> Result<ParserInfo, ReadError> {
    if path.as_os_str().is_empty() {
        return Err(ReadError::NoPath);
    }

    log::info!("Reading problem from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    match context.read_problem(std::io::BufReader::new(&file)) {
        Ok(info) => Ok(info),
        Err(e) => Err(ReadError::ParseError(e)),
    }
}
