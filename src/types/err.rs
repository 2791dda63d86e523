//! Error types used in the library.
//!
//! - Errors arise when reading or building a problem, never during saturation.
//! - Rejection of a clause by [admission](crate::db::clause::ClauseDB::admit) is *not* an error, and is reported through an [Admission](crate::db::clause::Admission) instead.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// A union of the error types of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "{e}"),
            Self::ClauseDB(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

impl std::fmt::Display for AtomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to add an empty clause as input.
    EmptyClause,

    /// Some attempt was made to add an empty goal, which has no negation.
    EmptyGoal,

    /// A key (or index) which does not identify a stored clause.
    InvalidKeyIndex,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause => write!(f, "an input clause has no literals"),
            Self::EmptyGoal => write!(f, "the goal has no literals"),
            Self::InvalidKeyIndex => write!(f, "no clause is stored at the given index"),
        }
    }
}

/// Errors when reading a problem.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some failure to read a line.
    Line(usize),

    /// A token which is not a literal: an empty atom, or a negation marker within an atom.
    MalformedLiteral { line: usize, token: String },

    /// A premise or goal line with no literals.
    EmptyClause { line: usize },

    /// There is no goal, as there are no lines.
    EmptyGoal,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::MalformedLiteral { line, token } => {
                write!(f, "malformed literal '{token}' on line {line}")
            }
            Self::EmptyClause { line } => write!(f, "line {line} has no literals"),
            Self::EmptyGoal => write!(f, "no goal was found"),
        }
    }
}
