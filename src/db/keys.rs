//! Keys to access clauses stored in the [clause database](crate::db::clause).

/// The key of a clause in the clause database.
///
/// Internally a key is the offset of the clause in the database.
/// Externally, e.g. when writing a proof trace, the key is written as its [index](ClauseKey::index), which begins at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseKey(usize);

impl ClauseKey {
    /// The key of the clause at some offset in the database.
    pub(crate) fn from_offset(offset: usize) -> Self {
        ClauseKey(offset)
    }

    /// The offset of the clause in the database.
    pub fn offset(&self) -> usize {
        self.0
    }

    /// The external index of the clause, beginning at 1.
    pub fn index(&self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
