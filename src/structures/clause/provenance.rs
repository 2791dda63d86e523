use crate::db::ClauseKey;

/// The provenance of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// A clause given as input, either a premise or a negated goal literal.
    Original,

    /// A clause derived by resolution.
    Resolution {
        /// The clause at the outer cursor of saturation when the resolvent was derived.
        cursor: ClauseKey,

        /// The clause stored before the cursor clause.
        earlier: ClauseKey,
    },
}

impl Provenance {
    /// The parents of the clause, if derived.
    pub fn parents(&self) -> Option<(ClauseKey, ClauseKey)> {
        match self {
            Self::Original => None,
            Self::Resolution { cursor, earlier } => Some((*cursor, *earlier)),
        }
    }
}

/// `{}` for an original clause and `{p,q}` for a resolvent, with 1-based indices.
impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "{{}}"),
            Self::Resolution { cursor, earlier } => write!(f, "{{{cursor},{earlier}}}"),
        }
    }
}
