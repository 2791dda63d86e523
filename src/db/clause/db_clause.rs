use std::ops::Deref;

use crate::{
    db::ClauseKey,
    structures::clause::{CClause, Provenance, SearchSet},
};

/// A clause together with metadata used by the database and during saturation.
///
/// A [DBClause] dereferences to the literals of the clause, without repetition, in the order given on admission.
pub struct DBClause {
    /// The key of the clause.
    key: ClauseKey,

    /// The literals of the clause, in order.
    clause: CClause,

    /// The literals of the clause as a set.
    search: SearchSet,

    /// How the clause was obtained.
    provenance: Provenance,
}

impl DBClause {
    pub(super) fn new(
        key: ClauseKey,
        clause: CClause,
        search: SearchSet,
        provenance: Provenance,
    ) -> Self {
        DBClause {
            key,
            clause,
            search,
            provenance,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause, in order.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The literals of the clause as a set.
    pub fn search(&self) -> &SearchSet {
        &self.search
    }

    /// The provenance of the clause.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}

impl Deref for DBClause {
    type Target = CClause;

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}
