//! Admission of clauses to the database.
//!
//! Admission is the only way to store a clause, and checks a candidate clause in order:
//! 1. If some stored clause has the same [signature](crate::structures::clause::Signature) as the candidate, the candidate is a duplicate.
//! 2. If the candidate contains some literal and the negation of that literal, the candidate is a tautology.
//! 3. Otherwise, the candidate is stored with repeated literals removed.
//!
//! Duplicates and tautologies are rejected silently, and the database is unchanged.
//! Rejection is frequent during saturation, and not an error.
//!
//! ```rust
//! # use resolvent::db::clause::{Admission, ClauseDB};
//! # use resolvent::structures::clause::Provenance;
//! # use resolvent::structures::literal::{CLiteral, Literal};
//! let mut clause_db = ClauseDB::default();
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! assert!(clause_db.admit(vec![p, q], Provenance::Original).is_added());
//! assert!(matches!(clause_db.admit(vec![q, p], Provenance::Original), Admission::Duplicate(_)));
//! assert_eq!(clause_db.admit(vec![p, -p], Provenance::Original), Admission::Tautology);
//! assert_eq!(clause_db.count(), 1);
//! ```

use crate::{
    db::{
        clause::{ClauseDB, DBClause},
        ClauseKey,
    },
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, Provenance, SearchSet, Signature},
        literal::Literal,
    },
};

/// The result of an attempt to admit a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The clause was stored, with the given key.
    Added(ClauseKey),

    /// The clause was not stored, as a clause with the same literals is stored with the given key.
    Duplicate(ClauseKey),

    /// The clause was not stored, as the clause is a tautology.
    Tautology,
}

impl Admission {
    /// Whether the clause was stored.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

impl ClauseDB {
    /// Attempts to admit `candidate` to the database, with the given provenance.
    pub fn admit(&mut self, candidate: CClause, provenance: Provenance) -> Admission {
        let signature = candidate.signature();
        if let Some(key) = self.signatures.get(&signature) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate of {key}: {}", candidate.as_string());
            return Admission::Duplicate(*key);
        }

        let search = candidate.search_set();
        self.admit_unique(candidate, search, signature, provenance)
    }

    /// Attempts to admit `candidate` to the database, with the given provenance, where `search` is the set of literals of the candidate.
    ///
    /// Useful when the set has been built alongside the candidate, as is the case with a resolvent.
    pub fn admit_with_search(
        &mut self,
        candidate: CClause,
        search: SearchSet,
        provenance: Provenance,
    ) -> Admission {
        let signature: Signature = search.iter().collect();
        if let Some(key) = self.signatures.get(&signature) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate of {key}: {}", candidate.as_string());
            return Admission::Duplicate(*key);
        }

        self.admit_unique(candidate, search, signature, provenance)
    }

    /// Admission, after the candidate is known to not be a duplicate.
    fn admit_unique(
        &mut self,
        candidate: CClause,
        search: SearchSet,
        signature: Signature,
        provenance: Provenance,
    ) -> Admission {
        if search.iter().any(|literal| search.contains(&literal.negate())) {
            log::trace!(target: targets::CLAUSE_DB, "Tautology: {}", candidate.as_string());
            return Admission::Tautology;
        }

        let clause = match search.len() == candidate.len() {
            true => candidate,
            false => candidate.deduplicated(),
        };

        let key = ClauseKey::from_offset(self.clauses.len());
        log::trace!(target: targets::CLAUSE_DB, "{key}: {} {provenance}", clause.as_string());

        self.clauses.push(DBClause::new(key, clause, search, provenance));
        self.signatures.insert(signature, key);

        Admission::Added(key)
    }
}
