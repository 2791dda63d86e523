/*!
A database of clauses, aka. the knowledge base of a proof.

The database is an append-only sequence of [DBClause]s together with an index of the [signature](crate::structures::clause::Signature) of every clause stored.

- Clauses are never removed or revised once stored, so a [ClauseKey] remains valid for the lifetime of the database.
- Every clause enters the database through [admission](ClauseDB::admit), which upholds two invariants:
  + No two stored clauses have the same signature.
  + No stored clause is a tautology.

Fields of the database are private to ensure the use of methods which uphold these invariants.
*/

mod admission;
mod db_clause;

pub use admission::Admission;
pub use db_clause::DBClause;

use std::collections::HashMap;

use crate::{
    db::ClauseKey,
    structures::clause::{Clause, Signature},
    types::err::{self},
};

/// A database of clauses.
#[derive(Default)]
pub struct ClauseDB {
    /// Every stored clause, in order of admission.
    clauses: Vec<DBClause>,

    /// The signature of every stored clause, paired with the key of the clause.
    signatures: HashMap<Signature, ClauseKey>,
}

impl ClauseDB {
    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause has been stored.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clause stored with the given key.
    pub fn get(&self, key: ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match self.clauses.get(key.offset()) {
            Some(clause) => Ok(clause),
            None => Err(err::ClauseDBError::InvalidKeyIndex),
        }
    }

    /// Whether some clause with the same set of literals as `clause` is stored.
    pub fn contains(&self, clause: &impl Clause) -> bool {
        self.signatures.contains_key(&clause.signature())
    }

    /// An iterator over every stored clause, in order of admission.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.iter()
    }

    /// The key of the first stored empty clause, if one exists.
    pub fn empty_clause(&self) -> Option<ClauseKey> {
        self.clauses
            .iter()
            .find(|clause| clause.is_empty())
            .map(|clause| clause.key())
    }
}
