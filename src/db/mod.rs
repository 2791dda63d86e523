/*!
Databases for holding information relevant to a proof.

- [The atom database](crate::db::atom)
  + Names of atoms, internal and external.
- [The clause database](crate::db::clause)
  + The knowledge base: every clause admitted during a proof, in order of admission, with provenance.

Clauses are accessed through [keys](ClauseKey), which are stable for the lifetime of a context as clauses are never removed.
*/

pub mod atom;
pub mod clause;
mod keys;

pub use keys::ClauseKey;
