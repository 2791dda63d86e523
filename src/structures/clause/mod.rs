//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! The order of literals in the vector is the order in which the literals were given, and is used only for display.
//!
//! ```rust
//! # use resolvent::structures::literal::{CLiteral, Literal};
//! # use resolvent::structures::clause::Clause;
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, false);
//!
//! let clause = vec![q, p, q];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.signature(), vec![p, q].signature());
//! assert!(!clause.is_tautology());
//! assert!(vec![p, q, -p].is_tautology());
//! ```
//!
//! - The empty clause is always false (never true), and its derivation is a contradiction.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

mod c_clause;
mod provenance;

pub use provenance::Provenance;

use std::collections::HashSet;

use crate::structures::{atom::Atom, literal::CLiteral};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause, using internal atoms.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause, including any repetitions.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The literals of the clause, in order, with any repeated literal kept at its first occurrence only.
    fn deduplicated(&self) -> CClause;

    /// The literals of the clause as a set, for constant time lookup.
    fn search_set(&self) -> SearchSet;

    /// The canonical signature of the clause.
    fn signature(&self) -> Signature;

    /// Whether the clause contains some literal together with the negation of that literal.
    fn is_tautology(&self) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The literals of a clause as a set.
pub type SearchSet = HashSet<CLiteral>;

/// The canonical form of a clause, independent of the order of literals and of repetitions.
///
/// The literals of the clause, sorted by the [order on literals](crate::structures::literal) with duplicates removed.
/// Two clauses have the same signature exactly when they have the same set of literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<CLiteral>);

impl Signature {
    /// The literals of the signature, in canonical order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.0
    }
}

impl<'l> FromIterator<&'l CLiteral> for Signature {
    fn from_iter<I: IntoIterator<Item = &'l CLiteral>>(iter: I) -> Self {
        let mut literals = iter.into_iter().copied().collect::<Vec<_>>();
        literals.sort_unstable();
        literals.dedup();
        Signature(literals)
    }
}
