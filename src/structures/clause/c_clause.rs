//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause, SearchSet, Signature},
    literal::{CLiteral, Literal},
};

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn deduplicated(&self) -> CClause {
        let mut seen = SearchSet::with_capacity(self.len());
        self.iter()
            .filter(|literal| seen.insert(**literal))
            .copied()
            .collect()
    }

    fn search_set(&self) -> SearchSet {
        self.iter().copied().collect()
    }

    fn signature(&self) -> Signature {
        self.iter().collect()
    }

    fn is_tautology(&self) -> bool {
        let search = self.search_set();
        search.iter().any(|literal| search.contains(&literal.negate()))
    }
}
