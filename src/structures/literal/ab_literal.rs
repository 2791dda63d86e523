use crate::structures::{atom::Atom, clause::CClause};

use super::Literal;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::ops::Neg for ABLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Displays the internal atom, as names are held by the [atom database](crate::db::atom::AtomDB).
impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// Into

impl From<ABLiteral> for CClause {
    fn from(literal: ABLiteral) -> Self {
        vec![literal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_polarity_only() {
        let p = ABLiteral::new(3, true);
        let not_p = p.negate();

        assert_eq!(not_p.atom(), 3);
        assert!(!not_p.polarity());
        assert_ne!(p, not_p);
        assert_eq!(not_p.negate(), p);
    }

    #[test]
    fn order_is_atom_then_polarity() {
        let mut literals = vec![
            ABLiteral::new(2, true),
            ABLiteral::new(1, true),
            ABLiteral::new(2, false),
            ABLiteral::new(1, false),
        ];
        literals.sort();

        assert_eq!(
            literals,
            vec![
                ABLiteral::new(1, false),
                ABLiteral::new(1, true),
                ABLiteral::new(2, false),
                ABLiteral::new(2, true),
            ]
        );
    }
}
