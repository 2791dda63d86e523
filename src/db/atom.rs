/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

At present the only things are internal and external name maps, for reading and writing [Atom]s, [Literal]s, and [Clause]s.

Atoms are handed out in order of first appearance of an external name, and so the atoms of a database are always [0..*m*) for some *m*.
*/

use std::collections::HashMap;

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

/// The atom database.
pub struct AtomDB {
    /// External names, indexed by atom.
    names: Vec<String>,

    /// A map from external names to atoms.
    atoms: HashMap<String, Atom>,

    /// The marker prefixed to the name of an atom to write a negative literal.
    negation_marker: char,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB::new(&Config::default())
    }
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            names: Vec::default(),
            atoms: HashMap::default(),
            negation_marker: config.negation_marker,
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The atom with the given external name, if one exists.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The atom with the given external name, with a fresh atom created for a name not seen before.
    pub fn atom_for(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        if let Some(atom) = self.atoms.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        log::trace!(target: targets::PARSE, "Fresh atom {atom}: {name}");
        self.names.push(name.to_owned());
        self.atoms.insert(name.to_owned(), atom);
        Ok(atom)
    }

    /// The external name of an atom, if the atom is part of the database.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// The external representation of a literal.
    ///
    /// An atom without an external name is written as its internal representation.
    pub fn literal_string(&self, literal: &CLiteral) -> String {
        let name = match self.name_of(literal.atom()) {
            Some(name) => name.to_owned(),
            None => literal.atom().to_string(),
        };
        match literal.polarity() {
            true => name,
            false => format!("{}{name}", self.negation_marker),
        }
    }

    /// The external representation of a clause, with literals in order and separated by a space.
    pub fn clause_string(&self, clause: &impl Clause) -> String {
        clause
            .literals()
            .map(|literal| self.literal_string(literal))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_in_order_of_appearance() {
        let mut atom_db = AtomDB::default();

        assert_eq!(atom_db.atom_for("q"), Ok(0));
        assert_eq!(atom_db.atom_for("p"), Ok(1));
        assert_eq!(atom_db.atom_for("q"), Ok(0));
        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.name_of(1), Some("p"));
        assert_eq!(atom_db.atom_of("r"), None);
    }

    #[test]
    fn external_strings() {
        let mut atom_db = AtomDB::default();
        let rain = atom_db.atom_for("Rain").unwrap();
        let wet = atom_db.atom_for("Wet").unwrap();

        let clause = vec![CLiteral::new(rain, false), CLiteral::new(wet, true)];
        assert_eq!(atom_db.clause_string(&clause), "~Rain Wet");
    }

    #[test]
    fn configured_marker() {
        let config = Config {
            negation_marker: '-',
        };
        let mut atom_db = AtomDB::new(&config);
        let p = atom_db.atom_for("p").unwrap();

        assert_eq!(atom_db.literal_string(&CLiteral::new(p, false)), "-p");
    }
}
