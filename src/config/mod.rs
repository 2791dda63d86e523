/*!
Configuration of a context.

All configuration for a context is contained within [Config].
Some structures, such as the [atom database](crate::db::atom), copy parts of the configuration when built.

Options which concern how a proof is run or written, rather than the proof itself, such as a time limit, belong to the command line interface.
*/

/// The default marker for a negative literal.
pub const NEGATION_MARKER: char = '~';

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The character prefixed to an atom to write the negation of the atom.
    ///
    /// As the marker distinguishes negative literals, the marker may not appear within the name of an atom.
    pub negation_marker: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            negation_marker: NEGATION_MARKER,
        }
    }
}
