/*!
(The internal representation of) an atom, aka. a proposition.

- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when providing a problem as input or writing a proof trace. \
  External atoms are a non-empty string of non-whitespace characters which does not contain the negation marker. \
  Examples: `p`, `Rain`, `atom_one`, `96`.

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

```rust
# use resolvent::db::atom::AtomDB;
let mut atom_db = AtomDB::default();
let rain = atom_db.atom_for("Rain").unwrap();
let wet = atom_db.atom_for("Wet").unwrap();

assert_eq!(rain, 0);
assert_eq!(wet, 1);
assert_eq!(atom_db.atom_for("Rain"), Ok(rain));
```

The external representation of an atom is stored in the [atom database](crate::db::atom).
*/

/// An atom, aka. a proposition.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
