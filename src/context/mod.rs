/*!
The context of a proof.

A context holds everything relevant to a single proof:
- The [configuration](crate::config) of the proof.
- An [atom database](crate::db::atom), relating external names to internal atoms.
- A [clause database](crate::db::clause), the knowledge base of the proof.
- [Counters] recording the work done.

A context is populated with premises and a goal (see the [builder](crate::builder)), [saturated](crate::procedures::saturate), and then [reported](crate::reports) on.

```rust
# use resolvent::config::Config;
# use resolvent::context::Context;
# use resolvent::reports::Report;
let mut ctx = Context::from_config(Config::default());

let premises = vec![ctx.clause_from_string("A B").unwrap(),
                    ctx.clause_from_string("~A").unwrap()];
let goal = ctx.clause_from_string("B").unwrap();

assert!(ctx.ingest(premises, goal).is_ok());
assert_eq!(ctx.clause_db.count(), 3);

assert_eq!(ctx.saturate(), Report::Contradiction);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::{Admission, ClauseDB},
        ClauseKey,
    },
    reports::Report,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses are being added, and no saturation has taken place since the last addition.
    Input,

    /// Saturation is in progress.
    Saturating,

    /// The empty clause has been derived, and is stored with the given key.
    Contradiction(ClauseKey),

    /// Every pair of clauses has been resolved without deriving the empty clause.
    Saturated,
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// Counters for the context.
    pub counters: Counters,

    /// The offset of the first clause not yet used as the outer clause of saturation.
    pub(crate) cursor: usize,

    /// The state of the context.
    pub(crate) state: ContextState,
}

impl Context {
    /// A fresh context, configured by `config`.
    pub fn from_config(config: Config) -> Self {
        Context {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::default(),
            counters: Counters::default(),
            cursor: 0,
            state: ContextState::Input,
            config,
        }
    }

    /// The state of the context.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// A report on the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Records the result of an admission in the counters.
    pub(crate) fn note_admission(&mut self, admission: Admission) {
        match admission {
            Admission::Added(_) => self.counters.added += 1,
            Admission::Duplicate(_) => self.counters.duplicates += 1,
            Admission::Tautology => self.counters.tautologies += 1,
        }
    }
}
