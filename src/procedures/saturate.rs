/*!
Saturation of the clause database under resolution.

# Overview

Saturation scans the clause database with an outer cursor *i*, and for each *i* resolves the clause at *i* against every clause at some *j* < *i*.
Each resolvent is offered for admission with provenance (*i*, *j*) and, if admitted, is stored after every existing clause.

The bounds of the scan are read from the database at each step, rather than fixed when saturation begins.
So, a clause derived during saturation is reached by the outer cursor in turn, and is resolved against every clause before it.
This is what makes the procedure complete.

Saturation ends when either:
- The empty clause is derived, in which case the empty clause is stored and no further pair is examined.
- The outer cursor passes the last stored clause.

Termination is guaranteed for any (finite) input, as there are finitely many signatures of non-tautological clauses over the atoms of the input, and admission never stores two clauses with the same signature.

# Resumption

The outer cursor is kept by the context.
If clauses are added after saturation, a further call to saturate resolves each added clause against every clause stored before it, and so the database is again saturated.
Once the empty clause has been derived, further calls return immediately.

```rust
# use resolvent::config::Config;
# use resolvent::context::Context;
# use resolvent::reports::Report;
let mut ctx = Context::from_config(Config::default());

let p_q = ctx.clause_from_string("p q").unwrap();
assert!(ctx.add_clause(p_q).is_ok());
assert_eq!(ctx.saturate(), Report::Saturated);

let not_p = ctx.clause_from_string("~p").unwrap();
let not_q = ctx.clause_from_string("~q").unwrap();
assert!(ctx.add_clause(not_p).is_ok());
assert!(ctx.add_clause(not_q).is_ok());
assert_eq!(ctx.saturate(), Report::Contradiction);
```
*/

use std::time::Instant;

use crate::{
    context::{Context, ContextState},
    db::{clause::Admission, ClauseKey},
    misc::log::targets::{self},
    procedures::resolution::resolve,
    reports::Report,
    structures::clause::Provenance,
};

impl Context {
    /// Saturates the clause database, returning [Contradiction](Report::Contradiction) if the empty clause is derived and [Saturated](Report::Saturated) otherwise.
    pub fn saturate(&mut self) -> Report {
        if let ContextState::Contradiction(key) = self.state {
            log::info!(target: targets::SATURATION, "Contradiction already derived at {key}");
            return self.report();
        }

        self.state = ContextState::Saturating;
        let start = Instant::now();

        log::info!(target: targets::SATURATION,
            "Saturation from {} of {} clauses", self.cursor + 1, self.clause_db.count());

        'saturation: while self.cursor < self.clause_db.count() {
            let cursor_key = ClauseKey::from_offset(self.cursor);

            for earlier in 0..self.cursor {
                let earlier_key = ClauseKey::from_offset(earlier);
                self.counters.pairs_examined += 1;

                // Both keys are below the count of stored clauses, and clauses are never removed.
                let resolvent = match (
                    self.clause_db.get(cursor_key),
                    self.clause_db.get(earlier_key),
                ) {
                    (Ok(cursor_clause), Ok(earlier_clause)) => {
                        resolve(cursor_clause, earlier_clause)
                    }
                    _ => {
                        log::error!(target: targets::SATURATION, "Missing clause at {cursor_key} or {earlier_key}");
                        None
                    }
                };

                let Some(resolvent) = resolvent else {
                    continue;
                };
                self.counters.resolvents += 1;

                let empty = resolvent.clause.is_empty();
                let provenance = Provenance::Resolution {
                    cursor: cursor_key,
                    earlier: earlier_key,
                };

                let admission =
                    self.clause_db
                        .admit_with_search(resolvent.clause, resolvent.search, provenance);
                self.note_admission(admission);

                if empty {
                    match admission {
                        Admission::Added(key) | Admission::Duplicate(key) => {
                            log::info!(target: targets::SATURATION, "Contradiction at {key} from {provenance}");
                            self.state = ContextState::Contradiction(key);
                            break 'saturation;
                        }
                        Admission::Tautology => {}
                    }
                }
            }

            log::debug!(target: targets::SATURATION,
                "Cursor {cursor_key} exhausted with {} clauses stored", self.clause_db.count());
            self.cursor += 1;
        }

        self.counters.time += start.elapsed();

        if self.state == ContextState::Saturating {
            log::info!(target: targets::SATURATION, "Saturated with {} clauses", self.clause_db.count());
            self.state = ContextState::Saturated;
        }

        self.report()
    }
}
