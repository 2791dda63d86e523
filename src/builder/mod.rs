/*!
Tools for building a context.

# Basic methods

A problem is a collection of premise clauses together with a goal clause.
The library has three basic methods for adding a problem to a context:
- [add_clause](crate::context::Context::add_clause), to add a premise.
- [add_goal](crate::context::Context::add_goal), to add the negation of a goal, as a unit clause for each literal of the goal.
- [ingest](crate::context::Context::ingest), to add premises followed by the negation of a goal.

Literals and clauses may be obtained from their external representation with [literal_from_string](crate::context::Context::literal_from_string) and [clause_from_string](crate::context::Context::clause_from_string).
Or, a problem may be [read](crate::context::Context::read_problem) in full.

Every clause is added through [admission](crate::db::clause::ClauseDB::admit), and so a premise may be rejected as a duplicate or tautology.

# Examples

```rust
# use resolvent::config::Config;
# use resolvent::context::Context;
# use resolvent::db::clause::Admission;
# use resolvent::reports::Report;
let mut ctx = Context::from_config(Config::default());

let a_b = ctx.clause_from_string("A B").unwrap();
let b_a = ctx.clause_from_string("B A").unwrap();
let a_not_a = ctx.clause_from_string("A ~A").unwrap();

assert!(ctx.add_clause(a_b).unwrap().is_added());
assert!(matches!(ctx.add_clause(b_a), Ok(Admission::Duplicate(_))));
assert_eq!(ctx.add_clause(a_not_a), Ok(Admission::Tautology));

assert_eq!(ctx.clause_db.count(), 1);
```
*/

mod parse;
pub use parse::ParserInfo;

use crate::{
    context::{Context, ContextState},
    db::clause::Admission,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Provenance},
        literal::Literal,
    },
    types::err::{self},
};

impl Context {
    /// Adds a premise clause to the context, through admission.
    ///
    /// An empty clause is not a premise, and results in an error.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<Admission, err::ErrorKind> {
        let clause = clause.into();
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause.into());
        }

        let admission = self.clause_db.admit(clause, Provenance::Original);
        self.note_admission(admission);
        self.note_input(admission);
        Ok(admission)
    }

    /// Adds the negation of a goal clause to the context, as a unit clause for each literal of the goal, in order.
    ///
    /// An empty goal results in an error.
    pub fn add_goal(&mut self, goal: impl Into<CClause>) -> Result<Vec<Admission>, err::ErrorKind> {
        let goal = goal.into();
        if goal.is_empty() {
            return Err(err::ClauseDBError::EmptyGoal.into());
        }

        let mut admissions = Vec::with_capacity(goal.len());
        for literal in goal {
            let admission = self.clause_db.admit(vec![literal.negate()], Provenance::Original);
            self.note_admission(admission);
            self.note_input(admission);
            admissions.push(admission);
        }
        Ok(admissions)
    }

    /// Adds each premise, in order, followed by the negation of the goal.
    ///
    /// Every clause is checked before any is added, so on error the clause database is unchanged.
    /// Returns a count of clauses added.
    pub fn ingest(&mut self, premises: Vec<CClause>, goal: CClause) -> Result<usize, err::ErrorKind> {
        if premises.iter().any(|premise| premise.is_empty()) {
            return Err(err::ClauseDBError::EmptyClause.into());
        }
        if goal.is_empty() {
            return Err(err::ClauseDBError::EmptyGoal.into());
        }

        let initial_count = self.clause_db.count();
        for premise in premises {
            self.add_clause(premise)?;
        }
        self.add_goal(goal)?;

        let added = self.clause_db.count() - initial_count;
        log::info!(target: targets::PARSE, "Ingested {added} clauses");
        Ok(added)
    }

    /// Notes the addition of an input clause.
    ///
    /// Any previous saturation is no longer complete, though a contradiction remains a contradiction.
    fn note_input(&mut self, admission: Admission) {
        if admission.is_added() && self.state == ContextState::Saturated {
            self.state = ContextState::Input;
        }
    }
}
