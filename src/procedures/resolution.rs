/*!
Binary resolution of a pair of clauses, on a single pivot.

Given a clause *c* and a clause *e*, the *pivot* is the first literal *l* of *c* (in order) such that *-l* is a literal of *e*.
If there is a pivot, the resolvent of *c* and *e* is the clause made of:
- The literals of *c*, in order and without repetition, other than *l*.
- Followed by the literals of *e*, in order and without repetition, other than *-l* and any literal already present.

If there is no pivot the pair does not resolve.

Only the first pivot is used.
If *c* and *e* have some other complementary pair of literals, both literals of that pair are kept, and the resolvent is a tautology.
So, any resolvent which would result from a different choice of pivot is also a tautology, and nothing is lost by the choice.

```rust
# use resolvent::context::Context;
# use resolvent::config::Config;
# use resolvent::procedures::resolution::resolve;
# use resolvent::structures::clause::Provenance;
let mut ctx = Context::from_config(Config::default());

let earlier = ctx.clause_from_string("~p r").unwrap();
let cursor = ctx.clause_from_string("q p").unwrap();
let expected = ctx.clause_from_string("q r").unwrap();

ctx.clause_db.admit(earlier, Provenance::Original);
ctx.clause_db.admit(cursor, Provenance::Original);

let mut stored = ctx.clause_db.all_clauses();
let earlier = stored.next().unwrap();
let cursor = stored.next().unwrap();

let resolvent = resolve(cursor, earlier).unwrap();
assert_eq!(resolvent.clause, expected);
```
*/

use crate::{
    db::clause::DBClause,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, SearchSet},
        literal::{CLiteral, Literal},
    },
};

/// A resolvent, together with the pivot used to derive the resolvent.
#[derive(Clone, Debug)]
pub struct Resolvent {
    /// The literals of the resolvent, in order and without repetition.
    pub clause: CClause,

    /// The literals of the resolvent as a set.
    pub search: SearchSet,

    /// The literal of the cursor clause resolved on.
    pub pivot: CLiteral,
}

/// The resolvent of `cursor` and `earlier`, if the pair resolves.
pub fn resolve(cursor: &DBClause, earlier: &DBClause) -> Option<Resolvent> {
    let mut clause = CClause::default();
    let mut search = SearchSet::default();
    let mut pivot: Option<CLiteral> = None;

    for literal in cursor.iter() {
        if search.contains(literal) || pivot == Some(*literal) {
            continue;
        }

        if pivot.is_none() && earlier.search().contains(&literal.negate()) {
            pivot = Some(*literal);
        } else {
            search.insert(*literal);
            clause.push(*literal);
        }
    }

    let pivot = pivot?;
    let complement = pivot.negate();

    for literal in earlier.iter() {
        if *literal == complement {
            continue;
        }

        if search.insert(*literal) {
            clause.push(*literal);
        }
    }

    log::trace!(target: targets::RESOLUTION,
        "{} and {} on {pivot}: {}", cursor.key(), earlier.key(), clause.as_string());

    Some(Resolvent {
        clause,
        search,
        pivot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::clause::{Admission, ClauseDB},
        structures::clause::Provenance,
    };

    fn stored(clause_db: &mut ClauseDB, clause: CClause) -> &DBClause {
        let Admission::Added(key) = clause_db.admit(clause, Provenance::Original) else {
            panic!("Clause not added");
        };
        clause_db.get(key).unwrap()
    }

    #[test]
    fn no_complement_no_resolvent() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        stored(&mut clause_db, vec![p]);
        stored(&mut clause_db, vec![-q]);

        let mut clauses = clause_db.all_clauses();
        let earlier = clauses.next().unwrap();
        let cursor = clauses.next().unwrap();

        assert!(resolve(cursor, earlier).is_none());
    }

    #[test]
    fn complementary_units_give_empty_clause() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);

        stored(&mut clause_db, vec![-p]);
        stored(&mut clause_db, vec![p]);

        let mut clauses = clause_db.all_clauses();
        let earlier = clauses.next().unwrap();
        let cursor = clauses.next().unwrap();

        let resolvent = resolve(cursor, earlier).unwrap();
        assert!(resolvent.clause.is_empty());
        assert_eq!(resolvent.pivot, p);
    }

    #[test]
    fn merge_order_and_shared_literals() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);
        let s = CLiteral::new(3, true);

        stored(&mut clause_db, vec![s, -p, q]);
        stored(&mut clause_db, vec![q, p, r]);

        let mut clauses = clause_db.all_clauses();
        let earlier = clauses.next().unwrap();
        let cursor = clauses.next().unwrap();

        let resolvent = resolve(cursor, earlier).unwrap();
        assert_eq!(resolvent.clause, vec![q, r, s]);
        assert_eq!(resolvent.search, resolvent.clause.search_set());
    }

    #[test]
    fn first_pivot_only() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        stored(&mut clause_db, vec![-p, -q]);
        stored(&mut clause_db, vec![q, p]);

        let mut clauses = clause_db.all_clauses();
        let earlier = clauses.next().unwrap();
        let cursor = clauses.next().unwrap();

        let resolvent = resolve(cursor, earlier).unwrap();
        assert_eq!(resolvent.pivot, q);
        assert_eq!(resolvent.clause, vec![p, -p]);
        assert!(resolvent.clause.is_tautology());
    }
}
