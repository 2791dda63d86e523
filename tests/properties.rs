//! Properties of admission and saturation, over small random clause sets.

use std::collections::HashSet;

use proptest::prelude::*;
use resolvent::{
    config::Config,
    context::Context,
    db::clause::Admission,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause, Provenance},
        literal::{CLiteral, Literal},
    },
};

const ATOMS: Atom = 4;

fn arb_literal() -> impl Strategy<Value = CLiteral> {
    (0..ATOMS, any::<bool>()).prop_map(|(atom, polarity)| CLiteral::new(atom, polarity))
}

fn arb_clause() -> impl Strategy<Value = CClause> {
    proptest::collection::vec(arb_literal(), 1..=4)
}

fn arb_clauses() -> impl Strategy<Value = Vec<CClause>> {
    proptest::collection::vec(arb_clause(), 1..=7)
}

fn saturated_context(clauses: &[CClause]) -> (Context, Report) {
    let mut ctx = Context::from_config(Config::default());
    for clause in clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    let report = ctx.saturate();
    (ctx, report)
}

/// Whether some valuation of the atoms satisfies every clause.
fn satisfiable(clauses: &[CClause]) -> bool {
    (0..(1_u32 << ATOMS)).any(|valuation| {
        clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| (((valuation >> literal.atom()) & 1) == 1) == literal.polarity())
        })
    })
}

proptest! {
    #[test]
    fn negation_is_an_involution(literal in arb_literal()) {
        prop_assert_eq!(literal.negate().negate(), literal);
        prop_assert_ne!(literal.negate(), literal);
        prop_assert_eq!(literal.negate().atom(), literal.atom());
    }

    #[test]
    fn duplicates_are_excluded(clause in arb_clause()) {
        let mut ctx = Context::from_config(Config::default());
        let mut reversed = clause.clone();
        reversed.reverse();

        let first = ctx.add_clause(clause.clone()).unwrap();
        let count = ctx.clause_db.count();
        let second = ctx.add_clause(reversed).unwrap();

        prop_assert!(count <= 1);
        prop_assert!(!second.is_added());
        prop_assert_eq!(ctx.clause_db.count(), count);
        if let Admission::Added(key) = first {
            prop_assert_eq!(second, Admission::Duplicate(key));
        }
    }

    #[test]
    fn tautologies_are_excluded(clause in arb_clause(), position in any::<prop::sample::Index>()) {
        let mut ctx = Context::from_config(Config::default());
        let mut tautology = clause.clone();
        tautology.push(clause[position.index(clause.len())].negate());

        prop_assert_eq!(ctx.add_clause(tautology).unwrap(), Admission::Tautology);
        prop_assert!(ctx.clause_db.is_empty());
    }

    #[test]
    fn repetitions_are_collapsed(clause in arb_clause()) {
        prop_assume!(!clause.is_tautology());

        let mut ctx = Context::from_config(Config::default());
        let mut doubled = clause.clone();
        doubled.extend(clause.iter().rev().copied());

        prop_assert!(ctx.add_clause(doubled).unwrap().is_added());

        let stored = ctx.clause_db.all_clauses().next().unwrap();
        let distinct = stored.iter().collect::<HashSet<_>>();
        prop_assert_eq!(distinct.len(), stored.len());
        prop_assert_eq!(stored.signature(), clause.signature());
    }

    #[test]
    fn stored_clauses_are_distinct_and_not_tautologies(clauses in arb_clauses()) {
        let (ctx, _) = saturated_context(&clauses);

        let mut signatures = HashSet::new();
        for clause in ctx.clause_db.all_clauses() {
            prop_assert!(!clause.is_tautology());
            prop_assert!(signatures.insert(clause.signature()));
        }
    }

    #[test]
    fn resolvents_follow_from_earlier_parents(clauses in arb_clauses()) {
        let (ctx, _) = saturated_context(&clauses);

        for clause in ctx.clause_db.all_clauses() {
            let Provenance::Resolution { cursor, earlier } = clause.provenance() else {
                continue;
            };

            prop_assert!(earlier < cursor);
            prop_assert!(cursor < clause.key());

            let cursor_clause = ctx.clause_db.get(cursor).unwrap();
            let earlier_clause = ctx.clause_db.get(earlier).unwrap();

            let pivot = cursor_clause
                .iter()
                .find(|literal| earlier_clause.search().contains(&literal.negate()))
                .copied();
            prop_assert!(pivot.is_some());
            let pivot = pivot.unwrap();

            let expected = cursor_clause
                .iter()
                .chain(earlier_clause.iter())
                .filter(|literal| **literal != pivot && **literal != pivot.negate())
                .copied()
                .collect::<HashSet<_>>();

            prop_assert_eq!(clause.search(), &expected);
        }
    }

    #[test]
    fn contradiction_is_the_last_clause(clauses in arb_clauses()) {
        let (ctx, report) = saturated_context(&clauses);

        let empty = ctx.clause_db.all_clauses().filter(|clause| clause.is_empty()).count();
        match report {
            Report::Contradiction => {
                prop_assert_eq!(empty, 1);
                prop_assert!(ctx.clause_db.all_clauses().last().unwrap().is_empty());
            }
            _ => prop_assert_eq!(empty, 0),
        }
    }

    #[test]
    fn contradiction_exactly_when_unsatisfiable(clauses in arb_clauses()) {
        let (_, report) = saturated_context(&clauses);

        match satisfiable(&clauses) {
            true => prop_assert_eq!(report, Report::Saturated),
            false => prop_assert_eq!(report, Report::Contradiction),
        }
    }
}
