use resolvent::{config::Config, context::Context, reports::Report};

fn context_for(problem: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_problem(problem.as_bytes()).is_ok());
    ctx
}

fn trace_lines(ctx: &Context) -> Vec<String> {
    ctx.trace().lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn disjunctive_syllogism() {
    let mut ctx = context_for("A B\n~A\nB\n");

    assert_eq!(ctx.saturate(), Report::Contradiction);

    assert_eq!(
        trace_lines(&ctx),
        vec![
            "1. A B {}",
            "2. ~A {}",
            "3. ~B {}",
            "4. B {2,1}",
            "5. A {3,1}",
            "6. Contradiction {4,3}",
        ]
    );
    assert_eq!(ctx.trace().verdict, "Valid");
}

#[test]
fn unrelated_goal() {
    let mut ctx = context_for("A\nB\n");

    assert_eq!(ctx.saturate(), Report::Saturated);
    assert_eq!(trace_lines(&ctx), vec!["1. A {}", "2. ~B {}"]);
    assert_eq!(ctx.counters.resolvents, 0);
    assert_eq!(ctx.trace().to_string(), "1. A {}\n2. ~B {}\nFail");
}

#[test]
fn tautological_premise() {
    let mut ctx = context_for("A ~A\nB\n");

    assert_eq!(ctx.clause_db.count(), 1);
    assert_eq!(ctx.counters.tautologies, 1);
    assert_eq!(ctx.saturate(), Report::Saturated);
    assert_eq!(trace_lines(&ctx), vec!["1. ~B {}"]);
}

#[test]
fn reordered_duplicate_premise() {
    let ctx = context_for("A B\nB A\nC\n");

    assert_eq!(ctx.counters.duplicates, 1);
    assert_eq!(trace_lines(&ctx), vec!["1. A B {}", "2. ~C {}"]);
}

#[test]
fn contradiction_halts() {
    let mut ctx = context_for("P\n~P\nQ R\n~Q S\nT\n");

    assert_eq!(ctx.saturate(), Report::Contradiction);

    // The units at 1 and 2 resolve at the first pair examined.
    assert_eq!(ctx.counters.pairs_examined, 1);
    let last = ctx.clause_db.all_clauses().last().unwrap();
    assert!(last.is_empty());
    assert_eq!(ctx.trace().lines.last().unwrap().to_string(), "6. Contradiction {2,1}");
}

#[test]
fn proof_trace() {
    let mut ctx = context_for("A B\n~A\nB\n");
    ctx.saturate();

    let proof = ctx.proof_trace();
    let lines = proof
        .lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        lines,
        vec![
            "1. A B {}",
            "2. ~A {}",
            "3. ~B {}",
            "4. B {2,1}",
            "6. Contradiction {4,3}",
        ]
    );
}

#[test]
fn proof_trace_without_contradiction() {
    let mut ctx = context_for("A B\nA\n");

    assert_eq!(ctx.saturate(), Report::Saturated);
    assert!(ctx.proof_keys().is_empty());
    assert_eq!(ctx.proof_trace(), ctx.trace());
}

#[test]
fn json_trace() {
    let mut ctx = context_for("A\nA\n");
    ctx.saturate();

    let json = ctx.trace().as_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["verdict"], "Valid");
    assert_eq!(value["lines"][0]["literals"][0], "A");
    assert!(value["lines"][0].get("parents").is_none());
    assert_eq!(value["lines"][2]["parents"], serde_json::json!([2, 1]));
    assert_eq!(value["lines"][2]["literals"], serde_json::json!([]));
}

#[test]
fn multi_literal_goal() {
    // p → q and q → r, so p → r.
    let mut ctx = context_for("~p q\n~q r\n~p r\n");

    assert_eq!(ctx.saturate(), Report::Contradiction);
    assert_eq!(ctx.report().verdict(), "Valid");
}

#[test]
fn affirming_the_consequent() {
    let mut ctx = context_for("~p q\nq\np\n");

    assert_eq!(ctx.saturate(), Report::Saturated);
    assert_eq!(ctx.report().verdict(), "Fail");
}
