/*!
A trace of the clause database.

A trace has a line for each stored clause, in order, followed by the verdict on the goal.
Each line is written as:
- The (1-based) index of the clause, followed by a '.'.
- The literals of the clause separated by a space, or `Contradiction` for the empty clause.
- `{}` for an input clause, or `{p,q}` for a resolvent of the clauses at index `p` (the cursor clause) and `q` (the earlier clause).

```text
1. A B {}
2. ~A {}
3. ~B {}
4. B {2,1}
5. A {3,1}
6. Contradiction {4,3}
Valid
```
*/

use serde::Serialize;

use crate::{context::Context, db::clause::DBClause};

/// A line of a trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceLine {
    /// The (1-based) index of the clause.
    pub index: usize,

    /// The external representation of each literal of the clause, in order.
    pub literals: Vec<String>,

    /// The indices of the parents of the clause, if a resolvent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<[usize; 2]>,
}

/// A trace of (some of) the clause database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// A line for each clause.
    pub lines: Vec<TraceLine>,

    /// The verdict on the goal.
    pub verdict: &'static str,
}

impl Trace {
    /// The trace as (pretty) JSON.
    pub fn as_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for TraceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literals.is_empty() {
            true => write!(f, "{}. Contradiction", self.index)?,
            false => write!(f, "{}. {}", self.index, self.literals.join(" "))?,
        }

        match self.parents {
            None => write!(f, " {{}}"),
            Some([cursor, earlier]) => write!(f, " {{{cursor},{earlier}}}"),
        }
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "{}", self.verdict)
    }
}

impl Context {
    /// A line of a trace for a stored clause.
    pub fn trace_line(&self, clause: &DBClause) -> TraceLine {
        TraceLine {
            index: clause.key().index(),
            literals: clause
                .iter()
                .map(|literal| self.atom_db.literal_string(literal))
                .collect(),
            parents: clause
                .provenance()
                .parents()
                .map(|(cursor, earlier)| [cursor.index(), earlier.index()]),
        }
    }

    /// A trace of every stored clause.
    pub fn trace(&self) -> Trace {
        Trace {
            lines: self
                .clause_db
                .all_clauses()
                .map(|clause| self.trace_line(clause))
                .collect(),
            verdict: self.report().verdict(),
        }
    }

    /// Writes every line of the trace to `out`, followed by the verdict.
    ///
    /// ```rust
    /// # use resolvent::config::Config;
    /// # use resolvent::context::Context;
    /// let mut ctx = Context::from_config(Config::default());
    /// assert!(ctx.read_problem("A\nA".as_bytes()).is_ok());
    /// ctx.saturate();
    ///
    /// let mut out = Vec::new();
    /// assert!(ctx.write_trace(&mut out).is_ok());
    /// assert_eq!(out, b"1. A {}\n2. ~A {}\n3. Contradiction {2,1}\nValid\n");
    /// ```
    pub fn write_trace(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        for clause in self.clause_db.all_clauses() {
            writeln!(out, "{}", self.trace_line(clause))?;
        }
        writeln!(out, "{}", self.report().verdict())
    }

    /// A trace of the clauses used to derive the empty clause, or of every stored clause if the empty clause has not been derived.
    ///
    /// Indices are those of the full trace.
    pub fn proof_trace(&self) -> Trace {
        let keys = self.proof_keys();
        if keys.is_empty() {
            return self.trace();
        }

        Trace {
            lines: keys
                .into_iter()
                .filter_map(|key| self.clause_db.get(key).ok())
                .map(|clause| self.trace_line(clause))
                .collect(),
            verdict: self.report().verdict(),
        }
    }
}
