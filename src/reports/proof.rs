/*!
The proof of a contradiction.

Provenance of the stored clauses forms a directed acyclic graph, with an edge from each parent to each resolvent.
The proof of the empty clause is the empty clause together with every clause it is reachable from.

```rust
# use resolvent::config::Config;
# use resolvent::context::Context;
let mut ctx = Context::from_config(Config::default());

let problem = "p q
r
~p
q";
assert!(ctx.read_problem(problem.as_bytes()).is_ok());
ctx.saturate();

let indices = ctx.proof_keys().iter().map(|key| key.index()).collect::<Vec<_>>();
assert_eq!(indices, vec![1, 3, 4, 5, 7]);
```
*/

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{Dfs, Reversed},
};

use crate::{
    context::{Context, ContextState},
    db::ClauseKey,
};

impl Context {
    /// The derivation graph of the stored clauses.
    ///
    /// The graph has a node for each stored clause, weighted by the key of the clause, with the index of the node the offset of the clause.
    /// There is an edge from each parent of a resolvent to the resolvent.
    pub fn derivation_graph(&self) -> DiGraph<ClauseKey, ()> {
        let mut graph = DiGraph::with_capacity(self.clause_db.count(), 2 * self.clause_db.count());

        for clause in self.clause_db.all_clauses() {
            let node = graph.add_node(clause.key());

            if let Some((cursor, earlier)) = clause.provenance().parents() {
                graph.add_edge(NodeIndex::new(cursor.offset()), node, ());
                graph.add_edge(NodeIndex::new(earlier.offset()), node, ());
            }
        }

        graph
    }

    /// The keys of every clause used to derive the empty clause, in order, or nothing if the empty clause has not been derived.
    pub fn proof_keys(&self) -> Vec<ClauseKey> {
        let ContextState::Contradiction(contradiction) = self.state else {
            return Vec::default();
        };

        let graph = self.derivation_graph();
        let reversed = Reversed(&graph);

        let mut keys = Vec::default();
        let mut dfs = Dfs::new(reversed, NodeIndex::new(contradiction.offset()));
        while let Some(node) = dfs.next(reversed) {
            keys.push(graph[node]);
        }

        keys.sort_unstable();
        keys
    }
}
