/*!
Procedures to prove a goal.

A proof is a single procedure, [saturation](saturate), built around a single rule, [resolution].

In rough strokes:
- Every pair of stored clauses is resolved, in order of storage.
- Each resolvent is offered for [admission](crate::db::clause::ClauseDB::admit), and so joins the pairs to be resolved, unless it is a duplicate or a tautology.
- A proof ends when the empty clause is derived, or when every pair has been resolved.
*/

pub mod resolution;
pub mod saturate;
