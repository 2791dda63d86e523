//! A refutation prover for propositional clauses.
//!
//! Given a collection of premise clauses and a goal clause, the goal is negated, added to the premises, and binary resolution is applied until either:
//! - The empty clause is derived, and so the premises together with the negated goal are contradictory, and the goal is *valid*.
//! - Every pair of stored clauses has been resolved without producing anything new, and so the goal *fails* to follow from the premises.
//!
//! The procedure is naive and exhaustive.
//! There is no propagation, no learning, and no selection heuristic beyond the order in which clauses are stored.
//! Still, the procedure is complete: if a contradiction is derivable, one will be found.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context holds an [atom database](db::atom), mapping names to atoms, and a [clause database](db::clause), the 'knowledge base' of the prover.
//! Every clause enters the clause database through [admission](db::clause::ClauseDB::admit), which rejects duplicate and tautological clauses.
//! Once populated, a context is [saturated](procedures::saturate), and the result is a [report](reports::Report).
//!
//! Useful starting points, then, may be:
//! - The [saturation procedure](crate::procedures::saturate) to inspect the dynamics of a proof.
//! - The [resolution procedure](crate::procedures::resolution) for the single inference rule used.
//! - The [builder] for how a problem is read.
//!
//! # Examples
//!
//! ```rust
//! # use resolvent::config::Config;
//! # use resolvent::context::Context;
//! # use resolvent::reports::Report;
//! let mut ctx = Context::from_config(Config::default());
//!
//! let problem = "A B
//! ~A
//! B";
//!
//! assert!(ctx.read_problem(problem.as_bytes()).is_ok());
//! assert_eq!(ctx.saturate(), Report::Contradiction);
//! assert_eq!(ctx.report().verdict(), "Valid");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! For example, admission decisions can be isolated with the `clause_db` target.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
