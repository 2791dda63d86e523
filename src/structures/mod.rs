//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The clauses stored in the [clause database](crate::db::clause) form the formula under consideration, which grows as resolvents are added.
//!
//! ## Refutation
//!
//! A goal clause is valid relative to some premises exactly when the premises together with the negation of the goal are unsatisfiable.
//! The negation of a clause is the conjunction of the negations of its literals, and so the negated goal is added as a collection of unit clauses.

pub mod atom;
pub mod clause;
pub mod literal;
