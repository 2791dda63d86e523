//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use resolvent::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let literal = CLiteral::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, literal.negate());
//! assert_eq!(literal.negate().negate(), literal);
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//!     This ordering fixes the [signature](crate::structures::clause::Signature) of a clause.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashed in order to allow for constant time lookup in the search set of a clause.

mod ab_literal;
pub use ab_literal::ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    ///
    /// Negation is an involution, so the negation of the negation of a literal is the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
