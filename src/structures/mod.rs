//! Key structures: literals, clauses, and expressions.
//!
//! Clauses and expressions are made of a trait to capture the behaviour of the structure and a canonical implementation of the trait on a vector.
//! A literal is a plain value type.
//!
//! # Identity
//!
//! Each structure has a *canonical key* --- its text under the default rendering --- returned by `key()`.
//! Keys carry no information beyond the value itself; they exist so that 'the same literal' and 'the same clause' can be recognised when building sets, e.g. as the members of a `HashSet<String>`.
//!
//! # Sets and sequences
//!
//! A clause is semantically the *set* of its literals, and an expression the set of its clauses, but both are stored as sequences.
//! Duplicate removal and ordering are explicit operations --- see [optimize](crate::procedures::optimize) --- and a freshly built clause may contain duplicates.

pub mod clause;
pub mod expression;
pub mod literal;
