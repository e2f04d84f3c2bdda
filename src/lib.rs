//! A library for parsing and manipulating boolean expressions kept in conjunctive normal form.
//!
//! cnf_expr parses logical expressions written with `!`, `&&`, `||`, parentheses, and identifiers,
//! and maintains every expression as a CNF formula: a conjunction of disjunctions of (possibly negated) variables.
//! Variable names are opaque strings, compared only for identity.
//!
//! The library is developed to support reasoning about which conditions apply to a thing --- e.g. merging and simplifying the tag predicates attached to test expectations --- though nothing in the library is specific to that use.
//!
//! # Orientation
//!
//! The library is designed around a small set of [structures] and the [procedures] over them.
//!
//! - An [expression](structures::expression) is a vector of [clauses](structures::clause), interpreted as their conjunction.
//! - A clause is a vector of [literals](structures::literal), interpreted as their disjunction.
//! - The empty expression is the identity element of the combinators --- 'no expression yet' --- rather than a truth constant.
//!
//! Expressions are built by [parsing](parser::parse) or by the [combinators](procedures::algebra), and every public operation returns a valid CNF expression.
//! The remaining procedures are analyses: [optimize](procedures::optimize::optimize) canonicalizes an expression, [decompose](procedures::decompose::decompose) lists its distinct sub-structures, and [assume_true](procedures::assume::assume_true) drops clauses already satisfied by some other expression.
//!
//! Useful starting points:
//! - [parse](parser::parse), the entry point for turning text into an expression.
//! - The [algebra](procedures::algebra) combinators, which carry the CNF invariant.
//! - The [structures], for how literals, clauses, and expressions are represented and rendered.
//!
//! # Examples
//!
//! + Parse an expression, and simplify it against conditions known to hold.
//!
//! ```rust
//! use cnf_expr::parser::parse;
//! use cnf_expr::procedures::assume::assume_true;
//! use cnf_expr::structures::expression::Expression;
//!
//! let requirements = parse("(vulkan || metal) && validation")?;
//! assert_eq!(requirements.as_string(), "(vulkan || metal) && validation");
//!
//! let established = parse("metal && debug")?;
//!
//! let remaining = assume_true(&requirements, &established);
//! assert_eq!(remaining.as_string(), "validation");
//! # Ok::<(), cnf_expr::types::err::ParseError>(())
//! ```
//!
//! + Combine expressions while staying in CNF.
//!
//! ```rust
//! use cnf_expr::parser::parse;
//! use cnf_expr::procedures::algebra;
//! use cnf_expr::structures::expression::Expression;
//!
//! let a = parse("x")?;
//! let b = parse("y && z")?;
//!
//! let either = algebra::or(&a, &b);
//! assert_eq!(either.as_string(), "(x || y) && (x || z)");
//!
//! let both = algebra::and(&a, &b);
//! assert_eq!(both.as_string(), "x && y && z");
//! # Ok::<(), cnf_expr::types::err::ParseError>(())
//! ```
//!
//! # Errors
//!
//! Parsing is the only fallible operation.
//! Every malformed input surfaces as a [ParseError](types::err::ParseError) carrying the span of the offending text; the combinators and analyses are total over well-formed expressions.
//!
//! # Logs
//!
//! Calls to [log!](log) are made at a few points of interest, under the targets listed in [misc::log].
//! No log implementation is provided.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs from the parser can be filtered with `RUST_LOG=parser …`.

pub mod misc;
pub mod parser;
pub mod procedures;
pub mod structures;
pub mod types;
