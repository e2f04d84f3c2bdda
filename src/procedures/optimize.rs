//! Canonicalization of an expression: deduplication and a deterministic order.

use std::collections::HashSet;

use crate::{
    misc::log::targets,
    structures::{
        clause::{CClause, Clause},
        expression::CExpression,
    },
};

/// Returns `e` with exact duplicates removed and a deterministic order imposed.
///
/// - Within each clause, literals are deduplicated by [key](crate::structures::literal::Literal::key) --- the first occurrence is kept --- and then stably sorted by variable name alone.
///   Negation does not affect the sort, so a variable and its negation stay adjacent, in their original relative order.
/// - Clauses are deduplicated by [key](Clause::key) --- computed after their literals are sorted, so literal order does not distinguish clauses --- and then stably sorted by key.
///
/// The pass is idempotent, and purely syntactic: duplicates aside, the set of literals is untouched.
/// No resolution, absorption across variables, or tautology detection takes place, so e.g. `x || (!x)` survives intact.
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::optimize::optimize;
/// # use cnf_expr::structures::expression::Expression;
/// let e = optimize(&parse("Z && !X && Y").unwrap());
/// assert_eq!(e.as_string(), "(!X) && Y && Z");
///
/// let e = optimize(&parse("X || Y || X").unwrap());
/// assert_eq!(e.as_string(), "X || Y");
/// ```
pub fn optimize(e: &CExpression) -> CExpression {
    let mut clauses = CExpression::with_capacity(e.len());
    let mut clause_keys: HashSet<String> = HashSet::new();

    for clause in e {
        let mut literals = CClause::with_capacity(clause.len());
        let mut literal_keys: HashSet<String> = HashSet::new();
        for literal in clause {
            if literal_keys.insert(literal.key()) {
                literals.push(literal.clone());
            }
        }
        literals.sort_by(|a, b| a.variable().cmp(b.variable()));

        if clause_keys.insert(literals.key()) {
            clauses.push(literals);
        }
    }

    clauses.sort_by_cached_key(|clause| clause.key());

    log::debug!(
        target: targets::OPTIMIZE,
        "optimized {} clauses to {}",
        e.len(),
        clauses.len(),
    );

    clauses
}
