//! Simplification of an expression under an assumption.

use std::collections::HashSet;

use crate::{
    misc::log::targets,
    structures::{clause::Clause, expression::CExpression},
};

/// Returns `e` with every clause removed that is guaranteed satisfied once `assumption` holds.
///
/// Each clause of `assumption` is an independently-true fact.
/// A clause of `e` is dropped when one of its literals restates a single-literal fact --- a true literal satisfies its disjunction --- or when the clause as a whole restates a fact.
/// Kept clauses are unchanged and keep their relative order.
///
/// Matching is by canonical key: exact literals and exact clauses only.
/// No implication reasoning takes place, so e.g. assuming `a` does not touch a clause over `(!a)`.
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::assume::assume_true;
/// # use cnf_expr::structures::expression::Expression;
/// let e = parse("a && c").unwrap();
/// let reduced = assume_true(&e, &parse("a && b").unwrap());
/// assert_eq!(reduced.as_string(), "c");
///
/// let e = parse("(a || b) && c").unwrap();
/// let reduced = assume_true(&e, &parse("b && c").unwrap());
/// assert_eq!(reduced.as_string(), "");
/// ```
pub fn assume_true(e: &CExpression, assumption: &CExpression) -> CExpression {
    let facts: HashSet<String> = assumption.iter().map(|clause| clause.key()).collect();

    let mut kept = CExpression::with_capacity(e.len());
    for clause in e {
        let satisfied = clause.iter().any(|literal| facts.contains(&literal.key()))
            || facts.contains(&clause.key());

        match satisfied {
            true => log::trace!(
                target: targets::ANALYSIS,
                "dropped satisfied clause {}",
                clause.as_string(),
            ),
            false => kept.push(clause.clone()),
        }
    }

    kept
}
