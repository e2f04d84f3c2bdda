//! The combinators over CNF expressions: conjunction, disjunction, and negation.
//!
//! Each combinator implements the corresponding boolean law while keeping the result in conjunctive normal form, for arbitrary CNF operands.
//!
//! Throughout, the empty expression is the neutral element --- it stands for 'no expression yet' rather than a truth constant, and so is the identity for both [and] and [or].

use crate::{
    misc::log::targets,
    structures::{clause::CClause, expression::CExpression},
};

/// The conjunction of two expressions.
///
/// In CNF conjunction is concatenation: the clauses of `b` follow the clauses of `a`, each side in its original order.
/// No deduplication or simplification takes place here; see [optimize](crate::procedures::optimize::optimize).
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::algebra::and;
/// # use cnf_expr::structures::expression::Expression;
/// let e = and(&parse("a && b").unwrap(), &parse("c").unwrap());
/// assert_eq!(e.as_string(), "a && b && c");
/// ```
pub fn and(a: &CExpression, b: &CExpression) -> CExpression {
    let mut out = CExpression::with_capacity(a.len() + b.len());
    out.extend(a.iter().cloned());
    out.extend(b.iter().cloned());
    out
}

/// The disjunction of two expressions, by the distributive law.
///
/// For every clause `ca` of `a` and every clause `cb` of `b` the result holds one clause: the literals of `ca` followed by the literals of `cb`.
/// Clauses of `a` drive the outer loop, so `(X && Y) || (Z && W)` yields `(X,Z) (X,W) (Y,Z) (Y,W)` in that order.
///
/// An empty operand is 'no expression yet', and the other operand is returned unchanged.
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::algebra::or;
/// # use cnf_expr::structures::expression::Expression;
/// let e = or(&parse("X && Y").unwrap(), &parse("Z").unwrap());
/// assert_eq!(e.as_string(), "(X || Z) && (Y || Z)");
/// ```
pub fn or(a: &CExpression, b: &CExpression) -> CExpression {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut out = CExpression::with_capacity(a.len() * b.len());
    for a_clause in a {
        for b_clause in b {
            let mut clause = CClause::with_capacity(a_clause.len() + b_clause.len());
            clause.extend(a_clause.iter().cloned());
            clause.extend(b_clause.iter().cloned());
            out.push(clause);
        }
    }

    log::trace!(
        target: targets::ALGEBRA,
        "or distributed {} x {} clauses into {}",
        a.len(),
        b.len(),
        out.len(),
    );

    out
}

/// The negation of an expression, by De Morgan's laws.
///
/// The negation of a single clause --- a disjunction --- is the conjunction of its flipped literals, as singleton clauses.
/// The negation of the whole expression --- a conjunction --- is the disjunction of the per-clause negations, folded together with [or] from the empty identity.
///
/// Negating the empty expression yields the empty expression, and negating a negation restores the original single-clause or singleton-clause structure exactly.
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::algebra::not;
/// # use cnf_expr::structures::expression::Expression;
/// let e = not(&parse("x || y").unwrap());
/// assert_eq!(e.as_string(), "(!x) && (!y)");
///
/// let e = not(&parse("x && y").unwrap());
/// assert_eq!(e.as_string(), "(!x) || (!y)");
/// ```
pub fn not(e: &CExpression) -> CExpression {
    let mut out = CExpression::default();

    for clause in e {
        let negated = clause
            .iter()
            .map(|literal| vec![literal.negate()])
            .collect::<CExpression>();
        out = or(&out, &negated);
    }

    out
}
