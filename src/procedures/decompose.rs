//! Decomposition of an expression into its distinct sub-structures.

use std::collections::HashSet;

use crate::structures::{
    clause::{CClause, Clause},
    expression::CExpression,
    literal::Literal,
};

/// The distinct sub-structures of an expression. See [decompose].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decomposed {
    /// The expression itself, when it conjoins more than one clause.
    pub ands: Option<CExpression>,

    /// The distinct clauses of more than one literal, in first-seen order.
    pub ors: Vec<CClause>,

    /// The distinct literals, in first-seen order.
    pub literals: Vec<Literal>,
}

/// Splits `e` into three independent, deduplicated views, for callers that enumerate which conditions are involved separately from how the conditions combine.
///
/// - `ands` holds the expression itself, and only when the expression conjoins more than one clause.
/// - `ors` holds the distinct clauses of more than one literal; a singleton clause carries no disjunctive information and is excluded.
/// - `literals` holds every distinct literal, regardless of the clause it came from.
///
/// Deduplication is by canonical key throughout.
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// # use cnf_expr::procedures::decompose::decompose;
/// # use cnf_expr::structures::literal::Literal;
/// let e = parse("(X || Y) && Z").unwrap();
/// let parts = decompose(&e);
///
/// assert_eq!(parts.ands, Some(e.clone()));
/// assert_eq!(parts.ors, vec![vec![Literal::new("X", false), Literal::new("Y", false)]]);
/// assert_eq!(
///     parts.literals,
///     vec![
///         Literal::new("X", false),
///         Literal::new("Y", false),
///         Literal::new("Z", false),
///     ],
/// );
/// ```
pub fn decompose(e: &CExpression) -> Decomposed {
    let ands = match e.len() > 1 {
        true => Some(e.clone()),
        false => None,
    };

    let mut ors = Vec::new();
    let mut or_keys: HashSet<String> = HashSet::new();

    let mut literals = Vec::new();
    let mut literal_keys: HashSet<String> = HashSet::new();

    for clause in e {
        if clause.len() > 1 && or_keys.insert(clause.key()) {
            ors.push(clause.clone());
        }

        for literal in clause {
            if literal_keys.insert(literal.key()) {
                literals.push(literal.clone());
            }
        }
    }

    Decomposed {
        ands,
        ors,
        literals,
    }
}
