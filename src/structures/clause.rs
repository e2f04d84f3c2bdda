//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use cnf_expr::structures::clause::{CClause, Clause};
//! # use cnf_expr::structures::literal::Literal;
//! let clause: CClause = vec![Literal::new("a", false), Literal::new("b", true)];
//!
//! assert_eq!(clause.as_string(), "a || (!b)");
//! assert_eq!(clause.format(" OR ", "NOT "), "a OR (NOT b)");
//! ```
//!
//! A clause of one literal is identified with that literal, and in particular shares its [key](Clause::key).

use crate::structures::literal::Literal;

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// The canonical identity of the clause, for set membership and deduplication.
    fn key(&self) -> String;

    /// The clause rendered with the given disjunction and negation operators.
    fn format(&self, or_op: &str, not_op: &str) -> String;

    /// The clause rendered with the default operators, `" || "` and `"!"`.
    fn as_string(&self) -> String;
}

impl Clause for CClause {
    fn key(&self) -> String {
        self.as_string()
    }

    fn format(&self, or_op: &str, not_op: &str) -> String {
        let mut the_string = String::new();
        for (index, literal) in self.iter().enumerate() {
            if index > 0 {
                the_string.push_str(or_op);
            }
            the_string.push_str(literal.format(not_op).as_str());
        }
        the_string
    }

    fn as_string(&self) -> String {
        self.format(" || ", "!")
    }
}
