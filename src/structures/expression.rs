//! Expressions, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! Every expression is in conjunctive normal form by construction: no clause nests a conjunction, and no conjunction nests inside a clause.
//! The invariant holds after every public operation --- parsing, the [combinators](crate::procedures::algebra), and the analyses.
//!
//! The empty expression conjoins nothing.
//! It is the identity element of the combinators --- 'no expression yet' --- and renders as the empty string.
//!
//! ```rust
//! # use cnf_expr::parser::parse;
//! # use cnf_expr::structures::expression::Expression;
//! let e = parse("(a || b) && c").unwrap();
//!
//! assert_eq!(e.as_string(), "(a || b) && c");
//! assert_eq!(e.format(" AND ", " OR ", "NOT "), "(a OR b) AND c");
//! ```

use crate::structures::clause::{CClause, Clause};

/// The implementation of an expression as a vector of clauses.
pub type CExpression = Vec<CClause>;

/// The expression trait.
pub trait Expression {
    /// The expression rendered with the given conjunction, disjunction, and negation operators.
    ///
    /// A clause is wrapped in parentheses only when the expression conjoins more than one clause and the clause holds more than one literal.
    fn format(&self, and_op: &str, or_op: &str, not_op: &str) -> String;

    /// The expression rendered with the default operators, `" && "`, `" || "`, and `"!"`.
    fn as_string(&self) -> String;
}

impl Expression for CExpression {
    fn format(&self, and_op: &str, or_op: &str, not_op: &str) -> String {
        let mut the_string = String::new();
        for (index, clause) in self.iter().enumerate() {
            if index > 0 {
                the_string.push_str(and_op);
            }
            let rendered = clause.format(or_op, not_op);
            match self.len() > 1 && clause.len() > 1 {
                true => {
                    the_string.push('(');
                    the_string.push_str(rendered.as_str());
                    the_string.push(')');
                }
                false => the_string.push_str(rendered.as_str()),
            }
        }
        the_string
    }

    fn as_string(&self) -> String {
        self.format(" && ", " || ", "!")
    }
}
