//! Literals --- a variable name paired with a negation flag.
//!
//! Two literals are equal exactly when both the variable and the flag match; a variable and its negation are distinct literals.
//!
//! ```rust
//! # use cnf_expr::structures::literal::Literal;
//! let literal = Literal::new("swiftshader", false);
//!
//! assert_eq!(literal.to_string(), "swiftshader");
//! assert_eq!(literal.negate().to_string(), "(!swiftshader)");
//!
//! assert_eq!(literal.negate().negate(), literal);
//! ```

/// A variable name paired with a negation flag.
///
/// Immutable once built; [negate](Literal::negate) returns a fresh literal with the flag flipped.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal {
    /// The variable of the literal.
    variable: String,

    /// Whether the variable is negated.
    negate: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable name with a negation flag.
    ///
    /// No validation is performed on the name; malformed names are a parser concern.
    pub fn new(variable: impl Into<String>, negate: bool) -> Self {
        Self {
            variable: variable.into(),
            negate,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Whether the variable is negated.
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            negate: !self.negate,
        }
    }

    /// The canonical identity of the literal, for set membership and deduplication.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The literal rendered with the given negation operator.
    ///
    /// A negated literal is wrapped in parentheses, so the rendering composes with clause rendering without ambiguity.
    pub fn format(&self, not_op: &str) -> String {
        match self.negate {
            true => format!("({}{})", not_op, self.variable),
            false => self.variable.clone(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.format("!"))
    }
}
