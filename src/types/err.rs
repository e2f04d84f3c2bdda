//! Error types used in the library.
//!
//! Parsing is the only fallible operation, and parsing stops at the first error.
//! The combinators and analyses are total over well-formed expressions, so a [ParseError] is the only error a caller will meet.

/// The condition a [ParseError] reports.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A character the lexer has no token for.
    UnexpectedCharacter(char),

    /// A required token was missing (`got` is none, e.g. at the end of the input) or a different token was found.
    ///
    /// `expected` is a rendered description such as `"')'"` or `"'&&' or '||'"`.
    Expected {
        expected: String,
        got: Option<String>,
    },

    /// `&&` and `||` were used at the same nesting level without parentheses.
    MixedOperators,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(character) => {
                write!(f, "unexpected character '{character}'")
            }
            Self::Expected {
                expected,
                got: None,
            } => write!(f, "expected {expected}"),
            Self::Expected {
                expected,
                got: Some(text),
            } => write!(f, "expected {expected}, got '{text}'"),
            Self::MixedOperators => write!(f, "cannot mix '&&' and '||' without parentheses"),
        }
    }
}

/// A parse error: the condition met, the byte span of the offending text, and the original source.
///
/// The rendered form of the error points at the span:
///
/// ```rust
/// # use cnf_expr::parser::parse;
/// let error = parse("a ^ b").unwrap_err();
///
/// assert_eq!(
///     error.to_string(),
///     "a ^ b\n  ^\n\nunexpected character '^'",
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The condition met.
    pub kind: ParseErrorKind,

    /// The byte offset at which the offending text starts.
    pub start: usize,

    /// The byte offset at which the offending text ends.
    pub end: usize,

    /// The source the error was raised on.
    pub source: String,
}

impl ParseError {
    /// A fresh parse error over the given span of `source`.
    pub fn new(kind: ParseErrorKind, start: usize, end: usize, source: &str) -> Self {
        Self {
            kind,
            start,
            end,
            source: source.to_owned(),
        }
    }

    /// The message for the condition met, without the source context.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let carets = std::cmp::max(1, self.end.saturating_sub(self.start));
        write!(
            f,
            "{}\n{}{}\n\n{}",
            self.source,
            " ".repeat(self.start),
            "^".repeat(carets),
            self.kind,
        )
    }
}

impl std::error::Error for ParseError {}
