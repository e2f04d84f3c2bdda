/*!
Recursive-descent parsing of boolean expressions into conjunctive normal form.

# Grammar

```text
binary := unary (('&&' unary)* | ('||' unary)*)
unary  := '!' unary | '(' binary ')' | identifier
```

`&&` and `||` may not be mixed at one nesting level: `X || Y && Z` is rejected rather than resolved by a precedence rule, and the parentheses in `(X || Y) && Z` or `X || (Y && Z)` are required.

Sub-expressions are combined with the [algebra](crate::procedures::algebra) combinators as the grammar is resolved, so a parse result is always a valid CNF expression and no separate normalization pass exists.

# Examples

```rust
# use cnf_expr::parser::parse;
# use cnf_expr::structures::expression::Expression;
let e = parse("(a || b) && !c")?;
assert_eq!(e.as_string(), "(a || b) && (!c)");

let e = parse("!(a && b)")?;
assert_eq!(e.as_string(), "(!a) || (!b)");
# Ok::<(), cnf_expr::types::err::ParseError>(())
```

A failed parse reports the span of the offending text:

```rust
# use cnf_expr::parser::parse;
let error = parse("X || Y && Z").unwrap_err();

assert_eq!(error.message(), "cannot mix '&&' and '||' without parentheses");
assert_eq!((error.start, error.end), (7, 9));
```
*/

pub mod lexer;

use crate::{
    misc::log::targets,
    procedures::algebra,
    structures::{expression::CExpression, literal::Literal},
    types::err::{ParseError, ParseErrorKind},
};

use self::lexer::{lex, Token, TokenKind};

/// Parses `source` into a CNF expression.
///
/// Empty input contains no expression and parses to the empty expression, which is not an error.
/// Callers for whom 'no expression' and 'the identity expression' differ should check for the empty case themselves.
pub fn parse(source: &str) -> Result<CExpression, ParseError> {
    let tokens = lex(source)?;
    if tokens.is_empty() {
        return Ok(CExpression::default());
    }

    let mut parser = Parser {
        source,
        tokens: &tokens,
        index: 0,
    };

    let expression = parser.binary()?;

    if let Some(token) = parser.peek() {
        return Err(parser.expected_got("'&&' or '||'", token));
    }

    log::trace!(
        target: targets::PARSER,
        "parsed {:?} into {} clauses",
        source,
        expression.len(),
    );

    Ok(expression)
}

/// A cursor over the token stream for the descent.
struct Parser<'s, 't> {
    source: &'s str,
    tokens: &'t [Token],
    index: usize,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Consumes a token of the given kind, or reports what was found instead.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(self.expected(format!("'{kind}'"))),
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(self.expected_got(format!("'{kind}'"), token)),
        }
    }

    /// A missing-token error, pointing past the end of the source.
    fn expected(&self, expected: impl Into<String>) -> ParseError {
        let at = self.source.len();
        ParseError::new(
            ParseErrorKind::Expected {
                expected: expected.into(),
                got: None,
            },
            at,
            at,
            self.source,
        )
    }

    /// A wrong-token error, pointing at the token found.
    fn expected_got(&self, expected: impl Into<String>, token: Token) -> ParseError {
        ParseError::new(
            ParseErrorKind::Expected {
                expected: expected.into(),
                got: Some(token.text(self.source).to_owned()),
            },
            token.start,
            token.end,
            self.source,
        )
    }

    /// `binary := unary (('&&' unary)* | ('||' unary)*)`
    ///
    /// The operator for the level is fixed by the first operator seen; meeting the other operator is an error.
    fn binary(&mut self) -> Result<CExpression, ParseError> {
        let mut expression = self.unary()?;

        let operator = match self.peek() {
            Some(token) if matches!(token.kind, TokenKind::And | TokenKind::Or) => token.kind,
            _ => return Ok(expression),
        };

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::And | TokenKind::Or if token.kind != operator => {
                    return Err(ParseError::new(
                        ParseErrorKind::MixedOperators,
                        token.start,
                        token.end,
                        self.source,
                    ));
                }

                TokenKind::And => {
                    self.advance();
                    let rhs = self.unary()?;
                    expression = algebra::and(&expression, &rhs);
                }

                TokenKind::Or => {
                    self.advance();
                    let rhs = self.unary()?;
                    expression = algebra::or(&expression, &rhs);
                }

                _ => break,
            }
        }

        Ok(expression)
    }

    /// `unary := '!' unary | '(' binary ')' | identifier`
    fn unary(&mut self) -> Result<CExpression, ParseError> {
        let token = match self.peek() {
            None => return Err(self.expected("'identifier'")),
            Some(token) => token,
        };

        match token.kind {
            TokenKind::Not => {
                self.advance();
                let inner = self.unary()?;
                Ok(algebra::not(&inner))
            }

            TokenKind::LeftParen => {
                self.advance();
                let inner = self.binary()?;
                self.expect(TokenKind::RightParen)?;
                Ok(inner)
            }

            TokenKind::Identifier => {
                self.advance();
                let literal = Literal::new(token.text(self.source), false);
                Ok(vec![vec![literal]])
            }

            _ => Err(self.expected_got("'identifier'", token)),
        }
    }
}
