//! Tokenization of expression source text.
//!
//! The lexer splits a source string into spanned [Token]s and is the only place character-level validation happens: identifiers are letters and underscores, operators are `!`, `&&`, `||` and parentheses, and whitespace is insignificant.
//! Anything else is an [unexpected character](crate::types::err::ParseErrorKind::UnexpectedCharacter) --- including a lone `&` or `|`.

use crate::types::err::{ParseError, ParseErrorKind};

/// The kinds of token in an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// An opening parenthesis.
    LeftParen,

    /// A closing parenthesis.
    RightParen,

    /// The negation operator `!`.
    Not,

    /// The conjunction operator `&&`.
    And,

    /// The disjunction operator `||`.
    Or,

    /// A variable name: one or more letters and underscores.
    Identifier,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Not => write!(f, "!"),
            Self::And => write!(f, "&&"),
            Self::Or => write!(f, "||"),
            Self::Identifier => write!(f, "identifier"),
        }
    }
}

/// A token, identified by the byte span of its text in the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,

    /// The byte offset at which the token starts.
    pub start: usize,

    /// The byte offset at which the token ends.
    pub end: usize,
}

impl Token {
    /// The text of the token within its source.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// Splits `source` into tokens, or reports the first character outside the grammar.
///
/// An empty (or all-whitespace) source lexes to no tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, character)) = chars.next() {
        match character {
            character if character.is_whitespace() => {}

            '(' => tokens.push(Token {
                kind: TokenKind::LeftParen,
                start,
                end: start + 1,
            }),

            ')' => tokens.push(Token {
                kind: TokenKind::RightParen,
                start,
                end: start + 1,
            }),

            '!' => tokens.push(Token {
                kind: TokenKind::Not,
                start,
                end: start + 1,
            }),

            '&' | '|' => match chars.peek() {
                Some(&(_, next)) if next == character => {
                    chars.next();
                    let kind = match character {
                        '&' => TokenKind::And,
                        _ => TokenKind::Or,
                    };
                    tokens.push(Token {
                        kind,
                        start,
                        end: start + 2,
                    });
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedCharacter(character),
                        start,
                        start + 1,
                        source,
                    ))
                }
            },

            'A'..='Z' | 'a'..='z' | '_' => {
                let mut end = start + 1;
                while let Some(&(_, next)) = chars.peek() {
                    match next {
                        'A'..='Z' | 'a'..='z' | '_' => {
                            end += 1;
                            chars.next();
                        }
                        _ => break,
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Identifier,
                    start,
                    end,
                });
            }

            character => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter(character),
                    start,
                    start + character.len_utf8(),
                    source,
                ))
            }
        }
    }

    Ok(tokens)
}
