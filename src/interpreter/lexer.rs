use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::LexError,
    interpreter::token::{Operator, Token},
};

/// Failure reported by the generated lexer before positions are resolved.
///
/// `Unrecognized` is what `logos` produces for any input no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexFault {
    #[default]
    Unrecognized,
    /// Byte offset of the second `.` from the start of the number span.
    MultipleDecimalPoints { offset: usize },
}

/// Raw lexemes recognized in an expression.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// A digit followed by any run of digits and dots. Spans with more than
    /// one dot are rejected by the callback.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    #[regex(r"[+\-*/^]", parse_operator)]
    Operator(Operator),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Operator(op) => Self::Operator(op),
            Lexeme::LParen => Self::LeftParen,
            Lexeme::RParen => Self::RightParen,
        }
    }
}

/// Parses a number span, rejecting a second decimal point.
///
/// Digits with at most one dot always parse; literals beyond the range of
/// `f64` become infinity.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Result<f64, LexFault> {
    let slice = lex.slice();
    if let Some((offset, _)) = slice.match_indices('.').nth(1) {
        return Err(LexFault::MultipleDecimalPoints { offset });
    }
    slice.parse().map_err(|_| LexFault::Unrecognized)
}

fn parse_operator(lex: &mut logos::Lexer<Lexeme>) -> Option<Operator> {
    lex.slice().chars().next().and_then(Operator::from_symbol)
}

/// Converts a byte offset into `source` into a character index.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].chars().count()
}

/// Tokenizes an arithmetic expression.
///
/// Whitespace is skipped, `(` and `)` become delimiters, `+ - * / ^` become
/// operators and a digit starts a number span of digits and at most one
/// decimal point. The returned sequence always ends with [`Token::End`].
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for any other character.
/// - [`LexError::MultipleDecimalPoints`] for a number such as `1.2.3`.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::lex,
///     token::{Operator, Token},
/// };
///
/// let tokens = lex("(2 + 2) / 5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Number(2.0),
///                 Token::Operator(Operator::Add),
///                 Token::Number(2.0),
///                 Token::RightParen,
///                 Token::Operator(Operator::Div),
///                 Token::Number(5.0),
///                 Token::End]);
///
/// assert!(lex("2 + x").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let position = char_position(source, span.start);
        match lexeme {
            Ok(lexeme) => {
                trace!(?lexeme, position, "lexeme");
                tokens.push(lexeme.into());
            },
            Err(LexFault::Unrecognized) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character, position });
            },
            Err(LexFault::MultipleDecimalPoints { offset }) => {
                let position = char_position(source, span.start + offset);
                return Err(LexError::MultipleDecimalPoints { position });
            },
        }
    }

    tokens.push(Token::End);
    debug!(count = tokens.len() - 1, "lexed expression");
    Ok(tokens)
}
