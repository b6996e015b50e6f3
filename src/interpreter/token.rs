use std::fmt;

/// A binary arithmetic operator.
///
/// Each operator knows its symbol, its binding strength and its grouping
/// direction, which is everything the shunting-yard converter needs, and how
/// to reduce two operands, which is everything the evaluator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Grouping direction of operators with equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength: `+ -` < `* /` < `^`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Only `^` groups to the right.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operator with IEEE-754 semantics; `^` is `left.powf(right)`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The unit flowing through every stage of the pipeline.
///
/// A token sequence is a `Vec<Token>` terminated by [`Token::End`]. Stages
/// stop scanning at the first `End`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, or an intermediate value.
    Number(f64),
    /// One of `+ - * / ^`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Terminates a token sequence.
    End,
}

impl Token {
    /// The single-character name used in token listings: `n` for numbers,
    /// the symbol for everything else and `\0` for the end marker.
    #[must_use]
    pub const fn name(self) -> char {
        match self {
            Self::Number(_) => 'n',
            Self::Operator(op) => op.symbol(),
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::End => '\0',
        }
    }

    /// The numeric payload, zero for every token but [`Token::Number`].
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Number(value) => value,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::End => Ok(()),
        }
    }
}

/// Number of tokens before the first [`Token::End`], or the whole slice if
/// there is none.
///
/// # Example
/// ```
/// use shunt::interpreter::token::{Token, token_len};
///
/// assert_eq!(token_len(&[Token::Number(1.0), Token::End, Token::Number(2.0)]), 1);
/// assert_eq!(token_len(&[Token::LeftParen, Token::RightParen]), 2);
/// ```
#[must_use]
pub fn token_len(tokens: &[Token]) -> usize {
    tokens.iter()
          .position(|t| *t == Token::End)
          .unwrap_or(tokens.len())
}

/// Compares two sequences token by token up to the end marker.
#[must_use]
pub fn tokens_match(left: &[Token], right: &[Token]) -> bool {
    left[..token_len(left)] == right[..token_len(right)]
}

/// Renders the tokens before the end marker separated by single spaces.
///
/// # Example
/// ```
/// use shunt::interpreter::token::{Operator, Token, postfix_string};
///
/// let tokens = [Token::Number(2.0), Token::Number(2.0), Token::Operator(Operator::Add), Token::End];
/// assert_eq!(postfix_string(&tokens), "2 2 +");
/// ```
#[must_use]
pub fn postfix_string(tokens: &[Token]) -> String {
    tokens[..token_len(tokens)].iter()
                               .map(ToString::to_string)
                               .collect::<Vec<_>>()
                               .join(" ")
}

/// Renders one line per token in the form `Token\t<name>\t<value>`, with the
/// value in fixed six-digit notation. The end marker is not listed.
#[must_use]
pub fn token_table(tokens: &[Token]) -> String {
    tokens[..token_len(tokens)].iter()
                               .map(|t| format!("Token\t{}\t{:.6}\n", t.name(), t.value()))
                               .collect()
}
