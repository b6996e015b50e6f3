use thiserror::Error;

use crate::{error::StackError, interpreter::token::Token};

/// Errors raised while reordering an infix token sequence into postfix order.
///
/// Positions are 0-based indices into the token sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A `)` with no `(` left on the operator stack.
    #[error("Unmatched closing parenthesis at token {position}.")]
    UnmatchedRightParen {
        /// Index of the `)` token.
        position: usize,
    },
    /// A `(` that was never closed.
    #[error("Unmatched opening parenthesis.")]
    UnmatchedLeftParen,
    /// A token that cannot appear where it was found.
    #[error("'{token}' is not a valid token in the expression (token {position}).")]
    InvalidToken {
        /// The offending token.
        token:    Token,
        /// Index of the token.
        position: usize,
    },
    /// The operator stack ran out of room.
    #[error(transparent)]
    Stack(#[from] StackError),
}
