use thiserror::Error;

use crate::{
    error::StackError,
    interpreter::token::{Operator, Token},
};

/// Errors raised while reducing a postfix token sequence to a value.
///
/// Positions are 0-based indices into the postfix sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// An operator found fewer than two operands on the value stack.
    #[error("Operator '{operator}' at token {position} is missing an operand.")]
    StackUnderflow {
        /// The operator being applied.
        operator: Operator,
        /// Index of the operator token.
        position: usize,
    },
    /// A token that has no meaning in postfix order, such as a parenthesis.
    #[error("Unexpected token '{token}' at position {position} of the postfix expression.")]
    UnexpectedToken {
        /// The offending token.
        token:    Token,
        /// Index of the token.
        position: usize,
    },
    /// Nothing to evaluate.
    #[error("Nothing to calculate.")]
    EmptyExpression,
    /// More than one value was left once every operator had been applied.
    #[error("Too many numbers: {remaining} values left on the stack.")]
    TooManyOperands {
        /// How many values were left.
        remaining: usize,
    },
    /// A division by zero in strict mode.
    #[error("Division by zero at token {position}.")]
    DivisionByZero {
        /// Index of the `/` token.
        position: usize,
    },
    /// An infinite or NaN intermediate result in strict mode.
    #[error("Operator '{operator}' at token {position} produced a non-finite result.")]
    NonFiniteResult {
        /// The operator that produced the value.
        operator: Operator,
        /// Index of the operator token.
        position: usize,
    },
    /// A number literal too large for `f64` in strict mode.
    #[error("Number at token {position} is too large to represent.")]
    NonFiniteLiteral {
        /// Index of the number token.
        position: usize,
    },
    /// The value stack ran out of room.
    #[error(transparent)]
    Stack(#[from] StackError),
}
