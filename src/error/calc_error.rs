use thiserror::Error;

use crate::error::{ConvertError, EvaluationError, LexError};

/// Errors returned by the full lex → convert → evaluate pipeline.
///
/// The pipeline stops at the first failing stage, so exactly one stage error
/// is ever wrapped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Tokenizing failed.
    #[error("Lexing error: {0}")]
    Lex(#[from] LexError),
    /// Infix to postfix conversion failed.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
    /// Postfix evaluation failed.
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
    /// The expression is longer than the configured limit.
    #[error("Expression of {length} characters exceeds the limit of {limit}.")]
    InputTooLong {
        /// Length of the rejected expression, in characters.
        length: usize,
        /// The configured limit.
        limit:  usize,
    },
    /// A built-in self-test check did not hold.
    #[error("Self-test '{name}' failed: {details}")]
    SelfTest {
        /// Name of the failed check.
        name:    &'static str,
        /// What was expected and what was found.
        details: String,
    },
}
