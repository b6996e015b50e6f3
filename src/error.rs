/// Pipeline errors.
///
/// Wraps the error of whichever stage failed first, plus the input-size and
/// self-test failures raised by the library entry points.
pub mod calc_error;
/// Infix to postfix conversion errors.
///
/// Covers unbalanced parentheses and tokens that cannot appear in an infix
/// sequence.
pub mod convert_error;
/// Postfix evaluation errors.
///
/// Covers missing operands, leftover values and, in strict mode, division by
/// zero and non-finite intermediate results.
pub mod evaluation_error;
/// Lexing errors.
///
/// Raised for illegal characters and malformed numeric literals.
pub mod lex_error;
/// Bounded stack errors.
///
/// Raised when a push would exceed the fixed capacity of a stack.
pub mod stack_error;

pub use calc_error::CalcError;
pub use convert_error::ConvertError;
pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use stack_error::StackError;
