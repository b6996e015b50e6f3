/// The converter module reorders infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm over a bounded operator stack,
/// honoring operator precedence, left associativity of `+ - * /` and right
/// associativity of `^`. Parentheses are consumed during conversion.
pub mod converter;
/// The evaluator module reduces a postfix token sequence to a number.
///
/// # Responsibilities
/// - Applies operators to operands popped from a bounded value stack.
/// - Reports missing operands, leftover values and misplaced tokens.
/// - Optionally rejects division by zero and non-finite results.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// numbers, operators and parentheses, terminated by an end marker. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Skips whitespace and recognizes `( ) + - * / ^`.
/// - Reads numeric literals with at most one decimal point.
/// - Reports illegal characters and malformed literals with their position.
pub mod lexer;
/// A fixed-capacity LIFO container used by the converter and the evaluator.
pub mod stack;
/// Token and operator definitions shared by every stage, plus helpers over
/// end-terminated token sequences.
pub mod token;
