use tracing::{debug, trace};

use crate::{
    config::Settings,
    error::EvaluationError,
    interpreter::{
        stack::BoundedStack,
        token::{Operator, Token, token_len},
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Reduces a postfix token sequence to a single value with default settings.
///
/// # Errors
/// See [`evaluate`].
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     evaluator::evaluate_postfix,
///     token::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(3.0),
///                Token::Number(3.0),
///                Token::Number(3.0),
///                Token::Number(1.0),
///                Token::Operator(Operator::Sub),
///                Token::Operator(Operator::Mul),
///                Token::Operator(Operator::Add),
///                Token::End];
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 9.0);
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> EvalResult<f64> {
    evaluate(postfix, &Settings::default())
}

/// Reduces a postfix token sequence to a single value.
///
/// Numbers are pushed onto a value stack. An operator pops its right operand
/// first and its left operand second, applies itself and pushes the result.
/// Exactly one value must remain once the end marker is reached.
///
/// Unless `settings.strict_arithmetic` is set, division by zero and other
/// floating-point edge cases yield `inf` or `NaN` rather than an error.
///
/// # Errors
/// - [`EvaluationError::StackUnderflow`] when an operator lacks an operand.
/// - [`EvaluationError::UnexpectedToken`] for parentheses or tokens after
///   the end marker.
/// - [`EvaluationError::EmptyExpression`] when there is nothing to evaluate.
/// - [`EvaluationError::TooManyOperands`] when values are left over.
/// - [`EvaluationError::DivisionByZero`],
///   [`EvaluationError::NonFiniteResult`] and
///   [`EvaluationError::NonFiniteLiteral`] in strict mode.
pub fn evaluate(postfix: &[Token], settings: &Settings) -> EvalResult<f64> {
    let len = token_len(postfix);
    if let Some(&token) = postfix.get(len + 1) {
        return Err(EvaluationError::UnexpectedToken { token,
                                                      position: len + 1 });
    }

    let mut values = BoundedStack::with_capacity(len);

    for (position, &token) in postfix[..len].iter().enumerate() {
        match token {
            Token::Number(value) => {
                if settings.strict_arithmetic && !value.is_finite() {
                    return Err(EvaluationError::NonFiniteLiteral { position });
                }
                values.push(value)?;
            },
            Token::Operator(operator) => {
                let underflow = EvaluationError::StackUnderflow { operator, position };
                let right = values.pop().ok_or_else(|| underflow.clone())?;
                let left = values.pop().ok_or(underflow)?;
                let result = reduce(operator, left, right, position, settings)?;
                trace!(%left, %operator, %right, %result, "reduced");
                values.push(result)?;
            },
            Token::LeftParen | Token::RightParen | Token::End => {
                return Err(EvaluationError::UnexpectedToken { token, position });
            },
        }
    }

    let result = values.pop().ok_or(EvaluationError::EmptyExpression)?;
    if !values.is_empty() {
        return Err(EvaluationError::TooManyOperands { remaining: values.len() + 1 });
    }

    debug!(result, "evaluated postfix expression");
    Ok(result)
}

/// Applies one operator, enforcing strict arithmetic when requested.
fn reduce(operator: Operator,
          left: f64,
          right: f64,
          position: usize,
          settings: &Settings)
          -> EvalResult<f64> {
    if settings.strict_arithmetic && operator == Operator::Div && right == 0.0 {
        return Err(EvaluationError::DivisionByZero { position });
    }

    let result = operator.apply(left, right);
    if settings.strict_arithmetic && !result.is_finite() {
        return Err(EvaluationError::NonFiniteResult { operator, position });
    }
    Ok(result)
}
