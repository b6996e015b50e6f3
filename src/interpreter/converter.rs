use tracing::debug;

use crate::{
    error::ConvertError,
    interpreter::{
        stack::BoundedStack,
        token::{Associativity, Operator, Token, postfix_string, token_len},
    },
};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Returns `true` if `top`, sitting on the operator stack, must be emitted
/// before `incoming` is pushed.
///
/// Higher precedence always goes first. Equal precedence goes first unless
/// the incoming operator groups to the right, so `2^3^2` keeps both `^` on
/// the stack until the end.
const fn pops_before(top: Operator, incoming: Operator) -> bool {
    top.precedence() > incoming.precedence()
    || (top.precedence() == incoming.precedence()
        && matches!(incoming.associativity(), Associativity::Left))
}

/// Reorders an infix token sequence into postfix order with the
/// shunting-yard algorithm.
///
/// Scanning stops at the first [`Token::End`]. Numbers go straight to the
/// output, operators wait on a stack until an operator of lower precedence
/// (or a closing parenthesis, or the end of input) releases them.
/// Parentheses are consumed and never appear in the output, which is itself
/// terminated by [`Token::End`].
///
/// # Errors
/// - [`ConvertError::UnmatchedRightParen`] for a `)` without its `(`.
/// - [`ConvertError::UnmatchedLeftParen`] for a `(` that is never closed.
/// - [`ConvertError::InvalidToken`] for tokens following the end marker.
///
/// # Example
/// ```
/// use shunt::interpreter::{converter::to_postfix, lexer::lex, token::postfix_string};
///
/// let postfix = to_postfix(&lex("3+3*(3-1)").unwrap()).unwrap();
/// assert_eq!(postfix_string(&postfix), "3 3 3 1 - * +");
/// ```
pub fn to_postfix(infix: &[Token]) -> ConvertResult<Vec<Token>> {
    let len = token_len(infix);
    if let Some(&token) = infix.get(len + 1) {
        return Err(ConvertError::InvalidToken { token,
                                                position: len + 1 });
    }

    let mut stack = BoundedStack::with_capacity(len);
    let mut output = Vec::with_capacity(len + 1);

    for (position, &token) in infix.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.peek()
                      && pops_before(top, op)
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token)?;
            },
            Token::LeftParen => stack.push(token)?,
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ConvertError::UnmatchedRightParen { position }),
                }
            },
            Token::End => break,
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(ConvertError::UnmatchedLeftParen);
        }
        output.push(top);
    }
    output.push(Token::End);

    debug!(postfix = %postfix_string(&output), "converted to postfix");
    Ok(output)
}
