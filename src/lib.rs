//! # shunt
//!
//! shunt is an arithmetic expression calculator written in Rust.
//! It tokenizes an expression, reorders the tokens from infix to postfix
//! order with the shunting-yard algorithm and reduces the postfix sequence to
//! a double-precision result.
//!
//! Supported syntax: decimal literals such as `3`, `0.25` or `44.4232`, the
//! binary operators `+ - * / ^` and parentheses. `^` is exponentiation and
//! groups to the right; every other operator groups to the left.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcError,
    interpreter::{
        converter::to_postfix as convert,
        evaluator::evaluate,
        lexer::lex,
        token::{Operator, Token, postfix_string, tokens_match},
    },
};

/// Runtime settings.
///
/// Declares the `Settings` struct that switches strict arithmetic on and
/// bounds the accepted expression length.
pub mod config;
/// Provides unified error types for every stage of evaluation.
///
/// Each stage (lexer, converter, evaluator) has its own error enum carrying
/// the position of the failure; `CalcError` wraps whichever stage failed.
pub mod error;
/// Orchestrates the three evaluation stages.
///
/// # Responsibilities
/// - Turns text into tokens (lexer).
/// - Reorders tokens into postfix order (converter).
/// - Reduces postfix tokens to a value (evaluator).
pub mod interpreter;

pub use config::Settings;

/// Evaluates an arithmetic expression with default settings.
///
/// The expression is lexed, converted to postfix order and evaluated. The
/// first failing stage ends the pipeline.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use shunt::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2/(2+2)*(2-3+2)+3-2").unwrap(), 1.5);
///
/// // Letters are not part of the language.
/// assert!(evaluate_expression("2 + x").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, CalcError> {
    evaluate_with(text, &Settings::default())
}

/// Evaluates an arithmetic expression with the given settings.
///
/// # Errors
/// Returns [`CalcError::InputTooLong`] if the expression exceeds
/// `settings.max_expression_len`, otherwise the error of the first stage
/// that fails.
pub fn evaluate_with(text: &str, settings: &Settings) -> Result<f64, CalcError> {
    if let Some(limit) = settings.max_expression_len {
        let length = text.chars().count();
        if length > limit {
            return Err(CalcError::InputTooLong { length, limit });
        }
    }

    let tokens = lex(text)?;
    let postfix = convert(&tokens)?;
    let result = evaluate(&postfix, settings)?;
    debug!(expression = text, result, "evaluated expression");
    Ok(result)
}

/// Lexes and converts an expression, returning the postfix token sequence.
///
/// # Errors
/// Returns the lexing or conversion error.
///
/// # Examples
/// ```
/// use shunt::{interpreter::token::postfix_string, to_postfix};
///
/// let postfix = to_postfix("2^3^2").unwrap();
/// assert_eq!(postfix_string(&postfix), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(text: &str) -> Result<Vec<Token>, CalcError> {
    Ok(convert(&lex(text)?)?)
}

/// Expected postfix form and value of the built-in pipeline checks.
const PIPELINE_CHECKS: [(&str, &str, f64); 6] =
    [("3+3*(3-1)", "3 3 3 1 - * +", 9.0),
     ("2+2", "2 2 +", 4.0),
     ("2+2-3+3-2", "2 2 + 3 - 3 + 2 -", 2.0),
     ("2+2*4/8-2", "2 2 4 * 8 / + 2 -", 1.0),
     ("2/(2+2)*(2-3+2)+3-2", "2 2 2 + / 2 3 - 2 + * 3 + 2 -", 1.5),
     ("2^3^2", "2 3 2 ^ ^", 512.0)];

/// Runs the built-in checks that the binary executes when started without an
/// expression.
///
/// Covers number span extraction, lexing, conversion and evaluation of a set
/// of known expressions. Returns the number of checks that passed.
///
/// # Errors
/// Returns [`CalcError::SelfTest`] naming the first check that does not hold,
/// or the pipeline error if a known-good expression fails to evaluate.
///
/// # Examples
/// ```
/// assert!(shunt::self_test().is_ok());
/// ```
pub fn self_test() -> Result<usize, CalcError> {
    let mut passed = 0;

    let numbers = lex("1.2/7+8+34+44.4232")?.into_iter()
                                            .filter_map(|t| match t {
                                                Token::Number(v) => Some(v),
                                                _ => None,
                                            })
                                            .collect::<Vec<_>>();
    check("number handling",
          numbers == [1.2, 7.0, 8.0, 34.0, 44.4232],
          || format!("expected [1.2, 7, 8, 34, 44.4232], found {numbers:?}"))?;
    passed += 1;

    let tokens = lex("(2+2)/5*65.4")?;
    let expected = [Token::LeftParen,
                    Token::Number(2.0),
                    Token::Operator(Operator::Add),
                    Token::Number(2.0),
                    Token::RightParen,
                    Token::Operator(Operator::Div),
                    Token::Number(5.0),
                    Token::Operator(Operator::Mul),
                    Token::Number(65.4),
                    Token::End];
    check("lexer",
          tokens_match(&tokens, &expected),
          || format!("unexpected tokens {tokens:?}"))?;
    passed += 1;

    for (expression, postfix, value) in PIPELINE_CHECKS {
        let converted = postfix_string(&to_postfix(expression)?);
        check("convert",
              converted == postfix,
              || format!("'{expression}' converted to '{converted}', expected '{postfix}'"))?;
        passed += 1;

        let result = evaluate_expression(expression)?;
        check("evaluate",
              (result - value).abs() < f64::EPSILON,
              || format!("'{expression}' evaluated to {result}, expected {value}"))?;
        passed += 1;
    }

    debug!(passed, "self-test finished");
    Ok(passed)
}

fn check(name: &'static str, holds: bool, details: impl FnOnce() -> String) -> Result<(), CalcError> {
    if holds {
        Ok(())
    } else {
        Err(CalcError::SelfTest { name,
                                  details: details() })
    }
}
