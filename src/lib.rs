//! # mathlogic
//!
//! mathlogic is an infix expression interpreter written in Rust.
//! It tokenizes, validates, and evaluates expressions mixing arithmetic,
//! comparison, and logical operators, with unary prefixes and parenthetical
//! grouping, producing a single integer result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
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

use crate::interpreter::{converter, evaluator, lexer, validator};

/// Provides the unified error type for validation and evaluation.
///
/// This module defines all errors that can be raised while checking or
/// executing an expression. It standardizes error reporting and carries
/// detailed information about failures, including token positions and the
/// offending operator symbols.
///
/// # Responsibilities
/// - Defines the `ExpressionError` enum covering every failure mode.
/// - Attaches token positions and symbols for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, validator, infix-to-postfix
/// converter, postfix evaluator, and the shared operator table to provide a
/// complete pipeline from raw text to an integer result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, validator, converter, evaluator.
/// - Hosts the operator table consulted by every stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an infix expression and returns its integer result.
///
/// The expression runs through four stages in order: tokenization,
/// structural validation, infix-to-postfix conversion, and postfix
/// evaluation. The first stage that detects a problem aborts the rest of the
/// pipeline and the error surfaces here.
///
/// # Errors
/// Returns an [`error::ExpressionError`] if the expression is structurally
/// malformed or fails during evaluation, for example on division by zero or
/// an unknown operator symbol.
///
/// # Examples
/// ```
/// use mathlogic::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512);
/// assert_eq!(evaluate("-3 + 5").unwrap(), 2);
///
/// // A leading binary operator is rejected before evaluation.
/// assert!(evaluate("* 3 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, error::ExpressionError> {
    let tokens = lexer::tokenize(expression);
    validator::validate(&tokens)?;
    let postfix = converter::convert_to_postfix(tokens);
    evaluator::evaluate_postfix(postfix)
}
