use crate::{
    error::ExpressionError,
    interpreter::{lexer::Token, operators},
};

/// Checks a token sequence for structural malformations.
///
/// Tokens are scanned in order and the first violation aborts the pipeline.
/// Only shapes that are cheap to detect positionally are checked here;
/// parenthesis balance, operand-count sufficiency, and a trailing unary
/// operator surface later as evaluation-time errors.
///
/// # Errors
/// - [`ExpressionError::LeadingClosingParen`] if the sequence starts with
///   `)`.
/// - [`ExpressionError::LeadingBinaryOperator`] if it starts with a binary
///   operator.
/// - [`ExpressionError::ConsecutiveBinaryOperators`] on two binary operators
///   in a row.
/// - [`ExpressionError::ConsecutiveOperands`] on two numbers in a row.
/// - [`ExpressionError::UnaryBeforeBinary`] on a unary operator immediately
///   followed by a binary operator.
pub fn validate(tokens: &[Token]) -> Result<(), ExpressionError> {
    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| tokens.get(p));
        let next = tokens.get(i + 1);

        if i == 0 && matches!(token, Token::RightParen) {
            return Err(ExpressionError::LeadingClosingParen);
        }

        if i == 0 && is_binary(token) {
            return Err(ExpressionError::LeadingBinaryOperator);
        }

        if is_binary(token) && prev.is_some_and(is_binary) {
            return Err(ExpressionError::ConsecutiveBinaryOperators { position: i });
        }

        if matches!(token, Token::Number(_)) && matches!(prev, Some(Token::Number(_))) {
            return Err(ExpressionError::ConsecutiveOperands { position: i });
        }

        if is_unary(token) && next.is_some_and(is_binary) {
            return Err(ExpressionError::UnaryBeforeBinary { position: i + 1 });
        }
    }

    Ok(())
}

/// Whether the token is a binary operator known to the table. Unknown
/// symbols are neither binary nor unary here; they are rejected during
/// evaluation instead.
fn is_binary(token: &Token) -> bool {
    matches!(token, Token::Operator(symbol) if operators::is_binary(symbol))
}

/// Whether the token is a unary operator known to the table.
fn is_unary(token: &Token) -> bool {
    matches!(token, Token::Operator(symbol) if operators::is_unary(symbol))
}
