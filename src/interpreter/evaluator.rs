use crate::{
    error::ExpressionError,
    interpreter::{lexer::Token, operators},
};

/// Executes a postfix token sequence against a value stack and returns the
/// single integer result.
///
/// Numbers push their value; a unary operator pops one operand and a binary
/// operator pops two, right operand first. The sequence must reduce to
/// exactly one value. A `(` that leaked through an unmatched-parenthesis
/// expression is treated as an operator symbol and rejected here.
///
/// # Errors
/// - [`ExpressionError::MissingUnaryOperand`] or
///   [`ExpressionError::MissingBinaryOperands`] when the stack runs dry.
/// - [`ExpressionError::DivisionByZero`] for a zero right operand of `/` or
///   `%`.
/// - [`ExpressionError::UnknownOperator`] for symbols outside the table.
/// - [`ExpressionError::LeftoverOperands`] when anything other than one
///   value remains.
pub fn evaluate_postfix(postfix: Vec<Token>) -> Result<i64, ExpressionError> {
    let mut values: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => values.push(value),
            Token::Operator(symbol) => apply_operator(&symbol, &mut values)?,
            Token::LeftParen => apply_operator("(", &mut values)?,
            Token::RightParen => apply_operator(")", &mut values)?,
            Token::Ignored => {},
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        leftover => Err(ExpressionError::LeftoverOperands { count: leftover.len() }),
    }
}

/// Pops the operands an operator needs, applies it, and pushes the result.
/// Symbols the table does not list as unary take the binary path, consuming
/// exactly as many operands as a binary operator would.
fn apply_operator(symbol: &str, values: &mut Vec<i64>) -> Result<(), ExpressionError> {
    if operators::is_unary(symbol) {
        let Some(operand) = values.pop() else {
            return Err(ExpressionError::MissingUnaryOperand { symbol: symbol.to_string() });
        };
        values.push(apply_unary(symbol, operand)?);
    } else {
        let (right, left) = match (values.pop(), values.pop()) {
            (Some(right), Some(left)) => (right, left),
            _ => {
                return Err(ExpressionError::MissingBinaryOperands { symbol: symbol.to_string() });
            },
        };
        values.push(apply_binary(symbol, left, right)?);
    }

    Ok(())
}

/// Applies a unary operator to a single operand.
fn apply_unary(symbol: &str, operand: i64) -> Result<i64, ExpressionError> {
    match symbol {
        "!" => Ok(i64::from(operand == 0)),
        "++" => Ok(operand.wrapping_add(1)),
        "--" => Ok(operand.wrapping_sub(1)),
        operators::NEGATION => Ok(operand.wrapping_neg()),
        _ => Err(ExpressionError::UnknownOperator { symbol: symbol.to_string() }),
    }
}

/// Applies a binary operator to two operands. Logical and relational
/// operators yield exactly `1` or `0`, with any nonzero operand counting as
/// true. Exponentiation goes through a floating-point intermediate and
/// truncates, so very large exponents lose precision.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn apply_binary(symbol: &str, left: i64, right: i64) -> Result<i64, ExpressionError> {
    match symbol {
        "+" => Ok(left.wrapping_add(right)),
        "-" => Ok(left.wrapping_sub(right)),
        "*" => Ok(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            Ok(left.wrapping_div(right))
        },
        "%" => {
            if right == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            Ok(left.wrapping_rem(right))
        },
        "^" => Ok((left as f64).powf(right as f64) as i64),
        "==" => Ok(i64::from(left == right)),
        "!=" => Ok(i64::from(left != right)),
        ">" => Ok(i64::from(left > right)),
        "<" => Ok(i64::from(left < right)),
        ">=" => Ok(i64::from(left >= right)),
        "<=" => Ok(i64::from(left <= right)),
        "&&" => Ok(i64::from(left != 0 && right != 0)),
        "||" => Ok(i64::from(left != 0 || right != 0)),
        _ => Err(ExpressionError::UnknownOperator { symbol: symbol.to_string() }),
    }
}
