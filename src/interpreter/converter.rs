use crate::interpreter::{lexer::Token, operators};

/// Reorders an infix token sequence into postfix (Reverse Polish) form.
///
/// The shunting-yard algorithm with an explicit operator stack: numbers go
/// straight to the output, parentheses group, and operators pop the stack
/// according to precedence and associativity before being pushed. Unmatched
/// parentheses are tolerated: a stray `)` stops popping when the stack runs
/// out, and a stray `(` left on the stack drains into the output, where the
/// evaluator rejects it.
///
/// # Examples
/// ```
/// use mathlogic::interpreter::{converter, lexer};
///
/// let postfix = converter::convert_to_postfix(lexer::tokenize("1 + 2 * 3"));
/// let rendered: Vec<String> = postfix.iter().map(|t| format!("{t:?}")).collect();
/// assert_eq!(rendered.join(" "),
///            "Number(1) Number(2) Number(3) Operator(\"*\") Operator(\"+\")");
/// ```
#[must_use]
pub fn convert_to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::LeftParen => stack.push(token),

            Token::RightParen => {
                // Pop to the output until the matching '(' is discarded.
                // An unmatched ')' exhausts the stack and simply stops.
                while let Some(top) = stack.pop() {
                    if matches!(top, Token::LeftParen) {
                        break;
                    }
                    output.push(top);
                }
            },

            Token::Operator(ref symbol) => {
                while matches!(stack.last(), Some(Token::Operator(top)) if yields_to(symbol, top))
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(token);
            },

            Token::Ignored => {},
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    output
}

/// Whether an incoming operator must let the operator on top of the stack
/// pop to the output first. Right-associative operators yield only to
/// strictly tighter-binding operators, so equal-precedence chains group
/// right to left; left-associative operators also yield on equal precedence.
fn yields_to(symbol: &str, top: &str) -> bool {
    let precedence = operators::precedence(symbol);
    let top_precedence = operators::precedence(top);

    if operators::is_right_associative(symbol) {
        precedence < top_precedence
    } else {
        precedence <= top_precedence
    }
}
