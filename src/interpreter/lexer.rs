use logos::Logos;

use crate::interpreter::operators;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Two-character operator symbols are listed alongside the one-character
/// ones; maximal munch guarantees they win whenever both could match, so
/// `>=` never lexes as `>` followed by `=`. The lowest-priority catch-all
/// turns any character the table does not know into a literal one-character
/// operator token, which the evaluator later rejects.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Values are non-negative here;
    /// sign is handled through the unary minus rewrite.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Operator tokens, carrying their symbol verbatim.
    #[token("||", symbol)]
    #[token("&&", symbol)]
    #[token("==", symbol)]
    #[token("!=", symbol)]
    #[token(">=", symbol)]
    #[token("<=", symbol)]
    #[token("++", symbol)]
    #[token("--", symbol)]
    #[token(">", symbol)]
    #[token("<", symbol)]
    #[token("+", symbol)]
    #[token("-", symbol)]
    #[token("*", symbol)]
    #[token("/", symbol)]
    #[token("%", symbol)]
    #[token("^", symbol)]
    #[token("!", symbol)]
    #[regex(r".", symbol, priority = 1)]
    Operator(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Returns the current token slice as an owned operator symbol.
fn symbol(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit in an `i64`; the slice
/// then degrades into an operator token that evaluation rejects.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Turns raw expression text into an ordered token sequence.
///
/// This stage never fails; malformed input is deferred to the validator and
/// evaluator. A `-` lexed where a value is expected next is rewritten into
/// the synthetic unary [`operators::NEGATION`] operator. The two-character
/// match runs first, so `--3` lexes as the decrement operator applied to
/// `3`, while `- -3` lexes as two consecutive negations.
///
/// # Examples
/// ```
/// use mathlogic::interpreter::lexer::{self, Token};
///
/// let tokens = lexer::tokenize("-3 + 5");
/// assert_eq!(tokens,
///            vec![Token::Operator("neg".to_string()),
///                 Token::Number(3),
///                 Token::Operator("+".to_string()),
///                 Token::Number(5)]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let token = match token {
            Ok(token) => token,
            // Only an oversized integer literal reaches this branch; the
            // catch-all rule absorbs every unrecognized character.
            Err(()) => Token::Operator(lexer.slice().to_string()),
        };

        match token {
            Token::Operator(ref s) if s == "-" && expects_value(tokens.last()) => {
                tokens.push(Token::Operator(operators::NEGATION.to_string()));
            },
            token => tokens.push(token),
        }
    }

    tokens
}

/// Whether the position after `previous` expects a value rather than a
/// binary operator. This is the context in which `-` means negation: at the
/// start of input, after an opening parenthesis, or after an operator the
/// table knows.
fn expects_value(previous: Option<&Token>) -> bool {
    match previous {
        None | Some(Token::LeftParen) => true,
        Some(Token::Operator(symbol)) => operators::lookup(symbol).is_some(),
        Some(_) => false,
    }
}
