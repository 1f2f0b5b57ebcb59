/// The converter module reorders infix tokens into postfix form.
///
/// The converter applies the shunting-yard algorithm to the validated token
/// sequence, using an explicit operator stack to honor precedence,
/// associativity, and parenthetical grouping. Its output needs neither
/// parentheses nor precedence to evaluate.
///
/// # Responsibilities
/// - Appends operands directly to the output sequence.
/// - Reorders operators according to the shared operator table.
/// - Resolves parenthetical grouping, tolerating unmatched parentheses.
pub mod converter;
/// The evaluator module executes postfix token sequences.
///
/// The evaluator walks the postfix sequence with a value stack, applying
/// unary and binary operator semantics, and produces the single integer
/// result of the expression.
///
/// # Responsibilities
/// - Pushes operands and applies operators against the value stack.
/// - Reports runtime errors such as division by zero or missing operands.
/// - Rejects sequences that do not reduce to exactly one value.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer (tokenizer) reads the raw input and produces the token sequence
/// consumed by every later stage. This is the first stage of interpretation
/// and it never fails: unrecognized characters pass through as literal
/// operator tokens for later stages to reject.
///
/// # Responsibilities
/// - Converts the input character stream into numbers, operators, and
///   parentheses, skipping whitespace.
/// - Matches two-character operator symbols before single characters.
/// - Rewrites a unary minus into the synthetic `neg` operator.
pub mod lexer;
/// The operators module is the shared operator table.
///
/// This module is the single source of truth for operator behavior. Every
/// stage that needs the precedence, associativity, or arity of a symbol
/// consults it; none of them re-derive operator metadata on their own.
///
/// # Responsibilities
/// - Defines the descriptor for each supported operator symbol.
/// - Answers lookups by symbol, including the synthetic `neg`.
/// - Stays immutable for the lifetime of the process.
pub mod operators;
/// The validator module checks token sequences for structural errors.
///
/// The validator inspects the lexer's output before any evaluation is
/// attempted, rejecting malformed shapes such as consecutive binary
/// operators or consecutive operands. Checks that require evaluation state,
/// like operand-count sufficiency, are deferred to the evaluator.
///
/// # Responsibilities
/// - Scans tokens in order and fails on the first violation.
/// - Reports the token position of each violation.
/// - Leaves parenthesis balance to the evaluation stage.
pub mod validator;
