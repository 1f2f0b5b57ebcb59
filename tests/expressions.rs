use mathlogic::{error::ExpressionError, evaluate};

fn assert_result(expression: &str, expected: i64) {
    match evaluate(expression) {
        Ok(result) => assert_eq!(result, expected, "wrong result for '{expression}'"),
        Err(e) => panic!("Expression '{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) {
    if evaluate(expression).is_ok() {
        panic!("Expression '{expression}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", 3);
    assert_result("8 - 5", 3);
    assert_result("7 * 9", 63);
    assert_result("10 / 2", 5);
    assert_result("10 / 3", 3);
    assert_result("7 % 3", 1);
    assert_result("100", 100);
}

#[test]
fn precedence_and_grouping() {
    assert_result("1 + 2 * 3", 7);
    assert_result("(1 + 2) * 3", 9);
    assert_result("2 * (3 + 4)", 14);
    assert_result("20 - 2 * 3 + 1", 15);
    assert_result("100 / 10 / 5", 2);
}

#[test]
fn exponentiation_right_associates() {
    assert_result("2 ^ 10", 1024);
    assert_result("2 ^ 3 ^ 2", 512);
    assert_result("(2 ^ 3) ^ 2", 64);
    assert_result("2 ^ -1", 0);
}

#[test]
fn unary_minus_disambiguation() {
    assert_result("-3 + 5", 2);
    assert_result("3 - -5", 8);
    assert_result("(-3) * 2", -6);
    assert_result("- 3", -3);
    assert_result("- -3", 3);
}

#[test]
fn increment_decrement_and_not() {
    assert_result("++5", 6);
    assert_result("--5", 4);
    assert_result("--3", 2);
    assert_result("!0", 1);
    assert_result("!7", 0);
    assert_result("!(3 > 2)", 0);
    assert_result("++(2 * 3)", 7);
}

#[test]
fn comparisons_yield_bits() {
    assert_result("3 > 2", 1);
    assert_result("2 >= 3", 0);
    assert_result("1 < 2", 1);
    assert_result("5 <= 5", 1);
    assert_result("4 == 4", 1);
    assert_result("4 != 4", 0);
}

#[test]
fn logical_operators_yield_bits() {
    assert_result("1 && 0", 0);
    assert_result("1 || 0", 1);
    assert_result("2 && 3", 1);
    assert_result("0 || 0", 0);
    assert_result("1 + 1 == 2 && 3 < 4", 1);
    assert_result("3 + 4 > 5", 1);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("4 / 0");
    assert_failure("4 % 0");
    assert!(matches!(evaluate("4 / 0"), Err(ExpressionError::DivisionByZero)));
}

#[test]
fn structural_rejection() {
    assert_failure("* 3 + 2");
    assert_failure(") 3");
    assert_failure("3 4");
    assert_failure("3 + + 4");
    assert_failure("3 && && 4");
    assert!(matches!(evaluate("* 3 + 2"), Err(ExpressionError::LeadingBinaryOperator)));
    assert!(matches!(evaluate(") 3"), Err(ExpressionError::LeadingClosingParen)));
    assert!(matches!(evaluate("3 4"), Err(ExpressionError::ConsecutiveOperands { .. })));
    assert!(matches!(evaluate("++ < 5"), Err(ExpressionError::UnaryBeforeBinary { .. })));
}

#[test]
fn unknown_symbols_are_errors() {
    assert_failure("3 & 4");
    assert_failure("3 $ 4");
    assert_failure("a + 1");
    assert!(matches!(evaluate("3 & 4"), Err(ExpressionError::UnknownOperator { .. })));
}

#[test]
fn unmatched_parentheses() {
    // A stray ')' is silently tolerated.
    assert_result("1 + 2)", 3);
    // A stray '(' drains into the postfix output and fails there.
    assert_failure("(1 + 2");
    assert_failure("((1");
}

#[test]
fn incomplete_expressions_are_errors() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("1 +");
    assert_failure("3 ++ 4");
    assert!(matches!(evaluate("1 +"), Err(ExpressionError::MissingBinaryOperands { .. })));
    assert!(matches!(evaluate("3 ++ 4"), Err(ExpressionError::LeftoverOperands { .. })));
}

#[test]
fn repeated_evaluation_is_stable() {
    for _ in 0..3 {
        assert_result("1 + 2 * 3", 7);
        assert_result("2 ^ 3 ^ 2", 512);
    }
}
