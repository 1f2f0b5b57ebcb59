#[derive(Debug)]
/// Represents all errors that can occur while validating or evaluating an
/// expression.
///
/// The first five variants are structural and are detected by the validator
/// before any arithmetic happens. The rest are detected while executing the
/// postfix sequence. Either way the error is terminal for the current
/// evaluation call.
pub enum ExpressionError {
    /// The expression starts with a closing parenthesis.
    LeadingClosingParen,
    /// The expression starts with a binary operator.
    LeadingBinaryOperator,
    /// Two binary operators appear next to each other.
    ConsecutiveBinaryOperators {
        /// The token position of the second operator.
        position: usize,
    },
    /// Two operands appear next to each other.
    ConsecutiveOperands {
        /// The token position of the second operand.
        position: usize,
    },
    /// A unary operator is immediately followed by a binary operator.
    UnaryBeforeBinary {
        /// The token position of the binary operator.
        position: usize,
    },
    /// A unary operator found no operand on the value stack.
    MissingUnaryOperand {
        /// The operator symbol.
        symbol: String,
    },
    /// A binary operator found fewer than two operands on the value stack.
    MissingBinaryOperands {
        /// The operator symbol.
        symbol: String,
    },
    /// An operator symbol is not present in the operator table.
    UnknownOperator {
        /// The unrecognized symbol.
        symbol: String,
    },
    /// The right operand of a division or modulo was zero.
    DivisionByZero,
    /// Evaluation finished with a number of values other than one.
    LeftoverOperands {
        /// How many values were left on the stack.
        count: usize,
    },
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingClosingParen => {
                write!(f, "Expression cannot start with a closing parenthesis.")
            },

            Self::LeadingBinaryOperator => {
                write!(f, "Expression cannot start with a binary operator.")
            },

            Self::ConsecutiveBinaryOperators { position } => {
                write!(f, "Two binary operators in a row at token {position}.")
            },

            Self::ConsecutiveOperands { position } => {
                write!(f, "Two operands in a row at token {position}.")
            },

            Self::UnaryBeforeBinary { position } => write!(f,
                                                           "A unary operator cannot be followed by a binary operator at token {position}."),

            Self::MissingUnaryOperand { symbol } => {
                write!(f, "Missing operand for unary operator '{symbol}'.")
            },

            Self::MissingBinaryOperands { symbol } => {
                write!(f, "Missing operands for binary operator '{symbol}'.")
            },

            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::LeftoverOperands { count } => write!(f,
                                                       "Expected a single result but {count} values were left on the stack."),
        }
    }
}

impl std::error::Error for ExpressionError {}
