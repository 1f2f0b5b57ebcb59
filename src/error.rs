/// Expression errors.
///
/// Defines the single error type raised by the evaluation pipeline, covering
/// both structural problems found during validation and semantic problems
/// found while executing the postfix sequence.
pub mod expression_error;

pub use expression_error::ExpressionError;
