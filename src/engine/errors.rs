//! Evaluation error types for the calculation engine
//!
//! Every engine operation returns a [`CalcResult`]. Failures are plain values the
//! caller inspects; nothing panics. Binary failures and the square-root and
//! reciprocal failures also move the engine into
//! [`EngineState::Error`](super::EngineState::Error), which only
//! [`CalcEngine::clear`](super::CalcEngine::clear) leaves.

use thiserror::Error;

/// Result of an engine evaluation
pub type CalcResult = Result<f64, CalcError>;

/// Errors that can occur while evaluating an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `calculate` was called without a stored operand or pending operation
    #[error("insufficient data for calculation")]
    InsufficientData,

    /// Division or reciprocal with a (fuzzy) zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value
    #[error("square root of negative number")]
    NegativeSquareRoot,

    /// Binary dispatch received an operation that is not binary
    #[error("unknown operation")]
    UnknownOperation,

    /// Unary dispatch received an operation that is not unary
    #[error("unknown unary operation")]
    UnknownUnaryOperation,
}

/// Broad error classes, independent of which operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InsufficientOperands,
    DivideByZero,
    Domain,
    UnknownOperation,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InsufficientData => ErrorKind::InsufficientOperands,
            CalcError::DivisionByZero => ErrorKind::DivideByZero,
            CalcError::NegativeSquareRoot => ErrorKind::Domain,
            CalcError::UnknownOperation | CalcError::UnknownUnaryOperation => {
                ErrorKind::UnknownOperation
            }
        }
    }
}

/// The numeric value of an outcome: the result on success, `0.0` on failure
pub fn outcome_value(result: &CalcResult) -> f64 {
    match result {
        Ok(value) => *value,
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_not_empty() {
        let all = [
            CalcError::InsufficientData,
            CalcError::DivisionByZero,
            CalcError::NegativeSquareRoot,
            CalcError::UnknownOperation,
            CalcError::UnknownUnaryOperation,
        ];
        for err in all {
            assert!(!err.to_string().is_empty(), "{:?} has no message", err);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::DivideByZero);
        assert_eq!(CalcError::NegativeSquareRoot.kind(), ErrorKind::Domain);
        assert_eq!(
            CalcError::UnknownUnaryOperation.kind(),
            ErrorKind::UnknownOperation
        );
    }

    #[test]
    fn test_failed_outcome_is_zero() {
        assert_eq!(outcome_value(&Err(CalcError::DivisionByZero)), 0.0);
        assert_eq!(outcome_value(&Ok(2.5)), 2.5);
    }
}
