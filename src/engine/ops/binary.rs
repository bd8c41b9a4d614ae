//! Binary operation evaluation

use crate::engine::errors::{CalcError, CalcResult};
use crate::engine::operation::Operation;
use crate::engine::state::{CalcEngine, EngineState};
use crate::number::is_zero_divisor;

impl CalcEngine {
    /// Evaluate `lhs op rhs`.
    ///
    /// The operands are explicit, but the engine is updated: on success the result
    /// becomes the stored value and the state is `ResultDisplayed`; on any failure
    /// the state is `Error`.
    pub fn perform_binary_operation(
        &mut self,
        lhs: f64,
        rhs: f64,
        op: Operation,
    ) -> CalcResult {
        match Self::evaluate_binary(lhs, rhs, op) {
            Ok(value) => {
                self.stored_value = value;
                self.state = EngineState::ResultDisplayed;
                Ok(value)
            }
            Err(e) => {
                self.state = EngineState::Error;
                Err(e)
            }
        }
    }

    fn evaluate_binary(lhs: f64, rhs: f64, op: Operation) -> CalcResult {
        use Operation::*;

        match op {
            Add => Ok(lhs + rhs),
            Subtract => Ok(lhs - rhs),
            Multiply => Ok(lhs * rhs),
            Divide => Self::checked_divide(lhs, rhs),
            None | Percent | Negate | Square | SquareRoot | Reciprocal => {
                Err(CalcError::UnknownOperation)
            }
        }
    }

    pub(crate) fn checked_divide(lhs: f64, rhs: f64) -> CalcResult {
        if is_zero_divisor(lhs, rhs) {
            return Err(CalcError::DivisionByZero);
        }
        Ok(lhs / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let mut engine = CalcEngine::new();
        assert_eq!(engine.perform_binary_operation(5.0, 3.0, Operation::Add), Ok(8.0));
        assert_eq!(
            engine.perform_binary_operation(10.0, 4.0, Operation::Subtract),
            Ok(6.0)
        );
        assert_eq!(
            engine.perform_binary_operation(6.0, 7.0, Operation::Multiply),
            Ok(42.0)
        );
        assert_eq!(
            engine.perform_binary_operation(15.0, 3.0, Operation::Divide),
            Ok(5.0)
        );
    }

    #[test]
    fn test_success_updates_stored_value() {
        let mut engine = CalcEngine::new();
        engine.perform_binary_operation(2.0, 3.0, Operation::Multiply).unwrap();
        assert_eq!(engine.stored_value(), 6.0);
        assert_eq!(engine.current_state(), EngineState::ResultDisplayed);
    }

    #[test]
    fn test_division_by_zero() {
        let mut engine = CalcEngine::new();
        engine.set_operand(10.0);
        let result = engine.perform_binary_operation(10.0, 0.0, Operation::Divide);
        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(engine.current_state(), EngineState::Error);
        assert_eq!(engine.stored_value(), 10.0);
    }

    #[test]
    fn test_non_binary_operation_enters_error() {
        let mut engine = CalcEngine::new();
        let result = engine.perform_binary_operation(1.0, 2.0, Operation::Square);
        assert_eq!(result, Err(CalcError::UnknownOperation));
        assert_eq!(engine.current_state(), EngineState::Error);

        let mut engine = CalcEngine::new();
        let result = engine.perform_binary_operation(1.0, 2.0, Operation::None);
        assert_eq!(result, Err(CalcError::UnknownOperation));
        assert_eq!(engine.current_state(), EngineState::Error);
    }
}
