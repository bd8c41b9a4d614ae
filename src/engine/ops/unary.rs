//! Unary operation evaluation

use crate::engine::errors::{CalcError, CalcResult};
use crate::engine::operation::Operation;
use crate::engine::state::{CalcEngine, EngineState};

impl CalcEngine {
    /// Apply a unary operation to `value`.
    ///
    /// Success leaves the engine untouched. A negative square root or a zero
    /// reciprocal moves the engine to `Error`; passing a non-unary operation fails
    /// with [`CalcError::UnknownUnaryOperation`] and does not change state.
    pub fn apply_unary_operation(&mut self, op: Operation, value: f64) -> CalcResult {
        use Operation::*;

        let result = match op {
            Percent => Ok(value * 0.01),
            Negate => Ok(-value),
            Square => Ok(value * value),
            SquareRoot => Self::checked_sqrt(value),
            Reciprocal => Self::checked_divide(1.0, value),
            None | Add | Subtract | Multiply | Divide => {
                return Err(CalcError::UnknownUnaryOperation);
            }
        };

        if result.is_err() {
            self.state = EngineState::Error;
        }
        result
    }

    fn checked_sqrt(value: f64) -> CalcResult {
        if value < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        Ok(value.sqrt())
    }
}
