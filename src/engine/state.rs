//! Operand and operator tracking

use super::errors::{CalcError, CalcResult};
use super::operation::Operation;

/// Where the engine is in an entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    OperandEntry,
    OperatorSelected,
    ResultDisplayed,
    /// Reached only through a failed evaluation; left only through `clear`/`reset`
    Error,
}

/// The calculation engine
///
/// Holds at most one stored operand and one pending operation. Evaluation entry
/// points live in [`ops`](super::ops).
#[derive(Debug, Clone, Default)]
pub struct CalcEngine {
    pub(crate) state: EngineState,
    pub(crate) stored_value: f64,
    pub(crate) operation: Operation,
    pub(crate) has_stored_value: bool,
}

impl CalcEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the operand, overwriting any previous one.
    ///
    /// Only `Idle` and `ResultDisplayed` move to `OperandEntry`; other states keep
    /// their state but still take the new value.
    pub fn set_operand(&mut self, value: f64) {
        self.stored_value = value;
        self.has_stored_value = true;

        if matches!(self.state, EngineState::Idle | EngineState::ResultDisplayed) {
            self.state = EngineState::OperandEntry;
        }
    }

    /// Record the pending operation. Ignored while no operand is stored.
    pub fn set_operation(&mut self, op: Operation) {
        if !self.has_stored_value {
            return;
        }

        self.operation = op;
        self.state = EngineState::OperatorSelected;
    }

    /// Confirm that a calculation can complete.
    ///
    /// This does not combine operands; it returns the stored operand unchanged and
    /// moves to `ResultDisplayed`. Use
    /// [`perform_binary_operation`](Self::perform_binary_operation) to evaluate.
    pub fn calculate(&mut self) -> CalcResult {
        if !self.has_stored_value || self.operation == Operation::None {
            return Err(CalcError::InsufficientData);
        }

        self.state = EngineState::ResultDisplayed;
        Ok(self.stored_value)
    }

    /// Return to a fresh `Idle` engine
    pub fn clear(&mut self) {
        self.stored_value = 0.0;
        self.operation = Operation::None;
        self.has_stored_value = false;
        self.state = EngineState::Idle;
    }

    /// Alias for [`clear`](Self::clear)
    pub fn reset(&mut self) {
        self.clear();
    }

    pub fn current_state(&self) -> EngineState {
        self.state
    }

    pub fn stored_value(&self) -> f64 {
        self.stored_value
    }

    pub fn current_operation(&self) -> Operation {
        self.operation
    }

    pub fn has_stored_value(&self) -> bool {
        self.has_stored_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine() {
        let engine = CalcEngine::new();
        assert_eq!(engine.current_state(), EngineState::Idle);
        assert!(!engine.has_stored_value());
        assert_eq!(engine.stored_value(), 0.0);
        assert_eq!(engine.current_operation(), Operation::None);
    }

    #[test]
    fn test_operation_needs_operand() {
        let mut engine = CalcEngine::new();
        engine.set_operation(Operation::Add);
        assert_eq!(engine.current_operation(), Operation::None);
        assert_eq!(engine.current_state(), EngineState::Idle);
    }

    #[test]
    fn test_set_operand_keeps_operator_state() {
        let mut engine = CalcEngine::new();
        engine.set_operand(5.0);
        engine.set_operation(Operation::Multiply);
        engine.set_operand(9.0);
        assert_eq!(engine.current_state(), EngineState::OperatorSelected);
        assert_eq!(engine.stored_value(), 9.0);
    }

    #[test]
    fn test_calculate_requires_operand_and_operation() {
        let mut engine = CalcEngine::new();
        assert_eq!(engine.calculate(), Err(CalcError::InsufficientData));

        engine.set_operand(4.0);
        assert_eq!(engine.calculate(), Err(CalcError::InsufficientData));
        assert_eq!(engine.current_state(), EngineState::OperandEntry);

        engine.set_operation(Operation::Add);
        assert_eq!(engine.calculate(), Ok(4.0));
        assert_eq!(engine.current_state(), EngineState::ResultDisplayed);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut engine = CalcEngine::new();
        engine.set_operand(3.0);
        engine.set_operation(Operation::Divide);
        engine.clear();
        assert_eq!(engine.current_state(), EngineState::Idle);
        assert!(!engine.has_stored_value());
        assert_eq!(engine.current_operation(), Operation::None);

        engine.set_operand(1.0);
        engine.reset();
        assert_eq!(engine.stored_value(), 0.0);
        assert_eq!(engine.current_state(), EngineState::Idle);
    }
}
