use calctty::engine::{outcome_value, CalcEngine, CalcError, EngineState, ErrorKind, Operation};

#[test]
fn test_state_sequence_through_one_calculation() {
    let mut engine = CalcEngine::new();
    assert_eq!(engine.current_state(), EngineState::Idle);

    engine.set_operand(5.0);
    assert_eq!(engine.current_state(), EngineState::OperandEntry);

    engine.set_operation(Operation::Add);
    assert_eq!(engine.current_state(), EngineState::OperatorSelected);

    let result = engine.perform_binary_operation(5.0, 3.0, Operation::Add);
    assert_eq!(result, Ok(8.0));
    assert_eq!(engine.current_state(), EngineState::ResultDisplayed);
    assert_eq!(engine.stored_value(), 8.0);
}

#[test]
fn test_calculate_confirms_without_combining() {
    let mut engine = CalcEngine::new();
    assert_eq!(engine.calculate(), Err(CalcError::InsufficientData));

    engine.set_operand(7.0);
    assert_eq!(engine.calculate(), Err(CalcError::InsufficientData));

    engine.set_operation(Operation::Multiply);
    assert_eq!(engine.calculate(), Ok(7.0));
    assert_eq!(engine.current_state(), EngineState::ResultDisplayed);
}

#[test]
fn test_division_by_near_zero() {
    let mut engine = CalcEngine::new();
    let result = engine.perform_binary_operation(1.0, 1e-320, Operation::Divide);
    assert_eq!(result, Err(CalcError::DivisionByZero));
    assert_eq!(engine.current_state(), EngineState::Error);
    assert_eq!(outcome_value(&result), 0.0);

    // Small divisors with a finite quotient are ordinary
    let mut engine = CalcEngine::new();
    assert!(engine.perform_binary_operation(1.0, 1e-13, Operation::Divide).is_ok());
    assert_eq!(engine.perform_binary_operation(1e-13, 1e-13, Operation::Divide), Ok(1.0));
    assert!(engine
        .apply_unary_operation(Operation::Reciprocal, 1e-14)
        .is_ok());
}

#[test]
fn test_error_state_is_left_only_by_clear() {
    let mut engine = CalcEngine::new();
    let _ = engine.perform_binary_operation(4.0, 0.0, Operation::Divide);
    assert_eq!(engine.current_state(), EngineState::Error);

    engine.set_operand(2.0);
    assert_eq!(engine.current_state(), EngineState::Error);

    engine.reset();
    assert_eq!(engine.current_state(), EngineState::Idle);
    assert!(!engine.has_stored_value());
}

#[test]
fn test_unary_operations() {
    let mut engine = CalcEngine::new();
    assert_eq!(engine.apply_unary_operation(Operation::Percent, 50.0), Ok(0.5));
    assert_eq!(engine.apply_unary_operation(Operation::Negate, 3.0), Ok(-3.0));
    assert_eq!(engine.apply_unary_operation(Operation::Square, -4.0), Ok(16.0));
    assert_eq!(engine.apply_unary_operation(Operation::SquareRoot, 16.0), Ok(4.0));
    assert_eq!(engine.apply_unary_operation(Operation::Reciprocal, 4.0), Ok(0.25));
}

#[test]
fn test_unary_domain_errors() {
    let mut engine = CalcEngine::new();
    let err = engine
        .apply_unary_operation(Operation::SquareRoot, -1.0)
        .unwrap_err();
    assert_eq!(err, CalcError::NegativeSquareRoot);
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(engine.current_state(), EngineState::Error);

    let mut engine = CalcEngine::new();
    let err = engine
        .apply_unary_operation(Operation::Reciprocal, 0.0)
        .unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(err.kind(), ErrorKind::DivideByZero);
}

#[test]
fn test_wrong_arity_operations() {
    // Unary entry point rejects binary ops without touching state
    let mut engine = CalcEngine::new();
    engine.set_operand(2.0);
    assert_eq!(
        engine.apply_unary_operation(Operation::Add, 2.0),
        Err(CalcError::UnknownUnaryOperation)
    );
    assert_eq!(engine.current_state(), EngineState::OperandEntry);

    // Binary entry point rejects unary ops and moves to Error
    let mut engine = CalcEngine::new();
    assert_eq!(
        engine.perform_binary_operation(2.0, 3.0, Operation::SquareRoot),
        Err(CalcError::UnknownOperation)
    );
    assert_eq!(engine.current_state(), EngineState::Error);
}

#[test]
fn test_error_messages() {
    assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        CalcError::NegativeSquareRoot.to_string(),
        "square root of negative number"
    );
}
