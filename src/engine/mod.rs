//! Calculation engine
//!
//! This module provides the arithmetic core:
//! - [`state`]: [`CalcEngine`] with its operand/operator state machine
//! - [`ops`]: binary and unary evaluation as `impl CalcEngine` blocks
//! - [`operation`]: the closed [`Operation`] set and its glyphs
//! - [`errors`]: [`CalcError`] and the [`CalcResult`] alias
//!
//! # State Machine
//!
//! ```text
//! Idle | ResultDisplayed --set_operand--------------> OperandEntry
//! (operand stored)       --set_operation------------> OperatorSelected
//! (operand + operation)  --calculate----------------> ResultDisplayed
//! any                    --perform_binary_operation-> ResultDisplayed | Error
//! any                    --apply_unary_operation----> (unchanged) | Error
//! any                    --clear / reset------------> Idle
//! ```
//!
//! An unknown unary operation fails without entering `Error`, while an unknown
//! binary operation does enter it.

pub mod errors;
pub mod operation;
pub mod ops;
pub mod state;

pub use errors::{outcome_value, CalcError, CalcResult, ErrorKind};
pub use operation::Operation;
pub use state::{CalcEngine, EngineState};
