//! Key-level calculator logic
//!
//! [`Calculator`] sits between the key handler and the core: it owns the display
//! text, decides when typing starts a new entry, builds the expression strings
//! recorded in history, and forwards memory keys to the [`MemoryBank`]. It never
//! renders anything; every key returns a [`Feedback`] the UI turns into an effect.
//!
//! # Entry Flow
//!
//! ```text
//! "5" "+" "3" "="  ->  display "8", history "5 + 3 = 8"
//! "5" "+" "3" "*"  ->  display "8", history "5 + 3 = 8", pending "8 × "
//! "16" "r"         ->  display "4", history "√(16) = 4"
//! ```

use tracing::debug;

use crate::engine::{CalcEngine, EngineState, Operation};
use crate::history::{split_entry, HistoryLog};
use crate::memory::MemoryBank;
use crate::number::format::{format_number, is_valid_number, parse_number, remove_trailing_decimal};
use crate::number::validate::{can_add_decimal_point, can_add_digit, is_not_empty};
use crate::number::{DECIMAL_SEPARATOR, MAX_DIGIT_LENGTH, ZERO_WITH_DECIMAL};

/// Shown when the display text cannot be used as a number
pub const INVALID_INPUT: &str = "invalid input";

/// What the UI should signal after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    /// Something was saved (MS)
    Success,
    /// An error message is now on the display
    Error,
    /// The key was refused (entry full, empty memory list)
    Rejected,
}

#[derive(Debug)]
pub struct Calculator {
    engine: CalcEngine,
    history: HistoryLog,
    memory: MemoryBank,
    display: String,
    /// An operator was the last key; the next digit starts a new entry
    operator_clicked: bool,
    /// The display holds a result or an error; the next digit starts a new entry
    result_displayed: bool,
    /// Left operand text of the pending expression
    pending_lhs: Option<String>,
    max_digits: usize,
}

impl Calculator {
    pub fn new(max_digits: usize) -> Self {
        Self::with_history(HistoryLog::new(), max_digits)
    }

    pub fn with_history(history: HistoryLog, max_digits: usize) -> Self {
        Calculator {
            engine: CalcEngine::new(),
            history,
            memory: MemoryBank::new(),
            display: String::new(),
            operator_clicked: false,
            result_displayed: false,
            pending_lhs: None,
            max_digits: max_digits.max(1),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The expression waiting for its right operand, e.g. `"12 ÷ "`
    pub fn pending_expression(&self) -> String {
        match &self.pending_lhs {
            Some(lhs) if self.engine.current_operation() != Operation::None => {
                format!("{} {} ", lhs, self.engine.current_operation().symbol())
            }
            _ => String::new(),
        }
    }

    pub fn engine(&self) -> &CalcEngine {
        &self.engine
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryBank {
        &mut self.memory
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Type a digit `0`-`9`
    pub fn input_digit(&mut self, digit: char) -> Feedback {
        if !digit.is_ascii_digit() {
            return Feedback::None;
        }

        self.begin_entry();
        if !can_add_digit(&self.display, self.max_digits) {
            debug!(display = %self.display, "digit limit reached");
            return Feedback::Rejected;
        }

        self.display.push(digit);
        Feedback::None
    }

    /// Type the decimal separator
    pub fn input_decimal(&mut self) -> Feedback {
        self.begin_entry();
        if !can_add_decimal_point(&self.display, self.max_digits) {
            return Feedback::None;
        }

        if self.display.is_empty() {
            self.display.push_str(ZERO_WITH_DECIMAL);
        } else {
            self.display.push(DECIMAL_SEPARATOR);
        }
        Feedback::None
    }

    /// Press a binary operator key (`+ - * / x × ÷`).
    ///
    /// With an operation already pending and a fresh right operand typed, the
    /// pending operation is evaluated first and its result becomes the new left
    /// operand. Pressing two operators in a row replaces the first.
    pub fn input_operator(&mut self, key: char) -> Feedback {
        let op = Operation::from_char(key);
        if !op.is_binary() {
            return Feedback::None;
        }

        let was_operator_clicked = self.operator_clicked;
        if is_not_empty(&self.display) && !is_valid_number(&self.display) {
            return self.show_error(INVALID_INPUT);
        }

        if self.engine.has_stored_value()
            && !self.operator_clicked
            && !self.result_displayed
            && self.engine.current_operation() != Operation::None
            && is_not_empty(&self.display)
        {
            let feedback = self.perform_calculation();
            if feedback == Feedback::Error {
                return feedback;
            }
        }

        if !was_operator_clicked && is_not_empty(&self.display) {
            let text = remove_trailing_decimal(&self.display).to_string();
            let Some(value) = parse_number(&text) else {
                return self.show_error(INVALID_INPUT);
            };
            self.engine.set_operand(value);
            self.pending_lhs = Some(text);
        }

        self.engine.set_operation(op);
        self.operator_clicked = true;
        self.result_displayed = false;
        Feedback::None
    }

    /// Press `=`. Needs a stored operand and a pending operation.
    pub fn equals(&mut self) -> Feedback {
        if !self.engine.has_stored_value() || self.engine.current_operation() == Operation::None
        {
            return Feedback::None;
        }
        self.perform_calculation()
    }

    /// Apply a unary operation to the display value
    pub fn apply_unary(&mut self, op: Operation) -> Feedback {
        if self.display.is_empty() {
            return Feedback::None;
        }

        let Some(value) = parse_number(&self.display) else {
            return self.show_error(INVALID_INPUT);
        };

        match self.engine.apply_unary_operation(op, value) {
            Ok(result) => {
                let expression = format!("{}({})", op.symbol(), self.display);
                self.history.add_result(&expression, result, self.max_digits);
                self.display = format_number(result, self.max_digits);
                self.operator_clicked = false;
                self.result_displayed = true;
                Feedback::None
            }
            Err(e) => {
                self.operator_clicked = false;
                self.show_error(&e.to_string())
            }
        }
    }

    /// Delete the last typed character
    pub fn backspace(&mut self) -> Feedback {
        self.display.pop();
        Feedback::None
    }

    /// Clear the display and reset the engine
    pub fn clear(&mut self) -> Feedback {
        self.display.clear();
        self.engine.clear();
        self.pending_lhs = None;
        self.operator_clicked = false;
        self.result_displayed = false;
        Feedback::None
    }

    /// Clear only the display
    pub fn clear_entry(&mut self) -> Feedback {
        self.display.clear();
        self.result_displayed = false;
        Feedback::None
    }

    /// M+
    pub fn memory_add(&mut self) -> Feedback {
        match self.display_value() {
            Ok(Some(value)) => {
                self.memory.add(value);
                Feedback::None
            }
            Ok(None) => Feedback::None,
            Err(()) => self.show_error(INVALID_INPUT),
        }
    }

    /// M-
    pub fn memory_subtract(&mut self) -> Feedback {
        match self.display_value() {
            Ok(Some(value)) => {
                self.memory.subtract(value);
                Feedback::None
            }
            Ok(None) => Feedback::None,
            Err(()) => self.show_error(INVALID_INPUT),
        }
    }

    /// MS: store the display value and push it onto the memory list
    pub fn memory_store(&mut self) -> Feedback {
        match self.display_value() {
            Ok(Some(value)) => {
                self.memory.store(value);
                self.memory.add_to_list(value);
                Feedback::Success
            }
            Ok(None) => Feedback::None,
            Err(()) => self.show_error(INVALID_INPUT),
        }
    }

    /// MR. Ignored while memory is empty.
    pub fn memory_recall(&mut self) -> Feedback {
        if !self.memory.has_value() {
            debug!("MR with empty memory");
            return Feedback::None;
        }

        let value = self.memory.recall();
        self.show_value(value);
        Feedback::None
    }

    /// MC
    pub fn memory_clear(&mut self) -> Feedback {
        self.memory.clear();
        Feedback::None
    }

    /// Put memory list entry `index` on the display
    pub fn recall_list_value(&mut self, index: usize) -> Feedback {
        match self.memory.list_value(index) {
            Some(value) => {
                self.show_value(value);
                Feedback::None
            }
            None => Feedback::Rejected,
        }
    }

    /// Load memory list entry `index` into the accumulator
    pub fn load_list_value(&mut self, index: usize) -> Feedback {
        if index >= self.memory.list_size() {
            return Feedback::Rejected;
        }
        self.memory.recall_from_list(index);
        Feedback::Success
    }

    pub fn remove_list_value(&mut self, index: usize) -> Feedback {
        self.memory.remove_from_list(index);
        Feedback::None
    }

    pub fn clear_memory_list(&mut self) -> Feedback {
        self.memory.clear_list();
        Feedback::None
    }

    /// Put the result of history entry `index` on the display
    pub fn use_history_result(&mut self, index: usize) -> Feedback {
        let Some(entry) = self.history.get(index) else {
            return Feedback::Rejected;
        };
        let (_, result) = split_entry(entry);
        match parse_number(result) {
            Some(_) => {
                self.display = result.to_string();
                self.result_displayed = true;
                Feedback::None
            }
            None => Feedback::Rejected,
        }
    }

    pub fn clear_history(&mut self) -> Feedback {
        self.history.clear();
        Feedback::None
    }

    fn perform_calculation(&mut self) -> Feedback {
        if self.display.is_empty() {
            return Feedback::None;
        }

        let rhs_text = remove_trailing_decimal(&self.display).to_string();
        let Some(rhs) = parse_number(&rhs_text) else {
            return self.show_error(INVALID_INPUT);
        };

        let lhs = self.engine.stored_value();
        let op = self.engine.current_operation();
        let mut expression = self.pending_expression();
        if expression.is_empty() {
            // Repeated `=` reuses the previous result as the left operand
            expression = format!("{} {} ", format_number(lhs, self.max_digits), op.symbol());
        }

        match self.engine.perform_binary_operation(lhs, rhs, op) {
            Ok(value) => {
                expression.push_str(&rhs_text);
                self.history.add_result(&expression, value, self.max_digits);
                self.display = format_number(value, self.max_digits);
                self.pending_lhs = None;
                self.operator_clicked = false;
                self.result_displayed = true;
                Feedback::None
            }
            Err(e) => {
                self.operator_clicked = false;
                self.show_error(&e.to_string())
            }
        }
    }

    /// Clear the display if the next keystroke starts a new entry
    fn begin_entry(&mut self) {
        if self.operator_clicked || self.result_displayed {
            self.display.clear();
            self.operator_clicked = false;
            self.result_displayed = false;
        }

        if self.engine.current_state() == EngineState::Error {
            self.engine.clear();
            self.pending_lhs = None;
        }
    }

    /// `Ok(None)` for an empty display, `Err` for text that is not a number
    fn display_value(&self) -> Result<Option<f64>, ()> {
        if self.display.is_empty() {
            return Ok(None);
        }
        parse_number(&self.display).map(Some).ok_or(())
    }

    fn show_value(&mut self, value: f64) {
        self.display = format_number(value, self.max_digits);
        self.result_displayed = true;
    }

    fn show_error(&mut self, message: &str) -> Feedback {
        debug!(message, "calculator error");
        self.display = message.to_string();
        self.pending_lhs = None;
        self.result_displayed = true;
        Feedback::Error
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(MAX_DIGIT_LENGTH)
    }
}
