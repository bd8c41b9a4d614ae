//! The closed set of calculator operations

use std::fmt;

/// An operation the engine can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
    Negate,
    Square,
    SquareRoot,
    Reciprocal,
}

impl Operation {
    /// Map a typed character to an operation.
    ///
    /// Accepts `+`, `-`, `*`, `x`, `X`, `×`, `/`, `÷` and `%`; anything else maps
    /// to [`Operation::None`].
    pub fn from_char(c: char) -> Self {
        match c {
            '+' => Operation::Add,
            '-' => Operation::Subtract,
            '*' | 'x' | 'X' | '\u{00D7}' => Operation::Multiply,
            '/' | '\u{00F7}' => Operation::Divide,
            '%' => Operation::Percent,
            _ => Operation::None,
        }
    }

    /// Display glyph (`×`, `√`, `1/x`, ...). Empty for [`Operation::None`].
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::None => "",
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Percent => "%",
            Operation::Negate => "±",
            Operation::Square => "x²",
            Operation::SquareRoot => "√",
            Operation::Reciprocal => "1/x",
        }
    }

    /// Check if this operation takes two operands
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide
        )
    }

    /// Check if this operation is evaluated on a single operand
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operation::Percent
                | Operation::Negate
                | Operation::Square
                | Operation::SquareRoot
                | Operation::Reciprocal
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Operation::from_char('+'), Operation::Add);
        assert_eq!(Operation::from_char('-'), Operation::Subtract);
        for c in ['*', 'x', 'X', '×'] {
            assert_eq!(Operation::from_char(c), Operation::Multiply);
        }
        assert_eq!(Operation::from_char('/'), Operation::Divide);
        assert_eq!(Operation::from_char('÷'), Operation::Divide);
        assert_eq!(Operation::from_char('%'), Operation::Percent);
        assert_eq!(Operation::from_char('='), Operation::None);
        assert_eq!(Operation::from_char('7'), Operation::None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
        assert_eq!(Operation::Negate.symbol(), "±");
        assert_eq!(Operation::Square.symbol(), "x²");
        assert_eq!(Operation::SquareRoot.symbol(), "√");
        assert_eq!(Operation::Reciprocal.symbol(), "1/x");
        assert_eq!(Operation::None.symbol(), "");
        assert_eq!(Operation::Add.to_string(), "+");
    }

    #[test]
    fn test_arity_partitions_the_set() {
        assert!(!Operation::None.is_binary() && !Operation::None.is_unary());
        assert!(Operation::Divide.is_binary());
        assert!(Operation::Percent.is_unary());
        assert!(!Operation::Percent.is_binary());
    }
}
