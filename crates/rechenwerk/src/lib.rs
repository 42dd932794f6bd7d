//! Rechenwerk - a keypad-driven four-function calculator
//!
//! The `core` module holds the input/evaluation state machine: discrete
//! button presses (digits, decimal point, operator, equals, clear) drive a
//! display readout, with left-to-right folding and an in-band error marker
//! for division by zero. The `tui` module (default feature) renders the
//! readout and a mouse-clickable button pad in the terminal.
//!
//! # Example
//!
//! ```rust
//! use rechenwerk::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(7);
//! calc.press_operator(Operator::Multiply);
//! calc.input_digit(6);
//! calc.evaluate();
//! assert_eq!(calc.display_text(), "42");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::readout::{ERROR_MARKER, MAX_ENTRY_CHARS};
    pub use crate::core::{ArithmeticError, Calculator, Operator, Readout};

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, EventRouter, Keypad, UiEvent};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.input_digit(2);
        calc.press_operator(Operator::Add);
        calc.input_digit(3);
        calc.evaluate();
        assert_eq!(calc.display_text(), "5");
    }

    #[test]
    fn test_operator_direct() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
    }

    #[test]
    fn test_division_by_zero_is_in_band() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.press_operator(Operator::Divide);
        calc.input_digit(0);
        calc.evaluate();
        assert_eq!(calc.display_text(), ERROR_MARKER);
    }

    #[test]
    fn test_readout_starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.readout(), &Readout::Entry("0".into()));
    }
}
