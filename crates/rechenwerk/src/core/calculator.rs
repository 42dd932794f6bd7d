//! The keypad state machine
//!
//! Five presses mutate the state: digit, decimal point, operator, equals,
//! clear. Chains fold left to right with no precedence; an operator press
//! before the second operand is typed replaces the pending operator.

use crate::core::readout::MAX_ENTRY_CHARS;
use crate::core::{Operator, Readout};

/// Progress of the operator chain.
///
/// `Pending` couples the captured left-hand operand with the operator
/// awaiting its right-hand side, so neither can exist without the other.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Chain {
    /// No binary operation in flight.
    Idle,
    /// Left-hand operand captured, operator awaiting its second operand.
    Pending {
        accumulator: f64,
        operator: Operator,
    },
}

/// Keypad calculator: readout, operator chain, and the entry-mode flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    readout: Readout,
    chain: Chain,
    /// True right after an operator or equals press: the next digit or
    /// decimal press starts a fresh numeral instead of appending.
    awaiting_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Fresh calculator: readout `"0"`, no operation in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            readout: Readout::zero(),
            chain: Chain::Idle,
            awaiting_operand: false,
        }
    }

    /// Current readout.
    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Rendered display text.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.readout.to_string()
    }

    /// True when the next digit press starts a fresh numeral.
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Resets everything to the fresh state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Digit press. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.awaiting_operand {
            self.readout = Readout::Entry(ch.to_string());
            self.awaiting_operand = false;
            return;
        }
        match &mut self.readout {
            Readout::Entry(entry) => {
                if entry == "0" {
                    entry.clear();
                }
                if entry.len() < MAX_ENTRY_CHARS {
                    entry.push(ch);
                }
            }
            // a result or the marker without a chain in flight: typing
            // starts over
            _ => self.readout = Readout::Entry(ch.to_string()),
        }
    }

    /// Decimal-point press. At most one point per numeral; a second press
    /// is ignored.
    pub fn input_decimal(&mut self) {
        if self.awaiting_operand {
            self.readout = Readout::Entry("0.".to_string());
            self.awaiting_operand = false;
            return;
        }
        match &mut self.readout {
            Readout::Entry(entry) => {
                if !entry.contains('.') && entry.len() < MAX_ENTRY_CHARS {
                    entry.push('.');
                }
            }
            _ => self.readout = Readout::Entry("0.".to_string()),
        }
    }

    /// Operator press.
    ///
    /// Starts a chain from the current readout, folds a completed pair and
    /// carries the result forward, or - when the second operand has not
    /// been typed yet - just swaps the pending operator. On the error
    /// marker the press is absorbed: the chain stays idle until the user
    /// clears or types a fresh numeral.
    pub fn press_operator(&mut self, operator: Operator) {
        let Some(input) = self.readout.value() else {
            self.awaiting_operand = true;
            return;
        };
        self.chain = match self.chain {
            Chain::Idle => Chain::Pending {
                accumulator: input,
                operator,
            },
            Chain::Pending {
                accumulator,
                operator: pending,
            } if !self.awaiting_operand => match pending.apply(accumulator, input) {
                Ok(result) => {
                    self.readout = Readout::Value(result);
                    Chain::Pending {
                        accumulator: result,
                        operator,
                    }
                }
                Err(_) => {
                    self.readout = Readout::Error;
                    Chain::Idle
                }
            },
            // no operand typed since the last operator press: replace it
            Chain::Pending { accumulator, .. } => Chain::Pending {
                accumulator,
                operator,
            },
        };
        self.awaiting_operand = true;
    }

    /// Equals press. A no-op unless a chain is in flight and its second
    /// operand has been typed.
    pub fn evaluate(&mut self) {
        if self.awaiting_operand {
            return;
        }
        let Chain::Pending {
            accumulator,
            operator,
        } = self.chain
        else {
            return;
        };
        let Some(input) = self.readout.value() else {
            return;
        };
        self.readout = match operator.apply(accumulator, input) {
            Ok(result) => Readout::Value(result),
            Err(_) => Readout::Error,
        };
        self.chain = Chain::Idle;
        self.awaiting_operand = true;
    }
}
