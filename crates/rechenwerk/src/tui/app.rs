//! TUI application state
//!
//! Owns the engine and the keypad. Every user action funnels through
//! `press`, which dispatches into the engine and highlights the button.

use ratatui::layout::Rect;
use tracing::debug;

use super::keypad::{ButtonAction, Keypad};
use crate::core::Calculator;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The input/evaluation engine
    calculator: Calculator,
    /// The button pad
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the button pad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Rendered display text
    #[must_use]
    pub fn display_text(&self) -> String {
        self.calculator.display_text()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds a button action into the engine and highlights its button
    pub fn press(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => self.calculator.input_digit(d),
            ButtonAction::Decimal => self.calculator.input_decimal(),
            ButtonAction::Operator(op) => self.calculator.press_operator(op),
            ButtonAction::Equals => self.calculator.evaluate(),
            ButtonAction::Clear => self.calculator.clear(),
        }
        self.keypad.highlight(action);
        debug!(?action, display = %self.calculator.display_text(), "keypad press");
    }

    /// Resolves a mouse click inside the keypad area into a press
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(action) = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|index| self.keypad.action_at(index))
        {
            self.press(action);
        }
    }
}
