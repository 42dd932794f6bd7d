//! Terminal front end
//!
//! Renders the calculator readout and button pad with ratatui and routes
//! crossterm events into engine presses. The pad is mouse-driven; no
//! printable keyboard characters map to calculator input, only quit
//! chrome is handled.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{EventRouter, UiEvent};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, readout_area, render, CalculatorUI};
