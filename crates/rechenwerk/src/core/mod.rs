//! Core calculator engine
//!
//! A pure, synchronous state machine driven by discrete button presses.
//! No I/O, no logging, no shared state; the front end owns an instance and
//! renders its readout after every press.

pub mod calculator;
mod operations;
pub mod readout;

pub use calculator::Calculator;
pub use operations::Operator;
pub use readout::Readout;

use thiserror::Error;

/// Errors produced by the arithmetic fold.
///
/// These never escape the engine: the calculator converts them to the
/// error-marker readout at its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
}
