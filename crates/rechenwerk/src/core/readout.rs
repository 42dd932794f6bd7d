//! The calculator display readout
//!
//! A readout is one of three things: the numeral currently being typed, a
//! computed value, or the division-by-zero marker. Keeping the typed
//! numeral as text preserves it exactly as entered (a trailing `0` after
//! the decimal point survives); computed values render in shortest
//! round-trip form. The `Display` impl is the single rendering function.

use std::fmt;

/// Maximum length of a typed numeral; presses past this are ignored.
pub const MAX_ENTRY_CHARS: usize = 24;

/// Text shown after division by zero.
pub const ERROR_MARKER: &str = "Error";

/// Contents of the calculator display.
#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    /// A numeral as typed: digits with at most one decimal point, never empty.
    Entry(String),
    /// A computed result.
    Value(f64),
    /// The division-by-zero marker.
    Error,
}

impl Readout {
    /// Fresh readout showing `"0"`.
    #[must_use]
    pub fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    /// Numeric value of the readout, `None` for the error marker.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Entry(entry) => entry.parse().ok(),
            Self::Value(value) => Some(*value),
            Self::Error => None,
        }
    }

    /// True when the error marker is shown.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl Default for Readout {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(entry) => f.write_str(entry),
            Self::Value(value) => write!(f, "{value}"),
            Self::Error => f.write_str(ERROR_MARKER),
        }
    }
}
