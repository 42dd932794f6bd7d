//! Terminal event routing
//!
//! Calculator input arrives as mouse clicks on the button pad. The only
//! keys handled are quit chrome; printable characters are not mapped to
//! calculator actions.

use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the event loop should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Left mouse button pressed at a terminal cell
    Click {
        /// Terminal column of the click
        column: u16,
        /// Terminal row of the click
        row: u16,
    },
    /// Quit the application
    Quit,
    /// Event carries no meaning here
    Ignored,
}

/// Routes raw crossterm events to UI events
#[derive(Debug, Default)]
pub struct EventRouter;

impl EventRouter {
    /// Creates a new event router
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a terminal event to a UI event
    #[must_use]
    pub fn route(&self, event: &Event) -> UiEvent {
        match event {
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        KeyCode::Char('c' | 'q') => UiEvent::Quit,
                        _ => UiEvent::Ignored,
                    };
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => UiEvent::Quit,
                    _ => UiEvent::Ignored,
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => UiEvent::Click {
                column: *column,
                row: *row,
            },
            _ => UiEvent::Ignored,
        }
    }
}
