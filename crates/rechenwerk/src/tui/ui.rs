//! TUI rendering
//!
//! A centered calculator column: readout panel on top, button pad below.
//! The layout helpers are public so the event loop can hit-test mouse
//! clicks against the keypad rectangle it rendered.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the calculator column in terminal cells
const CALC_WIDTH: u16 = 22;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Rect of the readout panel within the frame
#[must_use]
pub fn readout_area(area: Rect) -> Rect {
    split_column(calculator_column(area)).0
}

/// Rect of the button pad within the frame
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split_column(calculator_column(area)).1
}

/// Centers the calculator column horizontally
fn calculator_column(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CALC_WIDTH),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

/// Splits the column into readout and keypad rows
fn split_column(column: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(12)])
        .split(column);
    (rows[0], rows[1])
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the readout panel
    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display_text();

        let style = if self.app.calculator().readout().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        paragraph.render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (readout, keypad) = split_column(calculator_column(area));
        self.render_readout(readout, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
    }
}
