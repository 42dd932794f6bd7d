//! Calculator TUI example
//!
//! Run with: cargo run --example keypad_tui
//!
//! Click the pad with the mouse to calculate. Press q, Esc, or Ctrl+C to
//! quit. Set RUST_LOG=rechenwerk=debug to log presses on stderr.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use rechenwerk::tui::{keypad_area, render, CalculatorApp, EventRouter, UiEvent};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let router = EventRouter::new();

    loop {
        let mut frame_area = Rect::default();
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(&app, frame);
        })?;

        match router.route(&event::read()?) {
            UiEvent::Click { column, row } => app.click(keypad_area(frame_area), column, row),
            UiEvent::Quit => app.quit(),
            UiEvent::Ignored => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
