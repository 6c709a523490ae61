//! Event handling for keyboard input.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use super::app::{App, Field, Screen};

/// Poll for and handle terminal events.
///
/// Returns `Ok(true)` when the app should exit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only react to press events (Windows also reports releases)
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // Typing a new key dismisses the previous status message
        if key.code != KeyCode::Enter {
            app.message = None;
        }

        // Control chords work everywhere, even while a field is capturing text
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(true),
                KeyCode::Char('l') => {
                    app.cycle_locale();
                    return Ok(false);
                }
                KeyCode::Char('r') => {
                    app.toggle_round_up();
                    return Ok(false);
                }
                _ => {}
            }
        }

        match app.screen {
            Screen::Help => handle_help_keys(app, key.code),
            Screen::Calculator => handle_calculator_keys(app, key),
        }

        if !app.running {
            return Ok(true);
        }
    }

    Ok(false)
}

fn handle_calculator_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        // Enter advances through the form, then toggles the switch
        KeyCode::Enter => match app.focus {
            Field::Bill | Field::TipPercent => app.focus_next(),
            Field::RoundUp => app.toggle_round_up(),
        },
        _ => match app.focus {
            Field::RoundUp => handle_switch_keys(app, key.code),
            Field::Bill | Field::TipPercent => {
                if let Some(input) = app.focused_input_mut() {
                    input.handle_event(&Event::Key(key));
                }
                app.refresh_entry_notice();
            }
        },
    }
}

/// Plain-letter shortcuts are only live while the switch has focus, so they
/// never collide with text entry in the amount fields.
fn handle_switch_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(' ') | KeyCode::Char('r') => app.toggle_round_up(),
        KeyCode::Char('l') => app.cycle_locale(),
        KeyCode::Char('?') => app.screen = Screen::Help,
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

fn handle_help_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.screen = Screen::Calculator;
        }
        _ => {}
    }
}
