use ratatui::{Terminal, backend::TestBackend};
use rust_decimal_macros::dec;
use tui_input::Input;

use crate::tui::app::{App, MessageType, Screen};
use crate::tui::ui::ui;
use tiptime::prelude::*;

/// Flatten the rendered buffer into one string per row, newline-joined,
/// so assertions can look for labels and amounts with `contains`.
fn render_to_text(width: u16, height: u16, app: &App) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        // Wide symbols (e.g. a fullwidth yen sign) occupy one cell plus
        // blank continuation cells; skip those so rows read as on screen.
        let mut skip = 0usize;
        for x in 0..width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if let Some(cell) = buffer.cell((x, y)) {
                let symbol = cell.symbol();
                text.push_str(symbol);
                skip = unicode_width::UnicodeWidthStr::width(symbol).saturating_sub(1);
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_render_header_and_form_labels() {
    let app = App::new(TipLocale::EnUS, None, false);
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("TIPTIME"), "header should carry the brand");
    assert!(text.contains("en-US"), "header should show the locale");
    assert!(text.contains("USD"), "header should show the currency code");
    assert!(text.contains("Bill Amount"));
    assert!(text.contains("Tip Percentage"));
    assert!(text.contains("Round Up Tip"));
}

#[test]
fn test_empty_form_renders_zero_results() {
    let app = App::new(TipLocale::EnUS, None, false);
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("Tip Amount"));
    assert!(text.contains("Total With Tip"));
    // Empty fields count as zero, so both cards show a formatted zero
    assert!(text.contains("$0.00"));
}

#[test]
fn test_typed_values_recompute_results_live() {
    let mut app = App::new(TipLocale::EnUS, None, false);
    app.bill_input = Input::default().with_value("10".to_string());
    app.percent_input = Input::default().with_value("25".to_string());
    let text = render_to_text(80, 24, &app);

    // 10 * 0.25 = 2.50
    assert!(text.contains("$2.50"));
    assert!(text.contains("$12.50"));
}

#[test]
fn test_round_up_shows_hint_with_raw_tip() {
    let mut app = App::new(TipLocale::EnUS, None, true);
    app.bill_input = Input::default().with_value("10".to_string());
    app.percent_input = Input::default().with_value("25".to_string());
    let text = render_to_text(80, 24, &app);

    // 2.50 ceils to 3.00; the hint points back at the unrounded tip
    assert!(text.contains("$3.00"));
    assert!(text.contains("rounded up from $2.50"));
}

#[test]
fn test_default_percent_prefills_the_field() {
    let app = App::new(TipLocale::EnUS, Some(dec!(18)), false);
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("18"));
}

#[test]
fn test_locale_drives_currency_in_results() {
    let mut app = App::new(TipLocale::JaJP, None, false);
    app.bill_input = Input::default().with_value("1000".to_string());
    app.percent_input = Input::default().with_value("10".to_string());
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("ja-JP"));
    assert!(text.contains("\u{ffe5}100"));
}

#[test]
fn test_render_help_overlay() {
    let mut app = App::new(TipLocale::EnUS, None, false);
    app.screen = Screen::Help;
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("Help"));
    assert!(text.contains("Ctrl+L"));
}

#[test]
fn test_status_bar_shows_warning_message() {
    let mut app = App::new(TipLocale::EnUS, None, false);
    app.message = Some((
        "'abc' is not a number - bill treated as 0".to_string(),
        MessageType::Warning,
    ));
    let text = render_to_text(80, 24, &app);

    assert!(text.contains("treated as 0"));
}

#[test]
fn test_render_survives_small_terminal() {
    let mut app = App::new(TipLocale::EnUS, None, false);
    app.bill_input = Input::default().with_value("10".to_string());
    // Should clamp layout rather than panic
    render_to_text(40, 10, &app);
    render_to_text(20, 5, &app);
}
