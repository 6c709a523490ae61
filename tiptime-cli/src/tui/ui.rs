//! UI rendering for the TUI.
//!
//! A single centered calculator card with two text fields, a round-up
//! switch, and live result cards that update on every keystroke. Styled
//! with the Copper/Mint theme.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_input::Input;

use crate::tui::app::{App, Field, MessageType, Screen};
use crate::tui::components::{StatCard, Switch};
use crate::tui::theme::{icons, theme};

use tiptime::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

/// Main UI rendering function - entry point for all screen rendering.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    // Clear the entire frame first to prevent visual artifacts from popups
    frame.render_widget(Clear, frame.area());

    // Then set background color
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main Content
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_calculator(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);

    // Overlays are rendered last so they appear on top
    if app.screen == Screen::Help {
        render_help(frame, frame.area());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Left: Brand
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.copper)),
        Span::raw(" "),
        Span::styled("TIP", t.title()),
        Span::styled(
            "TIME",
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    // Right: Locale Ticker
    let locale_line = Line::from(vec![
        Span::styled("Locale: ", Style::default().fg(t.text_muted)),
        Span::styled(app.locale.to_string(), t.accent_style()),
        Span::raw("  "),
        Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
        Span::raw("  "),
        Span::styled(
            app.locale.currency_code(),
            Style::default().fg(t.text_primary),
        ),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(locale_line).alignment(Alignment::Right),
        layout[1],
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// CALCULATOR CARD
// ═══════════════════════════════════════════════════════════════════════════

fn render_calculator(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let breakdown = app.breakdown();

    let card_area = centered_rect(64, 92, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_inactive())
        .title(" Calculate Tip ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .style(t.bg());

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Bill amount field
            Constraint::Length(3), // Tip percentage field
            Constraint::Length(3), // Round-up switch
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Result cards
            Constraint::Length(1), // Rounding hint
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        rows[0],
        &format!("Bill Amount ({})", app.locale.currency_symbol()),
        &app.bill_input,
        app.focus == Field::Bill,
    );
    render_text_field(
        frame,
        rows[1],
        "Tip Percentage (%)",
        &app.percent_input,
        app.focus == Field::TipPercent,
    );
    render_switch_row(frame, rows[2], app);
    render_results(frame, rows[4], app, &breakdown);
    render_rounding_hint(frame, rows[5], app, &breakdown);
}

/// Render one bordered text field with its label on the border.
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &Input, is_active: bool) {
    let t = theme();

    let border_style = if is_active {
        t.border_active()
    } else {
        t.border_inactive()
    };
    let title_style = if is_active { t.title() } else { t.subtitle() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", label))
        .title_style(title_style)
        .style(t.bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Empty fields read as zero, so show that instead of a blank row
    let (display, value_style) = if input.value().is_empty() {
        (
            "0",
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (input.value(), t.text())
    };
    frame.render_widget(Paragraph::new(Span::styled(display, value_style)), inner);

    if is_active {
        frame.set_cursor_position((inner.x + input.visual_cursor() as u16, inner.y));
    }
}

fn render_switch_row(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let is_active = app.focus == Field::RoundUp;

    let border_style = if is_active {
        t.border_active()
    } else {
        t.border_inactive()
    };
    let title_style = if is_active { t.title() } else { t.subtitle() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(" Round Up Tip ")
        .title_style(title_style)
        .style(t.bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut line = Switch::new(app.round_up).focused(is_active).to_line();
    line.spans.push(Span::raw("  "));
    line.spans.push(Span::styled(
        "next whole unit, never down",
        Style::default().fg(t.text_muted),
    ));
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, breakdown: &TipBreakdown) {
    let t = theme();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    StatCard::new("Tip Amount", &breakdown.format_tip(&app.locale))
        .value_color(t.mint)
        .subtitle(&format!(
            "{}% of {}",
            breakdown.tip_percent.normalize(),
            breakdown.format_bill(&app.locale)
        ))
        .render(frame, cards[0]);

    StatCard::new("Total With Tip", &breakdown.format_total(&app.locale))
        .value_color(t.text_primary)
        .subtitle("bill + tip")
        .render(frame, cards[1]);
}

/// Show where the rounded tip came from, but only when rounding changed it.
fn render_rounding_hint(frame: &mut Frame, area: Rect, app: &App, breakdown: &TipBreakdown) {
    let t = theme();

    if !breakdown.round_up || breakdown.raw_tip == breakdown.tip {
        return;
    }

    let hint = Line::from(vec![
        Span::styled(
            format!("{} ", icons::ARROW_RIGHT),
            Style::default().fg(t.copper),
        ),
        Span::styled(
            format!(
                "rounded up from {}",
                app.locale.format_currency(breakdown.raw_tip)
            ),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let mode = match app.screen {
        Screen::Calculator => "CALCULATOR",
        Screen::Help => "HELP",
    };

    // Status badge
    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Warning => t.warning,
            MessageType::Info => t.accent,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.slate))
    } else {
        Span::styled(
            format!(" {} ", mode),
            Style::default().bg(t.slate_light).fg(t.text_muted),
        )
    };

    // Keys hint, adapted to what is focused
    let hint = match (app.screen, app.focus) {
        (Screen::Help, _) => " [Esc] Close",
        (_, Field::RoundUp) => {
            " [Space] Toggle  [L] Locale  [Tab] Next Field  [?] Help  [Q] Quit"
        }
        _ => " [Tab] Next Field  [Ctrl+L] Locale  [Ctrl+R] Round-Up  [Esc] Quit",
    };
    let keys = Span::styled(hint, Style::default().fg(t.text_muted));

    let bar = Line::from(vec![status, Span::raw(" "), keys]);

    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP OVERLAY
// ═══════════════════════════════════════════════════════════════════════════

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme();

    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg());

    let section = |label: &'static str| {
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(t.copper)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
    };
    let binding = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), t.accent_style()),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("KEYS"),
        Line::from(""),
        binding("Tab / ↓", "Next field"),
        binding("S-Tab / ↑", "Previous field"),
        binding("Enter", "Advance / toggle switch"),
        binding("Space", "Toggle round-up (on switch)"),
        binding("Ctrl+L", "Cycle display locale"),
        binding("Ctrl+R", "Toggle round-up anywhere"),
        binding("?", "This help (on switch)"),
        binding("Esc", "Quit"),
        Line::from(""),
        section("HOW THE TIP IS COMPUTED"),
        Line::from(""),
        Line::from("  tip = bill × percent / 100"),
        Line::from("  Round-up lifts the tip to the next whole currency"),
        Line::from("  unit (a ceiling, never down), then total = bill + tip."),
        Line::from("  Text that does not parse as a number counts as 0."),
        Line::from(""),
        Line::from(Span::styled(
            format!("tiptime v{} - press [Esc] to close", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

// ═══════════════════════════════════════════════════════════════════════════
// UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Helper to center a rect within a parent.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod ui_tests;
