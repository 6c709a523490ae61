//! Stat Card Widget
//!
//! A reusable bordered card for displaying one computed amount, with the
//! label on the border and the value centered inside.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::theme;

/// A stat card displaying a titled value with optional subtitle.
pub struct StatCard<'a> {
    /// Card title, rendered on the top border
    title: &'a str,
    /// Card value to display
    value: &'a str,
    /// Color for the value text
    value_color: Color,
    /// Optional subtitle below the value
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card with title and value.
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_color: theme().text_primary,
            subtitle: None,
        }
    }

    /// Set the value color.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    /// Set an optional subtitle.
    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Render the stat card to the frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_inactive())
            .title(format!(" {} ", self.title))
            .title_style(t.subtitle())
            .style(t.bg());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from(Span::styled(
            self.value,
            Style::default()
                .fg(self.value_color)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = self.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle,
                Style::default().fg(t.text_muted),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}
