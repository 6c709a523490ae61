//! Toggle Switch Widget
//!
//! A two-state switch rendered as a slider track, e.g. `[──●] On`.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::super::theme::{icons, theme};

/// A toggle switch with an on/off label.
pub struct Switch {
    checked: bool,
    focused: bool,
}

impl Switch {
    /// Create a switch in the given state.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            focused: false,
        }
    }

    /// Set whether the switch currently has keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the switch as a styled line for embedding in a paragraph.
    pub fn to_line(&self) -> Line<'static> {
        let t = theme();

        let track_style = if self.focused {
            Style::default().fg(t.copper)
        } else {
            Style::default().fg(t.slate_light)
        };
        let thumb_style = if self.checked {
            Style::default().fg(t.mint).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.text_muted)
        };

        // The thumb sits at the end of the track when on, at the start when off
        let mut spans = vec![Span::styled("[", track_style)];
        if self.checked {
            spans.push(Span::styled(icons::SWITCH_TRACK, track_style));
            spans.push(Span::styled(icons::SWITCH_ON, thumb_style));
        } else {
            spans.push(Span::styled(icons::SWITCH_OFF, thumb_style));
            spans.push(Span::styled(icons::SWITCH_TRACK, track_style));
        }
        spans.push(Span::styled("]", track_style));
        spans.push(Span::raw(" "));
        spans.push(if self.checked {
            Span::styled("On", Style::default().fg(t.mint))
        } else {
            Span::styled("Off", Style::default().fg(t.text_muted))
        });

        Line::from(spans)
    }
}
