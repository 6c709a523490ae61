//! Application state and screen management.

use rust_decimal::Decimal;
use tui_input::Input;

use tiptime::prelude::*;

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The calculator form
    Calculator,
    /// Help overlay
    Help,
}

/// Form element that currently owns keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Bill,
    TipPercent,
    RoundUp,
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
}

/// Main application state.
///
/// The derived amounts are intentionally not stored here: every frame calls
/// [`App::breakdown`] against the current field values, so the displayed tip
/// can never drift from what was typed.
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Which form element has focus
    pub focus: Field,
    /// Bill amount text field state
    pub bill_input: Input,
    /// Tip percentage text field state
    pub percent_input: Input,
    /// Whether the round-up rule is enabled
    pub round_up: bool,
    /// Locale used for currency output
    pub locale: TipLocale,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
}

impl App {
    /// Create a new App instance, prefilled from CLI/config defaults.
    pub fn new(locale: TipLocale, default_percent: Option<Decimal>, round_up: bool) -> Self {
        let percent_input = match default_percent {
            Some(percent) => Input::default().with_value(percent.normalize().to_string()),
            None => Input::default(),
        };

        Self {
            running: true,
            screen: Screen::Calculator,
            focus: Field::Bill,
            bill_input: Input::default(),
            percent_input,
            round_up,
            locale,
            message: None,
        }
    }

    /// Derive the breakdown from the current form values.
    ///
    /// Unparseable field text contributes zero, mirroring how an emptied or
    /// half-typed entry should behave while the user is still typing.
    pub fn breakdown(&self) -> TipBreakdown {
        TipCalculator::new()
            .bill(parse_amount(self.bill_input.value()))
            .percent(parse_amount(self.percent_input.value()))
            .round_up(self.round_up)
            .calculate()
    }

    /// The text input owning focus, if focus is on a text field.
    pub fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            Field::Bill => Some(&mut self.bill_input),
            Field::TipPercent => Some(&mut self.percent_input),
            Field::RoundUp => None,
        }
    }

    /// Move focus to the next form element, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Bill => Field::TipPercent,
            Field::TipPercent => Field::RoundUp,
            Field::RoundUp => Field::Bill,
        };
    }

    /// Move focus to the previous form element, wrapping at the start.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Bill => Field::RoundUp,
            Field::TipPercent => Field::Bill,
            Field::RoundUp => Field::TipPercent,
        };
    }

    /// Flip the round-up switch.
    pub fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
    }

    /// Switch to the next locale and announce it in the status bar.
    pub fn cycle_locale(&mut self) {
        self.locale = self.locale.next();
        self.message = Some((
            format!("Locale: {} ({})", self.locale, self.locale.currency_code()),
            MessageType::Info,
        ));
    }

    /// Re-derive the "treated as 0" warning from the current field text.
    pub fn refresh_entry_notice(&mut self) {
        let notice = if treated_as_zero(self.bill_input.value()) {
            Some(format!(
                "'{}' is not a number - bill treated as 0",
                self.bill_input.value().trim()
            ))
        } else if treated_as_zero(self.percent_input.value()) {
            Some(format!(
                "'{}' is not a number - tip treated as 0",
                self.percent_input.value().trim()
            ))
        } else {
            None
        };

        self.message = notice.map(|text| (text, MessageType::Warning));
    }
}

/// True when non-empty text fails to parse and will be coerced to zero.
fn treated_as_zero(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<Decimal>().is_err()
}
