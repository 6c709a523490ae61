use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::{CurrencyFormatter, TipLocale};

/// Errors raised at the fallible edges of the crate.
///
/// The tip computation itself is total and never returns one of these; they
/// exist for strict typed conversions ([`crate::inputs::IntoTipAmount`]) and
/// locale parsing ([`TipLocale`]'s `FromStr`). Free-form text entry goes
/// through the lenient [`crate::inputs::parse_amount`] instead, which coerces
/// rather than fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum TipError {
    /// A typed input could not be represented as a decimal amount.
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },
    /// A locale tag did not match any supported locale.
    #[error("unsupported locale '{value}'")]
    UnsupportedLocale { value: String },
}

/// The kind of operation a [`CalculationStep`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Rate,
    Ceil,
    Result,
    Info,
}

/// Represents a single step in the tip calculation.
///
/// Steps provide transparency into how the final amounts were derived,
/// enabling users to understand and verify the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    /// The operation this step performed.
    pub operation: Operation,
}

impl CalculationStep {
    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Initial,
        }
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(rate),
            operation: Operation::Rate,
        }
    }

    pub fn ceil(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Ceil,
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Result,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// Represents the detailed breakdown of a tip calculation.
///
/// Everything here is plain owned data: the inputs are echoed back, the
/// derived amounts sit alongside them, and `calculation_trace` records the
/// arithmetic step by step. Nothing depends on a locale; formatting is
/// applied on demand via [`TipBreakdown::format_tip`] and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipBreakdown {
    /// The bill total the tip was computed from.
    pub bill_amount: Decimal,
    /// The tip percentage (20 means 20%).
    pub tip_percent: Decimal,
    /// Whether the round-up rule was requested.
    pub round_up: bool,
    /// The tip before any rounding: `(tip_percent / 100) * bill_amount`.
    pub raw_tip: Decimal,
    /// The final tip. Equal to `raw_tip`, or its ceiling when `round_up` is set.
    pub tip: Decimal,
    /// Convenience sum: `bill_amount + tip`.
    pub total: Decimal,
    /// Step-by-step trace of how this result was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl TipBreakdown {
    /// Returns the tip rendered in the given locale's currency.
    pub fn format_tip(&self, locale: &TipLocale) -> String {
        locale.format_currency(self.tip)
    }

    /// Returns the bill amount rendered in the given locale's currency.
    pub fn format_bill(&self, locale: &TipLocale) -> String {
        locale.format_currency(self.bill_amount)
    }

    /// Returns the bill-plus-tip total rendered in the given locale's currency.
    pub fn format_total(&self, locale: &TipLocale) -> String {
        locale.format_currency(self.total)
    }

    /// Returns a concise status string.
    /// Format: "{percent}% of {bill} -> {tip} tip, {total} total"
    pub fn summary(&self, locale: &TipLocale) -> String {
        let rounding = if self.round_up { " (rounded up)" } else { "" };
        format!(
            "{}% of {} -> {} tip{}, {} total",
            self.tip_percent.normalize(),
            self.format_bill(locale),
            self.format_tip(locale),
            rounding,
            self.format_total(locale),
        )
    }

    /// Generates a human-readable explanation of the tip calculation.
    ///
    /// The output is formatted as a step-by-step table, showing operations
    /// and their values, helping users verify exactly how `tip` was determined.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        writeln!(&mut output, "Tip calculation breakdown:").unwrap();
        writeln!(&mut output, "{:-<50}", "").unwrap();

        // Find the maximum description length for alignment
        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let op_symbol = match step.operation {
                Operation::Initial => " ",
                Operation::Rate => "x",
                Operation::Ceil => "^",
                Operation::Result => "=",
                Operation::Info => " ",
            };

            if step.operation == Operation::Info {
                writeln!(&mut output, "  INFO: {}", step.description).unwrap();
                continue;
            }

            let amount_str = match step.amount {
                // Rates carry more precision than currency amounts, e.g. 0.175
                Some(amt) if step.operation == Operation::Rate => format!("{:.3}", amt),
                Some(amt) => format!("{:.2}", amt),
                None => String::new(),
            };

            writeln!(
                &mut output,
                "  {:<width$} : {} {:>10}",
                step.description,
                op_symbol,
                amount_str,
                width = max_desc_len
            )
            .unwrap();
        }

        writeln!(&mut output, "{:-<50}", "").unwrap();
        writeln!(&mut output, "Tip due: {:.2}", self.tip).unwrap();

        output
    }
}

impl std::fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounding = if self.round_up { " (rounded up)" } else { "" };
        write!(
            f,
            "Tip: {:.2} on {:.2} at {}%{}",
            self.tip,
            self.bill_amount,
            self.tip_percent.normalize(),
            rounding
        )
    }
}
