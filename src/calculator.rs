//! # Tip Calculation
//!
//! ## Rule
//! - **Raw tip**: `(tip_percent / 100) * bill_amount`, carried at full
//!   decimal precision.
//! - **Round-up**: when requested, the raw tip is raised to the next whole
//!   currency unit (ceiling), a common courtesy convention so the gratuity
//!   lands on a round figure.
//!
//! The computation is total: any combination of inputs produces a result.
//! Out-of-range values (negative bills, percentages above 100) pass through
//! the same arithmetic, and the caller decides whether to gate them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inputs::IntoTipAmount;
use crate::locale::TipLocale;
use crate::types::{CalculationStep, TipBreakdown};

/// Builder-style tip calculator.
///
/// Setters accept anything convertible to a decimal amount ([`IntoTipAmount`]);
/// values that fail strict conversion leave the field untouched, so a fully
/// defaulted calculator still produces a valid (all-zero) breakdown.
///
/// ```
/// use tiptime::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let breakdown = TipCalculator::new()
///     .bill(dec!(10.00))
///     .percent(dec!(20))
///     .round_up(false)
///     .calculate();
///
/// assert_eq!(breakdown.tip, dec!(2.00));
/// assert_eq!(breakdown.format_tip(&TipLocale::EnUS), "$2.00");
/// ```
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipCalculator {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
}

impl TipCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(mut self, amount: impl IntoTipAmount) -> Self {
        if let Ok(a) = amount.into_tip_amount() {
            self.bill_amount = a;
        }
        self
    }

    pub fn percent(mut self, percent: impl IntoTipAmount) -> Self {
        if let Ok(p) = percent.into_tip_amount() {
            self.tip_percent = p;
        }
        self
    }

    pub fn round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }

    /// Runs the calculation and returns the full breakdown with its trace.
    ///
    /// Never panics: amounts near the edge of the decimal range saturate at
    /// `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
    pub fn calculate(&self) -> TipBreakdown {
        let rate = self.tip_percent / Decimal::ONE_HUNDRED;
        let raw_tip = rate.saturating_mul(self.bill_amount);
        let tip = if self.round_up { raw_tip.ceil() } else { raw_tip };
        let total = self.bill_amount.saturating_add(tip);

        let mut trace = vec![
            CalculationStep::initial("Bill Amount", self.bill_amount),
            CalculationStep::rate(
                format!("Tip Rate ({}%)", self.tip_percent.normalize()),
                rate,
            ),
            CalculationStep::result("Tip Before Rounding", raw_tip),
        ];
        if self.round_up {
            trace.push(CalculationStep::ceil("Rounded Up to Whole Unit", tip));
        } else {
            trace.push(CalculationStep::info("Round-up disabled"));
        }
        trace.push(CalculationStep::result("Total With Tip", total));

        debug!(
            bill = %self.bill_amount,
            percent = %self.tip_percent,
            round_up = self.round_up,
            tip = %tip,
            "tip calculated"
        );

        TipBreakdown {
            bill_amount: self.bill_amount,
            tip_percent: self.tip_percent,
            round_up: self.round_up,
            raw_tip,
            tip,
            total,
            calculation_trace: trace,
        }
    }
}

/// Computes a tip and renders it in the host locale's currency.
///
/// This is the whole contract in one call: unparseable inputs have already
/// been coerced by the caller or fall back to zero via the setters, the raw
/// tip is ceiled when `round_up` is set, and the result is formatted for the
/// locale detected from the environment ([`TipLocale::from_env`]). For a
/// fixed locale or access to the intermediate amounts, use [`TipCalculator`]
/// directly.
pub fn calculate_tip(
    bill_amount: impl IntoTipAmount,
    tip_percent: impl IntoTipAmount,
    round_up: bool,
) -> String {
    let breakdown = TipCalculator::new()
        .bill(bill_amount)
        .percent(tip_percent)
        .round_up(round_up)
        .calculate();
    breakdown.format_tip(&TipLocale::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_twenty_percent_of_ten() {
        // 10.00 * 0.20 = 2.00. Already whole, no rounding either way.
        let res = TipCalculator::new()
            .bill(dec!(10.00))
            .percent(dec!(20.00))
            .calculate();

        assert_eq!(res.raw_tip, dec!(2.00));
        assert_eq!(res.tip, dec!(2.00));
        assert_eq!(res.total, dec!(12.00));
    }

    #[test]
    fn test_round_up_ceils_to_next_whole_unit() {
        // 10.00 * 0.25 = 2.50 -> ceil -> 3.
        let res = TipCalculator::new()
            .bill(dec!(10.00))
            .percent(dec!(25.00))
            .round_up(true)
            .calculate();

        assert_eq!(res.raw_tip, dec!(2.50));
        assert_eq!(res.tip, dec!(3));
        assert_eq!(res.total, dec!(13));
    }

    #[test]
    fn test_round_up_is_a_noop_on_whole_tips() {
        let res = TipCalculator::new()
            .bill(dec!(10.00))
            .percent(dec!(20.00))
            .round_up(true)
            .calculate();

        assert_eq!(res.tip, dec!(2.00));
    }

    #[test]
    fn test_defaulted_calculator_yields_zero() {
        let res = TipCalculator::new().calculate();
        assert_eq!(res.tip, Decimal::ZERO);
        assert_eq!(res.total, Decimal::ZERO);
    }

    #[test]
    fn test_setters_ignore_unconvertible_values() {
        // NAN fails strict conversion, so the bill stays at its default.
        let res = TipCalculator::new()
            .bill(f64::NAN)
            .percent(dec!(20))
            .calculate();
        assert_eq!(res.bill_amount, Decimal::ZERO);
        assert_eq!(res.tip, Decimal::ZERO);
    }

    #[test]
    fn test_negative_bill_propagates() {
        // -10.00 * 0.20 = -2.00. Sign flows through untouched.
        let res = TipCalculator::new()
            .bill(dec!(-10.00))
            .percent(dec!(20))
            .calculate();
        assert_eq!(res.tip, dec!(-2.00));
        assert_eq!(res.total, dec!(-12.00));
    }

    #[test]
    fn test_negative_raw_tip_ceils_toward_zero() {
        // -2.50 -> ceil -> -2 (ceiling moves toward positive infinity).
        let res = TipCalculator::new()
            .bill(dec!(-10.00))
            .percent(dec!(25))
            .round_up(true)
            .calculate();
        assert_eq!(res.tip, dec!(-2));
    }

    #[test]
    fn test_trace_records_the_ceil_step_only_when_rounding() {
        use crate::types::Operation;

        let rounded = TipCalculator::new()
            .bill(dec!(10))
            .percent(dec!(25))
            .round_up(true)
            .calculate();
        assert!(rounded
            .calculation_trace
            .iter()
            .any(|step| step.operation == Operation::Ceil));

        let plain = TipCalculator::new()
            .bill(dec!(10))
            .percent(dec!(25))
            .calculate();
        assert!(!plain
            .calculation_trace
            .iter()
            .any(|step| step.operation == Operation::Ceil));
    }
}
