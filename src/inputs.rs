use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::types::TipError;

/// Trait for converting various types into `Decimal` for tip calculations.
///
/// This trait allows users to pass `i32`, `f64`, `&str`, etc. directly into
/// the calculator without needing to wrap them in `dec!()` or `Decimal::from()`.
pub trait IntoTipAmount {
    fn into_tip_amount(self) -> Result<Decimal, TipError>;
}

// Implement for Decimal (passthrough)
impl IntoTipAmount for Decimal {
    fn into_tip_amount(self) -> Result<Decimal, TipError> {
        Ok(self)
    }
}

// Implement for Integers
macro_rules! impl_into_tip_amount_int {
    ($($t:ty),*) => {
        $(
            impl IntoTipAmount for $t {
                fn into_tip_amount(self) -> Result<Decimal, TipError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_tip_amount_int!(i32, u32, i64, u64, isize, usize);

// Implement for Floats
macro_rules! impl_into_tip_amount_float {
    ($($t:ty),*) => {
        $(
            impl IntoTipAmount for $t {
                fn into_tip_amount(self) -> Result<Decimal, TipError> {
                    Decimal::from_f64_retain(self as f64).ok_or_else(|| TipError::InvalidAmount {
                        value: self.to_string(),
                        reason: "not representable as a decimal".to_string(),
                    })
                }
            }
        )*
    };
}

impl_into_tip_amount_float!(f32, f64);

// Implement for Strings
impl IntoTipAmount for &str {
    fn into_tip_amount(self) -> Result<Decimal, TipError> {
        Decimal::from_str(self.trim()).map_err(|e| TipError::InvalidAmount {
            value: self.to_string(),
            reason: e.to_string(),
        })
    }
}

impl IntoTipAmount for String {
    fn into_tip_amount(self) -> Result<Decimal, TipError> {
        self.as_str().into_tip_amount()
    }
}

/// Parses free-form text into an amount, coercing anything unparseable to zero.
///
/// This is the entry-value rule for interactive front-ends: a half-typed or
/// emptied field contributes `0` to the calculation instead of an error, so
/// the result can be re-derived on every keystroke.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tiptime::inputs::parse_amount;
///
/// assert_eq!(parse_amount("12.50"), dec!(12.50));
/// assert_eq!(parse_amount(""), dec!(0));
/// assert_eq!(parse_amount("12..5"), dec!(0));
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed).unwrap_or_else(|_| {
        debug!(input = %trimmed, "unparseable amount coerced to zero");
        Decimal::ZERO
    })
}
