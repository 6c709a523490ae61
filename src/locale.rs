use std::env;
use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::Locale;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use writeable::Writeable;

use crate::types::TipError;

/// Supported locales for currency output.
///
/// Each locale carries its CLDR digit formatting (grouping and decimal
/// separators via ICU4X) plus the symbol and placement conventions of its
/// default currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, EnumIter)]
pub enum TipLocale {
    #[default]
    EnUS,
    EnGB,
    DeDE,
    FrFR,
    IdID,
    JaJP,
}

/// Where the currency symbol sits relative to the formatted digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    /// `$1,234.56`
    Prefix,
    /// `1.234,56 €`
    SuffixSpaced,
}

/// Per-locale currency conventions: symbol, placement, and minor-unit digits.
struct CurrencySpec {
    code: &'static str,
    symbol: &'static str,
    fraction_digits: u32,
    position: SymbolPosition,
}

impl TipLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipLocale::EnUS => "en-US",
            TipLocale::EnGB => "en-GB",
            TipLocale::DeDE => "de-DE",
            TipLocale::FrFR => "fr-FR",
            TipLocale::IdID => "id-ID",
            TipLocale::JaJP => "ja-JP",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        self.as_str().parse().expect("Valid BCP-47 locale")
    }

    pub fn currency_code(&self) -> &'static str {
        self.spec().code
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.spec().symbol
    }

    /// Minor-unit digits of the locale's currency (2 for USD, 0 for JPY).
    pub fn fraction_digits(&self) -> u32 {
        self.spec().fraction_digits
    }

    fn spec(&self) -> CurrencySpec {
        match self {
            TipLocale::EnUS => CurrencySpec {
                code: "USD",
                symbol: "$",
                fraction_digits: 2,
                position: SymbolPosition::Prefix,
            },
            TipLocale::EnGB => CurrencySpec {
                code: "GBP",
                symbol: "\u{a3}",
                fraction_digits: 2,
                position: SymbolPosition::Prefix,
            },
            TipLocale::DeDE => CurrencySpec {
                code: "EUR",
                symbol: "\u{20ac}",
                fraction_digits: 2,
                position: SymbolPosition::SuffixSpaced,
            },
            TipLocale::FrFR => CurrencySpec {
                code: "EUR",
                symbol: "\u{20ac}",
                fraction_digits: 2,
                position: SymbolPosition::SuffixSpaced,
            },
            TipLocale::IdID => CurrencySpec {
                code: "IDR",
                symbol: "Rp",
                fraction_digits: 2,
                position: SymbolPosition::Prefix,
            },
            TipLocale::JaJP => CurrencySpec {
                code: "JPY",
                symbol: "\u{ffe5}",
                fraction_digits: 0,
                position: SymbolPosition::Prefix,
            },
        }
    }

    /// Resolves the locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_MONETARY`, then `LANG` (POSIX precedence); the
    /// first variable that is set and non-empty wins. An unset or
    /// unsupported environment falls back to [`TipLocale::EnUS`].
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .find_map(|key| env::var(key).ok().filter(|value| !value.is_empty()))
            .and_then(|tag| Self::from_env_tag(&tag))
            .unwrap_or_default()
    }

    /// Parses a POSIX-style locale value such as `en_US.UTF-8` or `de_DE@euro`.
    ///
    /// Encoding and modifier suffixes are dropped and underscores are mapped
    /// to hyphens before matching. Returns `None` for values like `C` or
    /// `POSIX` that name no supported locale.
    pub fn from_env_tag(tag: &str) -> Option<Self> {
        let stripped = tag.split(['.', '@']).next().unwrap_or(tag).trim();
        stripped.replace('_', "-").parse().ok()
    }

    /// Returns the next locale in a fixed cycle, wrapping at the end.
    pub fn next(self) -> Self {
        let all: Vec<TipLocale> = TipLocale::iter().collect();
        let idx = all.iter().position(|locale| *locale == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl std::fmt::Display for TipLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipLocale {
    type Err = TipError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(TipLocale::EnUS),
            "en-gb" => Ok(TipLocale::EnGB),
            "de-de" | "de" => Ok(TipLocale::DeDE),
            "fr-fr" | "fr" => Ok(TipLocale::FrFR),
            "id-id" | "id" => Ok(TipLocale::IdID),
            "ja-jp" | "ja" => Ok(TipLocale::JaJP),
            _ => Err(TipError::UnsupportedLocale {
                value: s.to_string(),
            }),
        }
    }
}

/// Trait for formatting usage.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

impl CurrencyFormatter for TipLocale {
    fn format_currency(&self, amount: Decimal) -> String {
        let spec = self.spec();
        let locale = self.to_icu_locale();

        // Use ICU4X FixedDecimalFormatter with compiled data
        // TODO: Use icu::experimental::currency::CurrencyFormatter when available in crates.io
        let options = FixedDecimalFormatterOptions::default();
        let formatter = FixedDecimalFormatter::try_new(&locale.into(), options)
            .expect("Failed to create ICU formatter with compiled data");

        // Half-even display rounding at the currency's minor unit, matching
        // what cash registers and bank statements show.
        let rounded = amount.round_dp_with_strategy(
            spec.fraction_digits,
            RoundingStrategy::MidpointNearestEven,
        );
        let negative = rounded < Decimal::ZERO;

        // Fix the scale so trailing zeros survive ("2" renders as "2.00"),
        // then hand the digits to ICU for grouping and separators. The sign
        // is reattached below so the symbol never splits it from the digits.
        let digits = format!(
            "{:.prec$}",
            rounded.abs(),
            prec = spec.fraction_digits as usize
        );
        let fixed_decimal = FixedDecimal::from_str(&digits).unwrap_or_else(|_| FixedDecimal::from(0));
        let number_str = formatter.format(&fixed_decimal).write_to_string().into_owned();

        let positive = match spec.position {
            SymbolPosition::Prefix => format!("{}{}", spec.symbol, number_str),
            SymbolPosition::SuffixSpaced => format!("{} {}", number_str, spec.symbol),
        };

        if negative {
            format!("-{}", positive)
        } else {
            positive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// ICU emits U+202F / U+00A0 for some group separators; normalize for
    /// readable assertions.
    fn plain_spaces(s: &str) -> String {
        s.replace(['\u{202f}', '\u{a0}'], " ")
    }

    #[test]
    fn test_currency_formatting() {
        let amount = dec!(1234.56);

        let res_us = TipLocale::EnUS.format_currency(amount);
        assert_eq!(res_us, "$1,234.56");

        let res_gb = TipLocale::EnGB.format_currency(amount);
        assert_eq!(res_gb, "\u{a3}1,234.56");

        let res_de = TipLocale::DeDE.format_currency(amount);
        assert_eq!(plain_spaces(&res_de), "1.234,56 \u{20ac}");

        let res_fr = TipLocale::FrFR.format_currency(amount);
        assert_eq!(plain_spaces(&res_fr), "1 234,56 \u{20ac}");

        let res_id = TipLocale::IdID.format_currency(amount);
        assert_eq!(res_id, "Rp1.234,56");
    }

    #[test]
    fn test_whole_amounts_keep_minor_units() {
        assert_eq!(TipLocale::EnUS.format_currency(dec!(2)), "$2.00");
        assert_eq!(TipLocale::EnUS.format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn test_yen_has_no_minor_units() {
        assert_eq!(TipLocale::JaJP.format_currency(dec!(1235)), "\u{ffe5}1,235");
        // Half-even at the minor unit: .5 resolves toward the even neighbor.
        assert_eq!(TipLocale::JaJP.format_currency(dec!(1234.5)), "\u{ffe5}1,234");
    }

    #[test]
    fn test_display_rounding_is_half_even() {
        assert_eq!(TipLocale::EnUS.format_currency(dec!(2.345)), "$2.34");
        assert_eq!(TipLocale::EnUS.format_currency(dec!(2.355)), "$2.36");
    }

    #[test]
    fn test_negative_amounts_carry_a_leading_minus() {
        assert_eq!(TipLocale::EnUS.format_currency(dec!(-2)), "-$2.00");
        let res_de = TipLocale::DeDE.format_currency(dec!(-1234.56));
        assert_eq!(plain_spaces(&res_de), "-1.234,56 \u{20ac}");
        // A value that rounds to zero must not render as negative.
        assert_eq!(TipLocale::EnUS.format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en-US".parse::<TipLocale>().unwrap(), TipLocale::EnUS);
        assert_eq!("DE-de".parse::<TipLocale>().unwrap(), TipLocale::DeDE);
        assert_eq!("fr".parse::<TipLocale>().unwrap(), TipLocale::FrFR);
        assert!(matches!(
            "xx-XX".parse::<TipLocale>(),
            Err(TipError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn test_env_tag_normalization() {
        assert_eq!(TipLocale::from_env_tag("en_US.UTF-8"), Some(TipLocale::EnUS));
        assert_eq!(TipLocale::from_env_tag("de_DE@euro"), Some(TipLocale::DeDE));
        assert_eq!(TipLocale::from_env_tag("ja_JP.eucJP"), Some(TipLocale::JaJP));
        assert_eq!(TipLocale::from_env_tag("C"), None);
        assert_eq!(TipLocale::from_env_tag("POSIX"), None);
    }

    #[test]
    fn test_locale_cycle_visits_every_locale_and_wraps() {
        let mut seen = vec![TipLocale::default()];
        let mut current = TipLocale::default();
        for _ in 1..TipLocale::iter().count() {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen.len(), TipLocale::iter().count());
        assert_eq!(current.next(), TipLocale::default());
    }
}
