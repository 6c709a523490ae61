use rust_decimal_macros::dec;
use tiptime::prelude::*;

/// ICU emits U+202F / U+00A0 for some group separators; normalize for
/// readable assertions.
fn plain_spaces(s: &str) -> String {
    s.replace(['\u{202f}', '\u{a0}'], " ")
}

fn large_breakdown() -> TipBreakdown {
    // tip = 1234.56 * 20% = 246.912
    TipCalculator::new()
        .bill(dec!(1234.56))
        .percent(dec!(20))
        .calculate()
}

#[test]
fn test_breakdown_formats_every_amount() {
    let breakdown = large_breakdown();

    assert_eq!(breakdown.format_bill(&TipLocale::EnUS), "$1,234.56");
    assert_eq!(breakdown.format_tip(&TipLocale::EnUS), "$246.91");
    assert_eq!(breakdown.format_total(&TipLocale::EnUS), "$1,481.47");
}

#[test]
fn test_one_breakdown_renders_in_any_locale() {
    let breakdown = large_breakdown();

    assert_eq!(breakdown.format_tip(&TipLocale::EnGB), "\u{a3}246.91");
    assert_eq!(
        plain_spaces(&breakdown.format_tip(&TipLocale::DeDE)),
        "246,91 \u{20ac}"
    );
    assert_eq!(
        plain_spaces(&breakdown.format_tip(&TipLocale::FrFR)),
        "246,91 \u{20ac}"
    );
    assert_eq!(breakdown.format_tip(&TipLocale::IdID), "Rp246,91");
    // Yen has no minor units: 246.912 rounds to 247 for display.
    assert_eq!(breakdown.format_tip(&TipLocale::JaJP), "\u{ffe5}247");
}

#[test]
fn test_grouping_follows_the_locale() {
    let breakdown = large_breakdown();

    assert_eq!(
        plain_spaces(&breakdown.format_bill(&TipLocale::FrFR)),
        "1 234,56 \u{20ac}"
    );
    assert_eq!(breakdown.format_bill(&TipLocale::IdID), "Rp1.234,56");
    assert_eq!(breakdown.format_bill(&TipLocale::JaJP), "\u{ffe5}1,235");
}

#[test]
fn test_summary_is_locale_aware() {
    let breakdown = TipCalculator::new()
        .bill(dec!(10))
        .percent(dec!(25))
        .round_up(true)
        .calculate();

    assert_eq!(
        breakdown.summary(&TipLocale::EnUS),
        "25% of $10.00 -> $3.00 tip (rounded up), $13.00 total"
    );
    assert_eq!(
        plain_spaces(&breakdown.summary(&TipLocale::DeDE)),
        "25% of 10,00 \u{20ac} -> 3,00 \u{20ac} tip (rounded up), 13,00 \u{20ac} total"
    );
}

#[test]
fn test_env_tags_map_to_locales() {
    assert_eq!(TipLocale::from_env_tag("en_US.UTF-8"), Some(TipLocale::EnUS));
    assert_eq!(TipLocale::from_env_tag("en_GB.UTF-8"), Some(TipLocale::EnGB));
    assert_eq!(TipLocale::from_env_tag("fr_FR@euro"), Some(TipLocale::FrFR));
    assert_eq!(TipLocale::from_env_tag("id_ID"), Some(TipLocale::IdID));
    assert_eq!(TipLocale::from_env_tag("C.UTF-8"), None);
    assert_eq!(TipLocale::from_env_tag(""), None);
}

#[test]
fn test_locale_round_trips_through_display() {
    let locales = [
        TipLocale::EnUS,
        TipLocale::EnGB,
        TipLocale::DeDE,
        TipLocale::FrFR,
        TipLocale::IdID,
        TipLocale::JaJP,
    ];
    for locale in locales {
        assert_eq!(locale.to_string().parse::<TipLocale>().unwrap(), locale);
    }
}

#[test]
fn test_unknown_locale_tag_is_a_typed_error() {
    let err = "pt-BR".parse::<TipLocale>().unwrap_err();
    assert_eq!(
        err,
        TipError::UnsupportedLocale {
            value: "pt-BR".to_string()
        }
    );
    assert_eq!(err.to_string(), "unsupported locale 'pt-BR'");
}
