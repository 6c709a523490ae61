use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tiptime::prelude::*;

#[test]
fn test_builder_accepts_mixed_input_types() {
    let from_strings = TipCalculator::new().bill("10.00").percent("20").calculate();
    let from_ints = TipCalculator::new().bill(10).percent(20).calculate();
    let from_decimals = TipCalculator::new()
        .bill(dec!(10.00))
        .percent(dec!(20))
        .calculate();

    assert_eq!(from_strings.tip, from_decimals.tip);
    assert_eq!(from_ints.tip, from_decimals.tip);
}

#[test]
fn test_float_inputs_format_cleanly() {
    // f64 conversion retains the closest representable value; the two-digit
    // currency rendering hides the binary tail.
    let breakdown = TipCalculator::new()
        .bill(10.0f64)
        .percent(20.0f64)
        .calculate();

    assert_eq!(breakdown.format_tip(&TipLocale::EnUS), "$2.00");
}

#[test]
fn test_half_typed_field_is_treated_as_zero() {
    for text in ["", "   ", ".", "-", "3.1.4", "10,50", "ten"] {
        assert_eq!(parse_amount(text), Decimal::ZERO, "for input {text:?}");
    }
}

#[test]
fn test_whitespace_padding_is_tolerated() {
    assert_eq!(parse_amount("  42.0 "), dec!(42.0));
    assert_eq!("  42.0 ".into_tip_amount().unwrap(), dec!(42));
}

#[test]
fn test_strict_errors_name_the_offending_value() {
    let err = "ten dollars".into_tip_amount().unwrap_err();
    assert!(matches!(err, TipError::InvalidAmount { .. }));
    assert!(err.to_string().contains("ten dollars"));
}

#[test]
fn test_non_finite_floats_leave_the_builder_untouched() {
    let breakdown = TipCalculator::new()
        .bill(f64::NAN)
        .percent(f64::INFINITY)
        .calculate();

    assert_eq!(breakdown.bill_amount, Decimal::ZERO);
    assert_eq!(breakdown.tip_percent, Decimal::ZERO);
    assert_eq!(breakdown.format_tip(&TipLocale::EnUS), "$0.00");
}

#[test]
fn test_negative_text_entry_parses_with_its_sign() {
    assert_eq!(parse_amount("-12.00"), dec!(-12.00));

    let breakdown = TipCalculator::new()
        .bill(parse_amount("-12.00"))
        .percent(parse_amount("50"))
        .calculate();
    assert_eq!(breakdown.tip, dec!(-6.00));
}
