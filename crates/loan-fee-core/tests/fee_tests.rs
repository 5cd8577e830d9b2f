use loan_fee_core::fees::interpolation::interpolate_fee;
use loan_fee_core::{
    calculate_fee, schedule_for, LoanFeeCalculatorParams, LoanFeeError, LoanTerm, Monetary,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fee_for(amount: &str, term: &str) -> Result<Monetary, LoanFeeError> {
    let params = LoanFeeCalculatorParams::new(amount, term)?;
    calculate_fee(&params)
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_reference_scenarios() {
    let cases = [
        ("5000.00", "12", "100.00"),
        ("10000.00", "24", "400.00"),
        ("11500.00", "24", "460.00"),
        ("19,250.00", "12", "385.00"),
        ("11500.01", "24", "464.99"),
    ];
    for (amount, term, expected) in cases {
        let fee = fee_for(amount, term).unwrap();
        assert_eq!(fee.format(), expected, "amount {amount}, term {term}");
    }
}

#[test]
fn test_below_global_minimum() {
    let err = fee_for("999.00", "12").unwrap_err();
    assert!(matches!(err, LoanFeeError::AmountOutOfRange { .. }));
    assert_eq!(
        err.to_string(),
        "Loan amount is out of the defined range : Amount must be between 1000.00 and 20000.00"
    );
}

#[test]
fn test_unsupported_term() {
    let err = fee_for("1000.00", "18").unwrap_err();
    assert!(matches!(err, LoanFeeError::UnsupportedLoanTerm { .. }));
}

#[test]
fn test_domain_endpoints() {
    assert_eq!(fee_for("1000", "12").unwrap().format(), "50.00");
    assert_eq!(fee_for("1,000.00", "24").unwrap().format(), "70.00");
    assert_eq!(fee_for("20000", "12").unwrap().format(), "400.00");
    assert_eq!(fee_for("20,000.00", "24").unwrap().format(), "800.00");
}

// ===========================================================================
// Schedule reproduction
// ===========================================================================

#[test]
fn test_every_breakpoint_interpolates_to_its_fee() {
    for term in LoanTerm::ALL {
        let schedule = schedule_for(term);
        for bp in schedule.breakpoints() {
            assert_eq!(
                interpolate_fee(bp.amount, schedule.breakpoints()).unwrap(),
                bp.fee,
                "{term} at {}",
                bp.amount
            );
        }
    }
}

#[test]
fn test_twelve_month_segments_follow_the_table() {
    let bps = schedule_for(LoanTerm::TwelveMonths).breakpoints();
    for w in bps.windows(2) {
        let mid = (w[0].amount + w[1].amount) / dec!(2);
        let expected = (w[0].fee + w[1].fee) / dec!(2);
        assert_eq!(interpolate_fee(mid, bps).unwrap(), expected);
    }
}

#[test]
fn test_direct_interpolation_out_of_range() {
    let bps = schedule_for(LoanTerm::TwentyFourMonths).breakpoints();
    for amount in [dec!(0), dec!(999.99), dec!(20000.01), dec!(1000000)] {
        assert!(matches!(
            interpolate_fee(amount, bps),
            Err(LoanFeeError::AmountOutOfRange { .. })
        ));
    }
}

// ===========================================================================
// Invariants
// ===========================================================================

fn term_strategy() -> impl Strategy<Value = LoanTerm> {
    prop_oneof![Just(LoanTerm::TwelveMonths), Just(LoanTerm::TwentyFourMonths)]
}

proptest! {
    #[test]
    fn prop_total_is_multiple_of_five(cents in 100_000i64..=2_000_000, term in term_strategy()) {
        let amount = Monetary::from_cents(cents);
        let params = LoanFeeCalculatorParams::from_parts(amount, term).unwrap();
        let fee = calculate_fee(&params).unwrap();

        prop_assert!(fee.value() >= Decimal::ZERO);
        let total = amount.value() + fee.value();
        prop_assert_eq!(total % dec!(5), Decimal::ZERO);
    }

    #[test]
    fn prop_fee_covers_schedule_fee(cents in 100_000i64..=2_000_000, term in term_strategy()) {
        let amount = Monetary::from_cents(cents);
        let params = LoanFeeCalculatorParams::from_parts(amount, term).unwrap();
        let fee = calculate_fee(&params).unwrap();
        let raw = interpolate_fee(amount.value(), schedule_for(term).breakpoints()).unwrap();

        prop_assert!(fee.value() >= raw);
        prop_assert!(fee.value() - raw < dec!(5));
    }

    #[test]
    fn prop_twenty_four_month_fee_is_non_decreasing(a in 100_000i64..=2_000_000, b in 100_000i64..=2_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let bps = schedule_for(LoanTerm::TwentyFourMonths).breakpoints();
        let fee_lo = interpolate_fee(Monetary::from_cents(lo).value(), bps).unwrap();
        let fee_hi = interpolate_fee(Monetary::from_cents(hi).value(), bps).unwrap();
        prop_assert!(fee_lo <= fee_hi);
    }

    #[test]
    fn prop_out_of_range_amounts_rejected(
        cents in prop_oneof![0i64..100_000, 2_000_001i64..1_000_000_000],
        term in term_strategy(),
    ) {
        let result = LoanFeeCalculatorParams::from_parts(Monetary::from_cents(cents), term);
        let is_out_of_range = matches!(result, Err(LoanFeeError::AmountOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_format_round_trips(cents in -1_000_000_000i64..1_000_000_000) {
        let m = Monetary::from_cents(cents);
        let text = Monetary::format_value(m.value());
        prop_assert_eq!(Monetary::parse(&text).unwrap(), m);
    }
}
