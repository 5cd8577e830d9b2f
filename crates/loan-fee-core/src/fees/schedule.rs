//! Compiled-in fee schedules, one per supported loan term.
//!
//! Each schedule is a list of (amount, fee) breakpoints strictly increasing
//! in amount. Fees between breakpoints are found by linear interpolation
//! (see [`super::interpolation`]).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::term::LoanTerm;
use crate::error::LoanFeeError;
use crate::monetary::Monetary;
use crate::LoanFeeResult;

/// An anchor point of a fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub amount: Decimal,
    pub fee: Decimal,
}

impl Breakpoint {
    pub const fn new(amount: Decimal, fee: Decimal) -> Self {
        Breakpoint { amount, fee }
    }
}

static TWELVE_MONTH_BREAKPOINTS: [Breakpoint; 20] = [
    Breakpoint::new(dec!(1000), dec!(50)),
    Breakpoint::new(dec!(2000), dec!(90)),
    Breakpoint::new(dec!(3000), dec!(90)),
    Breakpoint::new(dec!(4000), dec!(115)),
    Breakpoint::new(dec!(5000), dec!(100)),
    Breakpoint::new(dec!(6000), dec!(120)),
    Breakpoint::new(dec!(7000), dec!(140)),
    Breakpoint::new(dec!(8000), dec!(160)),
    Breakpoint::new(dec!(9000), dec!(180)),
    Breakpoint::new(dec!(10000), dec!(200)),
    Breakpoint::new(dec!(11000), dec!(220)),
    Breakpoint::new(dec!(12000), dec!(240)),
    Breakpoint::new(dec!(13000), dec!(260)),
    Breakpoint::new(dec!(14000), dec!(280)),
    Breakpoint::new(dec!(15000), dec!(300)),
    Breakpoint::new(dec!(16000), dec!(320)),
    Breakpoint::new(dec!(17000), dec!(340)),
    Breakpoint::new(dec!(18000), dec!(360)),
    Breakpoint::new(dec!(19000), dec!(380)),
    Breakpoint::new(dec!(20000), dec!(400)),
];

static TWENTY_FOUR_MONTH_BREAKPOINTS: [Breakpoint; 20] = [
    Breakpoint::new(dec!(1000), dec!(70)),
    Breakpoint::new(dec!(2000), dec!(100)),
    Breakpoint::new(dec!(3000), dec!(120)),
    Breakpoint::new(dec!(4000), dec!(160)),
    Breakpoint::new(dec!(5000), dec!(200)),
    Breakpoint::new(dec!(6000), dec!(240)),
    Breakpoint::new(dec!(7000), dec!(280)),
    Breakpoint::new(dec!(8000), dec!(320)),
    Breakpoint::new(dec!(9000), dec!(360)),
    Breakpoint::new(dec!(10000), dec!(400)),
    Breakpoint::new(dec!(11000), dec!(440)),
    Breakpoint::new(dec!(12000), dec!(480)),
    Breakpoint::new(dec!(13000), dec!(520)),
    Breakpoint::new(dec!(14000), dec!(560)),
    Breakpoint::new(dec!(15000), dec!(600)),
    Breakpoint::new(dec!(16000), dec!(640)),
    Breakpoint::new(dec!(17000), dec!(680)),
    Breakpoint::new(dec!(18000), dec!(720)),
    Breakpoint::new(dec!(19000), dec!(760)),
    Breakpoint::new(dec!(20000), dec!(800)),
];

/// Breakpoints for one loan term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeSchedule<'a> {
    term: LoanTerm,
    breakpoints: &'a [Breakpoint],
}

impl<'a> FeeSchedule<'a> {
    /// Wrap a breakpoint list, rejecting empty lists and amounts that are
    /// not strictly increasing.
    pub fn new(term: LoanTerm, breakpoints: &'a [Breakpoint]) -> LoanFeeResult<Self> {
        if breakpoints.is_empty() {
            return Err(LoanFeeError::InvalidSchedule(format!(
                "no breakpoints defined for {term}"
            )));
        }
        if let Some(w) = breakpoints.windows(2).find(|w| w[1].amount <= w[0].amount) {
            return Err(LoanFeeError::InvalidSchedule(format!(
                "breakpoint amounts must be strictly increasing ({} followed by {})",
                Monetary::format_value(w[0].amount),
                Monetary::format_value(w[1].amount)
            )));
        }
        Ok(FeeSchedule { term, breakpoints })
    }

    pub fn term(&self) -> LoanTerm {
        self.term
    }

    pub fn breakpoints(&self) -> &'a [Breakpoint] {
        self.breakpoints
    }

    pub fn min_amount(&self) -> Decimal {
        self.breakpoints[0].amount
    }

    pub fn max_amount(&self) -> Decimal {
        self.breakpoints[self.breakpoints.len() - 1].amount
    }
}

/// The schedule for a supported term.
pub fn schedule_for(term: LoanTerm) -> FeeSchedule<'static> {
    let breakpoints: &'static [Breakpoint] = match term {
        LoanTerm::TwelveMonths => &TWELVE_MONTH_BREAKPOINTS,
        LoanTerm::TwentyFourMonths => &TWENTY_FOUR_MONTH_BREAKPOINTS,
    };
    FeeSchedule { term, breakpoints }
}

/// The schedule for a raw month count. Anything other than a supported term
/// fails with [`LoanFeeError::UnsupportedLoanTerm`].
pub fn schedule_for_months(months: u32) -> LoanFeeResult<FeeSchedule<'static>> {
    LoanTerm::from_months(months).map(schedule_for)
}

/// Lowest and highest breakpoint amount across every schedule.
pub fn breakpoint_bounds() -> (Decimal, Decimal) {
    LoanTerm::ALL
        .iter()
        .map(|t| schedule_for(*t))
        .fold((Decimal::MAX, Decimal::MIN), |(lo, hi), s| {
            (lo.min(s.min_amount()), hi.max(s.max_amount()))
        })
}
