//! Linear interpolation of fees between schedule breakpoints.
//!
//! The valid domain is the closed interval from the first to the last
//! breakpoint amount. Amounts equal to a breakpoint return that breakpoint's
//! fee with no arithmetic, so both endpoints are exact.

use rust_decimal::Decimal;
use tracing::trace;

use super::schedule::Breakpoint;
use crate::error::LoanFeeError;
use crate::LoanFeeResult;

/// Where an amount sits within a breakpoint list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The amount is exactly a breakpoint.
    Exact(Breakpoint),
    /// The amount lies strictly between two consecutive breakpoints.
    Between {
        lower: Breakpoint,
        upper: Breakpoint,
    },
}

impl Bracket {
    pub fn lower(&self) -> Breakpoint {
        match self {
            Bracket::Exact(bp) => *bp,
            Bracket::Between { lower, .. } => *lower,
        }
    }

    pub fn upper(&self) -> Breakpoint {
        match self {
            Bracket::Exact(bp) => *bp,
            Bracket::Between { upper, .. } => *upper,
        }
    }

    /// Fee at `amount` within this bracket.
    pub fn fee_at(&self, amount: Decimal) -> Decimal {
        match self {
            Bracket::Exact(bp) => bp.fee,
            Bracket::Between { lower, upper } => {
                lower.fee
                    + (amount - lower.amount) * (upper.fee - lower.fee)
                        / (upper.amount - lower.amount)
            }
        }
    }
}

/// Find the breakpoints surrounding `amount`.
///
/// `breakpoints` must be strictly increasing in amount. Amounts below the
/// first or above the last breakpoint fail with
/// [`LoanFeeError::AmountOutOfRange`] carrying that list's bounds.
pub fn locate(amount: Decimal, breakpoints: &[Breakpoint]) -> LoanFeeResult<Bracket> {
    let (first, last) = match (breakpoints.first(), breakpoints.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(LoanFeeError::InvalidSchedule(
                "cannot interpolate over an empty breakpoint list".into(),
            ))
        }
    };

    let mut lower: Option<Breakpoint> = None;
    let mut upper: Option<Breakpoint> = None;

    for bp in breakpoints {
        if amount == bp.amount {
            return Ok(Bracket::Exact(*bp));
        }
        if amount > bp.amount {
            lower = Some(*bp);
        } else {
            upper = Some(*bp);
            break;
        }
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(Bracket::Between { lower, upper }),
        _ => Err(LoanFeeError::out_of_range(first.amount, last.amount)),
    }
}

/// Interpolated fee for `amount` over `breakpoints`.
pub fn interpolate_fee(amount: Decimal, breakpoints: &[Breakpoint]) -> LoanFeeResult<Decimal> {
    let bracket = locate(amount, breakpoints)?;
    let fee = bracket.fee_at(amount);
    trace!(%amount, ?bracket, %fee, "interpolated fee");
    Ok(fee)
}
