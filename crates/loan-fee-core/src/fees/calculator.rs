//! Loan fee calculation.
//!
//! The fee is the schedule's interpolated fee adjusted upward so that the
//! total repayable amount (`amount + fee`) is a multiple of
//! [`ROUNDING_INCREMENT`]:
//!
//! ```text
//! total   = amount + interpolated_fee
//! rounded = ceil(total / 5) * 5
//! fee     = rounded - amount
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::interpolation::{locate, Bracket};
use super::params::LoanFeeCalculatorParams;
use super::schedule::schedule_for;
use super::term::LoanTerm;
use crate::envelope::Computation;
use crate::error::LoanFeeError;
use crate::monetary::Monetary;
use crate::LoanFeeResult;

/// Step the total repayable amount is rounded up to.
pub const ROUNDING_INCREMENT: Decimal = dec!(5);

/// Full breakdown of a fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub amount: Monetary,
    pub term: LoanTerm,
    /// Schedule fee before the rounding adjustment
    pub interpolated_fee: Decimal,
    /// amount + interpolated fee
    pub total: Decimal,
    /// Total rounded up to the increment
    pub rounded_total: Decimal,
    /// Final fee charged
    pub fee: Monetary,
    pub lower_breakpoint: Decimal,
    pub upper_breakpoint: Decimal,
}

/// Calculate the fee for validated params.
pub fn calculate_fee(params: &LoanFeeCalculatorParams) -> LoanFeeResult<Monetary> {
    let (quote, _) = compute(params)?;
    Ok(quote.fee)
}

/// Calculate the fee and return the full breakdown in a computation envelope.
pub fn quote_fee(params: &LoanFeeCalculatorParams) -> LoanFeeResult<Computation<FeeQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let (quote, bracket) = compute(params)?;

    if let Bracket::Between { lower, upper } = bracket {
        if upper.fee < lower.fee {
            warnings.push(format!(
                "{} schedule fee decreases between {} and {}",
                quote.term,
                Monetary::format_value(lower.amount),
                Monetary::format_value(upper.amount)
            ));
        }
    }

    let assumptions = serde_json::json!({
        "term_months": quote.term.months(),
        "rounding_increment": ROUNDING_INCREMENT.to_string(),
        "schedule_breakpoints": schedule_for(quote.term).breakpoints().len(),
    });

    Ok(Computation::new(
        "Piecewise-linear fee schedule, total rounded up to the nearest 5",
        assumptions,
        quote,
    )
    .with_warnings(warnings)
    .timed(start))
}

/// Round `total` up to the next multiple of `increment`.
pub fn round_up_to_increment(total: Decimal, increment: Decimal) -> LoanFeeResult<Decimal> {
    if increment <= Decimal::ZERO {
        return Err(LoanFeeError::Internal(format!(
            "rounding increment must be positive, got {increment}"
        )));
    }
    Ok((total / increment).ceil() * increment)
}

fn compute(params: &LoanFeeCalculatorParams) -> LoanFeeResult<(FeeQuote, Bracket)> {
    let schedule = schedule_for(params.term());
    let amount = params.amount().value();
    debug!(term = %params.term(), %amount, "calculating loan fee");

    let bracket = locate(amount, schedule.breakpoints())?;
    let interpolated_fee = bracket.fee_at(amount);
    let total = amount + interpolated_fee;
    let rounded_total = round_up_to_increment(total, ROUNDING_INCREMENT)?;
    let fee = Monetary::from_decimal(rounded_total - amount)?;

    if fee.is_negative() {
        return Err(LoanFeeError::Internal(format!(
            "negative fee {fee} for amount {}",
            params.amount()
        )));
    }

    debug!(%interpolated_fee, %rounded_total, %fee, "loan fee calculated");

    let quote = FeeQuote {
        amount: params.amount(),
        term: params.term(),
        interpolated_fee,
        total,
        rounded_total,
        fee,
        lower_breakpoint: bracket.lower().amount,
        upper_breakpoint: bracket.upper().amount,
    };
    Ok((quote, bracket))
}
