use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::schedule::breakpoint_bounds;
use super::term::LoanTerm;
use crate::error::LoanFeeError;
use crate::monetary::Monetary;
use crate::LoanFeeResult;

/// A validated (amount, term) pair. Only obtainable through validation, so
/// holders can pass it to the calculator without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanFeeCalculatorParams {
    amount: Monetary,
    term: LoanTerm,
}

impl LoanFeeCalculatorParams {
    /// Validate raw user input.
    ///
    /// Checks run in a fixed order: the amount must parse, then the term must
    /// be supported, then the amount must lie within the global breakpoint
    /// range. The first failure is returned.
    pub fn new(amount_text: &str, term_text: &str) -> LoanFeeResult<Self> {
        let value = Monetary::parse_decimal(amount_text)?;
        let term = LoanTerm::parse(term_text)?;
        check_range(value, term)?;
        let amount = Monetary::from_decimal(value)?;
        Ok(LoanFeeCalculatorParams { amount, term })
    }

    /// Range-check already typed values.
    pub fn from_parts(amount: Monetary, term: LoanTerm) -> LoanFeeResult<Self> {
        check_range(amount.value(), term)?;
        Ok(LoanFeeCalculatorParams { amount, term })
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }

    pub fn term(&self) -> LoanTerm {
        self.term
    }
}

fn check_range(value: Decimal, term: LoanTerm) -> LoanFeeResult<()> {
    let (min, max) = breakpoint_bounds();
    if value < min || value > max {
        debug!(amount = %value, %term, "amount outside breakpoint range");
        return Err(LoanFeeError::out_of_range(min, max));
    }
    Ok(())
}

/// Unvalidated request as it arrives from a batch file or JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRequest {
    pub amount: Monetary,
    pub term: u32,
}

impl TryFrom<FeeRequest> for LoanFeeCalculatorParams {
    type Error = LoanFeeError;

    fn try_from(req: FeeRequest) -> Result<Self, Self::Error> {
        let term = LoanTerm::from_months(req.term)?;
        LoanFeeCalculatorParams::from_parts(req.amount, term)
    }
}
