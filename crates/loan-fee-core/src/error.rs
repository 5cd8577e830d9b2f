use rust_decimal::Decimal;
use thiserror::Error;

use crate::monetary::Monetary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanFeeError {
    #[error("Invalid amount format: '{input}' is not a decimal amount")]
    InvalidAmountFormat { input: String },

    #[error("Unsupported loan term '{term}' : Term must be {supported} months")]
    UnsupportedLoanTerm { term: String, supported: String },

    #[error("Loan amount is out of the defined range : Amount must be between {min} and {max}")]
    AmountOutOfRange { min: Monetary, max: Monetary },

    #[error("Invalid fee schedule: {0}")]
    InvalidSchedule(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LoanFeeError {
    /// Bad input the caller can correct, as opposed to a defect in the
    /// calculator itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LoanFeeError::InvalidAmountFormat { .. }
                | LoanFeeError::UnsupportedLoanTerm { .. }
                | LoanFeeError::AmountOutOfRange { .. }
        )
    }

    /// Out-of-range error carrying `min` and `max` as cent amounts. Bounds
    /// that cannot be held in cents mean the schedule itself is broken.
    pub fn out_of_range(min: Decimal, max: Decimal) -> Self {
        match (Monetary::from_decimal(min), Monetary::from_decimal(max)) {
            (Ok(min), Ok(max)) => LoanFeeError::AmountOutOfRange { min, max },
            _ => LoanFeeError::Internal(format!(
                "breakpoint bounds {min} .. {max} are not representable in cents"
            )),
        }
    }

    pub(crate) fn unsupported_term(term: impl Into<String>) -> Self {
        LoanFeeError::UnsupportedLoanTerm {
            term: term.into(),
            supported: crate::fees::term::LoanTerm::implode_terms(" or "),
        }
    }
}
