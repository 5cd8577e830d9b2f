use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoanFeeError;
use crate::LoanFeeResult;

/// Supported loan terms, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    TwelveMonths,
    TwentyFourMonths,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 2] = [LoanTerm::TwelveMonths, LoanTerm::TwentyFourMonths];

    pub fn months(self) -> u32 {
        match self {
            LoanTerm::TwelveMonths => 12,
            LoanTerm::TwentyFourMonths => 24,
        }
    }

    pub fn from_months(months: u32) -> LoanFeeResult<Self> {
        LoanTerm::ALL
            .into_iter()
            .find(|t| t.months() == months)
            .ok_or_else(|| LoanFeeError::unsupported_term(months.to_string()))
    }

    /// Parse raw user text. The trimmed text must be an integer equal to one
    /// of the supported month counts; `"12 months"` or `"12.0"` are rejected.
    pub fn parse(text: &str) -> LoanFeeResult<Self> {
        let months: u32 = text
            .trim()
            .parse()
            .map_err(|_| LoanFeeError::unsupported_term(text))?;
        Self::from_months(months).map_err(|_| LoanFeeError::unsupported_term(text))
    }

    /// Supported month counts joined with `separator`, e.g. `"12 or 24"`.
    pub fn implode_terms(separator: &str) -> String {
        LoanTerm::ALL
            .iter()
            .map(|t| t.months().to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

impl FromStr for LoanTerm {
    type Err = LoanFeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoanTerm::parse(s)
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = LoanFeeError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        LoanTerm::from_months(months)
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> u32 {
        term.months()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_terms() {
        assert_eq!(LoanTerm::parse("12").unwrap(), LoanTerm::TwelveMonths);
        assert_eq!(LoanTerm::parse(" 24 ").unwrap(), LoanTerm::TwentyFourMonths);
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for text in ["18", "0", "-12", "12.0", "12 months", "twelve", ""] {
            match LoanTerm::parse(text) {
                Err(LoanFeeError::UnsupportedLoanTerm { term, supported }) => {
                    assert_eq!(term, text);
                    assert_eq!(supported, "12 or 24");
                }
                other => panic!("expected UnsupportedLoanTerm for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_serde_as_month_count() {
        assert_eq!(serde_json::to_string(&LoanTerm::TwentyFourMonths).unwrap(), "24");
        let term: LoanTerm = serde_json::from_str("12").unwrap();
        assert_eq!(term, LoanTerm::TwelveMonths);
        assert!(serde_json::from_str::<LoanTerm>("18").is_err());
    }

    #[test]
    fn test_implode_terms() {
        assert_eq!(LoanTerm::implode_terms(", "), "12, 24");
    }
}
