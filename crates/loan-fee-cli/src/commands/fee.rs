use clap::Args;
use serde_json::{json, Value};
use tracing::info;

use loan_fee_core::{quote_fee, FeeRequest, LoanFeeCalculatorParams};

use crate::error::CliError;
use crate::input;

/// Arguments for a fee calculation
#[derive(Args)]
pub struct FeeArgs {
    /// Loan amount, e.g. 11,500.00
    pub amount: Option<String>,

    /// Loan term in months (12 or 24)
    pub term: Option<String>,

    /// Path to a JSON or YAML file with one request or a list of requests
    #[arg(long, conflicts_with_all = ["amount", "term"])]
    pub input: Option<String>,
}

pub fn run_fee(args: FeeArgs) -> Result<Value, CliError> {
    match (args.amount, args.term, args.input) {
        (Some(amount), Some(term), None) => {
            let params = LoanFeeCalculatorParams::new(&amount, &term)?;
            let result = quote_fee(&params)?;
            Ok(serde_json::to_value(result)?)
        }
        (None, None, Some(path)) => run_batch(input::file::read_requests(&path)?),
        (None, None, None) => match input::stdin::read_requests()? {
            Some(requests) => run_batch(requests),
            None => Err(CliError::Usage),
        },
        _ => Err(CliError::Usage),
    }
}

/// Quote every request, stopping at the first invalid one.
fn run_batch(requests: Vec<FeeRequest>) -> Result<Value, CliError> {
    info!(count = requests.len(), "quoting batch");

    let mut results = Vec::with_capacity(requests.len());
    let mut warnings = Vec::new();
    for req in requests {
        let params = LoanFeeCalculatorParams::try_from(req)?;
        let out = quote_fee(&params)?;
        warnings.extend(out.warnings);
        results.push(serde_json::to_value(out.result)?);
    }

    Ok(json!({
        "results": results,
        "warnings": warnings,
    }))
}
