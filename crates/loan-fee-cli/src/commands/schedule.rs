use clap::Args;
use serde_json::{json, Value};

use loan_fee_core::{schedule_for, LoanTerm, Monetary};

use crate::error::CliError;

/// Arguments for printing a fee schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan term in months (12 or 24)
    pub term: String,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, CliError> {
    let term = LoanTerm::parse(&args.term)?;
    let rows: Vec<Value> = schedule_for(term)
        .breakpoints()
        .iter()
        .map(|bp| {
            json!({
                "amount": Monetary::format_value(bp.amount),
                "fee": Monetary::format_value(bp.fee),
            })
        })
        .collect();

    Ok(json!({
        "term_months": term.months(),
        "results": rows,
    }))
}
