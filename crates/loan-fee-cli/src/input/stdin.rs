use std::io::{self, Read};

use loan_fee_core::FeeRequest;

use super::parse_json;
use crate::error::CliError;

/// Read JSON fee requests from stdin when data is being piped.
/// Returns None if stdin is a TTY or empty.
pub fn read_requests() -> Result<Option<Vec<FeeRequest>>, CliError> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CliError::Input(format!("Failed to read stdin: {e}")))?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    parse_json(trimmed)
        .map(Some)
        .map_err(|e| CliError::Input(format!("Failed to parse stdin: {e}")))
}
