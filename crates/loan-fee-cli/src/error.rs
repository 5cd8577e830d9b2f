use clap::error::ErrorKind;
use thiserror::Error;

use loan_fee_core::LoanFeeError;

/// Everything that can stop the CLI, split into bad input (exit 1) and
/// unexpected failures (exit 2).
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid number of arguments.")]
    Usage,

    #[error("Invalid arguments: {0}")]
    Arguments(String),

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Fee(#[from] LoanFeeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn from_clap(e: &clap::Error) -> Self {
        match e.kind() {
            ErrorKind::UnknownArgument
            | ErrorKind::ArgumentConflict
            | ErrorKind::InvalidSubcommand
            | ErrorKind::TooManyValues
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand => CliError::Usage,
            _ => CliError::Arguments(clap_detail(e)),
        }
    }

    pub fn is_user_error(&self) -> bool {
        match self {
            CliError::Usage | CliError::Arguments(_) | CliError::Input(_) => true,
            CliError::Fee(e) => e.is_user_error(),
            CliError::Serialization(_) => false,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            1
        } else {
            2
        }
    }
}

/// clap's own message up to the first blank line, without the `error:`
/// prefix or the trailing usage hint.
fn clap_detail(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let detail = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    let detail = detail.strip_prefix("error:").unwrap_or(&detail).trim();
    if detail.is_empty() {
        "could not parse command line".to_string()
    } else {
        detail.to_string()
    }
}
