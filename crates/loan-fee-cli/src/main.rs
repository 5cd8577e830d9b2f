mod commands;
mod error;
mod input;
mod output;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::fee::FeeArgs;
use commands::schedule::ScheduleArgs;
use error::CliError;

const USAGE: &str = "Usage: calculate-fee <amount> <term>";
const EXAMPLE: &str = "Example: calculate-fee 11,500.00 24";

/// Calculate the one-time fee for a fixed-term loan
#[derive(Parser)]
#[command(
    name = "calculate-fee",
    version,
    about = "Calculate the one-time fee for a fixed-term loan",
    long_about = "Calculates a loan fee by interpolating the fee schedule for the loan \
                  term, then rounding so that amount plus fee is a multiple of 5. \
                  Amounts may use thousands separators (e.g. 11,500.00); terms are \
                  12 or 24 months.",
    args_conflicts_with_subcommands = true,
    allow_negative_numbers = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    fee: FeeArgs,

    /// Output format
    #[arg(long, default_value = "minimal", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fee schedule for a loan term
    Schedule(ScheduleArgs),
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            configure_colors();
            let err = CliError::from_clap(&e);
            report_error(&err);
            process::exit(err.exit_code());
        }
    };

    configure_colors();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Schedule(args)) => commands::schedule::run_schedule(args),
        None => commands::fee::run_fee(cli.fee),
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            report_error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn report_error(e: &CliError) {
    if e.is_user_error() {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if matches!(e, CliError::Usage | CliError::Arguments(_)) {
            eprintln!("{USAGE}");
            eprintln!("{EXAMPLE}");
        }
    } else {
        eprintln!("{}: {}", "An unexpected error occurred".red().bold(), e);
    }
}

/// Colour only when stderr is a terminal.
fn configure_colors() {
    if !atty::is(atty::Stream::Stderr) {
        colored::control::set_override(false);
    }
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` overrides
/// the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
